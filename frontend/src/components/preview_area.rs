use super::super::Model;
use yew::prelude::*;

pub fn render_preview_area(model: &Model) -> Html {
    let preview = &model.preview;

    html! {
        <div id="preview-container" class="flex justify-center items-center h-64">
            <img
                id="imagePreview"
                class={classes!("max-h-64", "object-contain", (!preview.image_visible()).then_some("hidden"))}
                src={preview.source().unwrap_or_default().to_string()}
                alt="MRI Preview"
            />
            <div
                id="previewPlaceholder"
                class={classes!("select-preview", (!preview.placeholder_visible()).then_some("hidden"))}
            >
                <i class="fa-solid fa-cloud-arrow-up fa-2x"></i>
                <p>{"Drop, paste or choose an MRI image"}</p>
            </div>
        </div>
    }
}
