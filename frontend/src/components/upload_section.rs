use super::super::Model;
use super::super::Msg;
use super::preview_area::render_preview_area;
use gloo_file::File as GlooFile;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section space-y-4">
            { render_file_input_area(model, ctx) }
            { render_predict_button(model, ctx) }
        </div>
    }
}

fn render_file_input_area(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let handle_change = link.callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().and_then(|files| files.item(0)).map(GlooFile::from);
        Msg::FileChosen(file)
    });

    let handle_drag_over = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(true)
    });

    let handle_drag_leave = link.callback(|e: DragEvent| {
        e.prevent_default();
        Msg::SetDragging(false)
    });

    let handle_drop = link.callback(Msg::HandleDrop);

    html! {
        <>
            <input
                type="file"
                id="imageUpload"
                accept="image/*"
                class="block w-full text-sm"
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!("upload-area", model.is_dragging.then_some("drag-over"))}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
            >
                { render_preview_area(model) }
            </div>
        </>
    }
}

fn render_predict_button(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let busy = model.prediction.is_busy();

    html! {
        <button
            id="predictButton"
            class="analyze-btn"
            disabled={busy}
            onclick={link.callback(|_| Msg::Predict)}
        >
            if busy {
                <><i class="fa-solid fa-spinner fa-spin"></i>{" Analyzing..."}</>
            } else {
                <><i class="fa-solid fa-magnifying-glass"></i>{" Detect Tumor"}</>
            }
        </button>
    }
}
