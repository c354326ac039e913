use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header text-center">
            <h1 class="text-3xl font-bold"><i class="fa-solid fa-brain"></i> {" Brain Tumor Detection"}</h1>
            <p class="subtitle">{"Upload an MRI scan for analysis, or ask the assistant a question"}</p>
        </header>
    }
}
