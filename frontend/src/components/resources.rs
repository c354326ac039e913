use shared::UiConfig;
use yew::prelude::*;

pub fn render_resources(config: &UiConfig) -> Html {
    if config.resources.is_empty() {
        return html! {};
    }

    html! {
        <div class="resources">
            <h3>{"Patient Resources"}</h3>
            <ul>
                { for config.resources.iter().map(|resource| html! {
                    <li key={resource.kind.to_string()}>
                        <a href={config.resource_href(resource.kind)} download="">
                            <i class="fa-solid fa-file-pdf"></i>{ format!(" {}", resource.title) }
                        </a>
                    </li>
                })}
            </ul>
        </div>
    }
}
