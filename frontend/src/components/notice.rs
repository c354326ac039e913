use super::super::Model;
use yew::prelude::*;

pub fn render_notice(model: &Model) -> Html {
    match model.notices.current() {
        Some(notice) => html! {
            <div id="messageBox" class={notice.level.classes()} role="alert" data-level={notice.level.as_ref().to_string()}>
                { &notice.text }
            </div>
        },
        None => html! { <div id="messageBox" class="hidden"></div> },
    }
}
