use super::super::Model;
use super::super::Msg;
use shared::chat::ChatEntry;
use web_sys::{Element, HtmlInputElement, KeyboardEvent};
use yew::prelude::*;

const SUBMIT_KEY: &str = "Enter";

pub fn render_chat_panel(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    let handle_input = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::UpdateDraft(input.value())
    });
    let handle_key_up =
        link.batch_callback(|e: KeyboardEvent| (e.key() == SUBMIT_KEY).then_some(Msg::SendChat));

    html! {
        <section class="chat-panel flex flex-col space-y-4">
            <h2>{"Assistant"}</h2>
            <div
                id="chatHistory"
                ref={model.chat_history.clone()}
                class="flex-1 overflow-y-auto space-y-3 h-96"
                aria-live="polite"
            >
                { for model.chat.log().entries().iter().map(render_entry) }
            </div>
            <div class="flex space-x-2">
                <input
                    type="text"
                    id="userMessage"
                    class="flex-1 p-2 rounded-lg text-gray-900"
                    placeholder="Ask about brain tumors and treatments..."
                    value={model.chat.draft().to_string()}
                    oninput={handle_input}
                    onkeyup={handle_key_up}
                />
                <button id="sendButton" class="analyze-btn" onclick={link.callback(|_| Msg::SendChat)}>
                    <i class="fa-solid fa-paper-plane"></i>{" Send"}
                </button>
            </div>
        </section>
    }
}

fn render_entry(entry: &ChatEntry) -> Html {
    html! {
        <div key={entry.id.to_string()} class={entry.sender.row_classes()}>
            <div class={classes!(
                "p-3", "rounded-xl", "max-w-[80%]", "shadow-lg", "text-sm",
                "transition", "duration-300", "transform", "hover:scale-[1.02]",
                entry.sender.bubble_classes()
            )}>
                if entry.is_placeholder() {
                    <span class="loader mr-2"></span>
                }
                { &entry.text }
            </div>
        </div>
    }
}

/// Keeps the newest bubble in view.
pub fn scroll_to_newest(history: &NodeRef) {
    if let Some(element) = history.cast::<Element>() {
        element.set_scroll_top(element.scroll_height());
    }
}
