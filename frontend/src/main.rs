mod api;
mod components;

use api::{HttpBackend, WebAudioPlayer};
use components::handlers;
use components::{chat_panel, header, notice, resources, results, upload_section};
use gloo_events::EventListener;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::FileReader;
use gloo_timers::callback::Timeout;
use shared::chat::{ChatSession, MessageId};
use shared::notice::NoticeBoard;
use shared::prediction::PredictionPanel;
use shared::preview::ImagePreview;
use shared::{ChatResponse, ClientError, PredictionResult, UiConfig};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

const UI_CONFIG: &str = include_str!("../../config/ui.yaml");

// Yew msg components
enum Msg {
    // File operations
    FileChosen(Option<GlooFile>),
    PreviewLoaded(u64, Result<String, String>),

    // Prediction
    Predict,
    PredictionFinished(Result<PredictionResult, ClientError>),

    // Chat
    UpdateDraft(String),
    SendChat,
    ChatFinished(MessageId, Result<ChatResponse, ClientError>),

    // UI states
    DismissNotice(u64),
    SetDragging(bool),

    // Input events
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
}

// Main component
struct Model {
    config: Rc<UiConfig>,
    backend: Rc<HttpBackend>,
    player: Rc<WebAudioPlayer>,
    upload: Option<GlooFile>,
    preview: ImagePreview,
    preview_reader: Option<FileReader>,
    prediction: PredictionPanel,
    chat: ChatSession,
    chat_history: NodeRef,
    last_rendered_entry: Option<MessageId>,
    notices: NoticeBoard,
    notice_timeout: Option<Timeout>,
    is_dragging: bool,
    paste_listener: Option<EventListener>,
}

fn load_config() -> UiConfig {
    UiConfig::from_yaml(UI_CONFIG).unwrap_or_else(|e| {
        log::warn!("{}; falling back to default endpoints", e);
        UiConfig::default()
    })
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = load_config();
        log::info!(
            "Using prediction endpoint {} and chat endpoint {}",
            config.predict_endpoint,
            config.chat_endpoint
        );

        let mut model = Self {
            backend: Rc::new(HttpBackend::new(&config)),
            config: Rc::new(config),
            player: Rc::new(WebAudioPlayer),
            upload: None,
            preview: ImagePreview::new(),
            preview_reader: None,
            prediction: PredictionPanel::new(),
            chat: ChatSession::new(),
            chat_history: NodeRef::default(),
            last_rendered_entry: None,
            notices: NoticeBoard::new(),
            notice_timeout: None,
            is_dragging: false,
            paste_listener: None,
        };

        if let Some(window) = web_sys::window() {
            let link = ctx.link().clone();
            let listener = EventListener::new(&window, "paste", move |event| {
                if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                    link.send_message(Msg::HandlePaste(clipboard_event.clone()));
                }
            });
            model.paste_listener = Some(listener);
        } else {
            log::warn!("No global window; image paste is disabled");
        }

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File operations
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, ctx, file),
            Msg::PreviewLoaded(generation, result) => {
                handlers::handle_preview_loaded(self, generation, result)
            }

            // Prediction
            Msg::Predict => handlers::handle_predict(self, ctx),
            Msg::PredictionFinished(outcome) => {
                handlers::handle_prediction_finished(self, ctx, outcome)
            }

            // Chat
            Msg::UpdateDraft(draft) => {
                self.chat.set_draft(draft);
                true
            }
            Msg::SendChat => handlers::handle_send_chat(self, ctx),
            Msg::ChatFinished(ticket, outcome) => {
                handlers::handle_chat_finished(self, ticket, outcome)
            }

            // UI states
            Msg::DismissNotice(id) => self.notices.dismiss(id),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Input events
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container mx-auto p-6 space-y-6">
                { header::render_header() }
                { notice::render_notice(self) }

                <main class="grid gap-6 md:grid-cols-2">
                    <section class="space-y-4">
                        { upload_section::render_upload_section(self, ctx) }
                        { results::render_results(self) }
                        { resources::render_resources(&self.config) }
                    </section>
                    { chat_panel::render_chat_panel(self, ctx) }
                </main>

                <footer class="app-footer">
                    <p>{"Not medical advice. Always consult a qualified physician."}</p>
                </footer>
            </div>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        let newest = self.chat.log().entries().last().map(|entry| entry.id);
        if newest != self.last_rendered_entry {
            chat_panel::scroll_to_newest(&self.chat_history);
            self.last_rendered_entry = newest;
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
