use super::super::Model;
use super::super::Msg;
use super::utils::first_image_file;
use gloo_file::File as GlooFile;
use gloo_file::callbacks::read_as_data_url;
use gloo_timers::callback::Timeout;
use shared::chat::{MessageId, play_reply_audio};
use shared::notice::NoticeLevel;
use shared::prediction::notice_for;
use shared::{Backend, ChatResponse, ClientError, PredictionResult};
use wasm_bindgen_futures::spawn_local;
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

pub fn show_notice(model: &mut Model, ctx: &Context<Model>, level: NoticeLevel, text: &str) {
    let id = model.notices.show(level, text);
    let link = ctx.link().clone();
    // Replacing the handle cancels the previous notice's timer.
    model.notice_timeout = Some(Timeout::new(model.config.notice_timeout_ms, move || {
        link.send_message(Msg::DismissNotice(id));
    }));
}

pub fn handle_file_chosen(model: &mut Model, ctx: &Context<Model>, file: Option<GlooFile>) -> bool {
    // Dropping an unfinished reader aborts it.
    model.preview_reader = None;
    let generation = model.preview.select(file.is_some());
    model.upload = file;

    if let (Some(generation), Some(file)) = (generation, model.upload.as_ref()) {
        log::debug!("Reading {} for preview", file.name());
        let link = ctx.link().clone();
        let reader = read_as_data_url(file, move |result| {
            let result = result.map_err(|e| format!("{:?}", e));
            link.send_message(Msg::PreviewLoaded(generation, result));
        });
        model.preview_reader = Some(reader);
    }

    true
}

pub fn handle_preview_loaded(
    model: &mut Model,
    generation: u64,
    result: Result<String, String>,
) -> bool {
    model.preview.loaded(generation, result)
}

pub fn handle_predict(model: &mut Model, ctx: &Context<Model>) -> bool {
    let file = model.upload.clone();
    match model.prediction.trigger(file.is_some()) {
        None => return false,
        Some(Err(e)) => {
            let (level, text) = notice_for(&e);
            show_notice(model, ctx, level, text);
            return true;
        }
        Some(Ok(())) => {}
    }

    if let Some(file) = file {
        send_prediction_request(model, ctx, file);
    }
    true
}

pub fn send_prediction_request(model: &Model, ctx: &Context<Model>, file: GlooFile) {
    spawn_local({
        let backend = model.backend.clone();
        let link = ctx.link().clone();

        async move {
            let outcome = backend.predict(&file).await;
            link.send_message(Msg::PredictionFinished(outcome));
        }
    });
}

pub fn handle_prediction_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    outcome: Result<PredictionResult, ClientError>,
) -> bool {
    if let Err(e) = model.prediction.finish(outcome) {
        let (level, text) = notice_for(&e);
        show_notice(model, ctx, level, text);
    }
    true
}

pub fn handle_send_chat(model: &mut Model, ctx: &Context<Model>) -> bool {
    let Some(pending) = model.chat.begin() else {
        return false;
    };

    spawn_local({
        let backend = model.backend.clone();
        let link = ctx.link().clone();

        async move {
            let outcome = backend.chat(&pending.request).await;
            link.send_message(Msg::ChatFinished(pending.ticket, outcome));
        }
    });

    true
}

pub fn handle_chat_finished(
    model: &mut Model,
    ticket: MessageId,
    outcome: Result<ChatResponse, ClientError>,
) -> bool {
    if let Some(audio) = model.chat.finish(ticket, outcome) {
        let player = model.player.clone();
        spawn_local(async move {
            play_reply_audio(&*player, &audio).await;
        });
    }
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            process_file_list(model, ctx, file_list);
        }
    }

    true
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            // Plain text pastes must still reach the chat input.
            if file_list.length() > 0 {
                event.prevent_default();
                return process_file_list(model, ctx, file_list);
            }
        }
    }
    false
}

pub fn process_file_list(model: &mut Model, ctx: &Context<Model>, file_list: FileList) -> bool {
    match first_image_file(&file_list) {
        Ok(file) => {
            ctx.link().send_message(Msg::FileChosen(Some(file)));
            false
        }
        Err(Some(skipped)) => {
            log::warn!("Skipping non-image file: {}", skipped);
            show_notice(
                model,
                ctx,
                NoticeLevel::Info,
                &format!("Skipped non-image file: {}", skipped),
            );
            true
        }
        Err(None) => false,
    }
}
