use super::super::{Model, Msg, PreviewedImage};
use super::utils::first_file;
use crate::api;
use crate::controller::{Effect, Event, Notice};
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{ModelVariant, PredictionResponse};
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

/// How long a toast stays up before it dismisses itself.
const NOTICE_DISMISS_MS: u32 = 4000;

/// Feeds one acquired browser file into the controller, wrapping it with a
/// freshly created preview URL first. Whether it is acceptable (image or not)
/// is the controller's call; a rejected file is dropped together with its
/// preview URL.
pub fn handle_file_offered(model: &mut Model, ctx: &Context<Model>, file: web_sys::File) -> bool {
    let name = file.name();
    let content_type = file.type_();
    let file = GlooFile::from(file);
    let preview = ObjectUrl::from(file.clone());

    let effects = model.controller.apply(Event::FileOffered {
        file: PreviewedImage { file, preview },
        name,
        content_type,
    });
    run_effects(model, ctx, effects);
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    // Surface is disabled while a request is pending.
    if model.controller.busy() {
        return true;
    }

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file) = data_transfer.files().and_then(|list| first_file(&list)) {
            return handle_file_offered(model, ctx, file);
        }
    }

    true
}

pub fn handle_paste(model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if model.controller.busy() {
        return false;
    }

    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file) = data_transfer.files().and_then(|list| first_file(&list)) {
            event.prevent_default();
            return handle_file_offered(model, ctx, file);
        }
    }
    false
}

pub fn handle_clear(model: &mut Model, ctx: &Context<Model>) -> bool {
    // Dropping the previewed image revokes its object URL.
    let effects = model.controller.apply(Event::ClearRequested);
    run_effects(model, ctx, effects);
    true
}

pub fn handle_submit(model: &mut Model, ctx: &Context<Model>) -> bool {
    let effects = model.controller.apply(Event::SubmitRequested);
    run_effects(model, ctx, effects);
    true
}

pub fn handle_set_variant(
    model: &mut Model,
    ctx: &Context<Model>,
    variant: ModelVariant,
) -> bool {
    let effects = model.controller.apply(Event::VariantPicked(variant));
    run_effects(model, ctx, effects);
    true
}

pub fn handle_prediction_finished(
    model: &mut Model,
    ctx: &Context<Model>,
    outcome: Result<PredictionResponse, String>,
) -> bool {
    let event = match outcome {
        Ok(response) => Event::RequestSucceeded(response),
        Err(reason) => {
            log::warn!("Prediction request failed: {}", reason);
            Event::RequestFailed { reason }
        }
    };

    let effects = model.controller.apply(event);
    run_effects(model, ctx, effects);
    true
}

pub fn handle_dismiss_notice(model: &mut Model) -> bool {
    model.notice = None;
    // Dropping the timeout cancels the pending auto-dismiss.
    model.notice_timer = None;
    true
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    model.theme = model.theme.toggled();
    super::theme_toggle::apply_theme(model.theme);
    true
}

/// Interprets the controller's effects: spawns the inference request and
/// surfaces notifications as toasts.
fn run_effects(model: &mut Model, ctx: &Context<Model>, effects: Vec<Effect<PreviewedImage>>) {
    for effect in effects {
        match effect {
            Effect::SendRequest { file, variant } => {
                api::send_prediction_request(ctx, file.file, variant);
            }
            Effect::Notify(notice) => show_notice(model, ctx, notice),
        }
    }
}

fn show_notice(model: &mut Model, ctx: &Context<Model>, notice: Notice) {
    if let Some(timer) = model.notice_timer.take() {
        timer.cancel();
    }

    let link = ctx.link().clone();
    model.notice_timer = Some(Timeout::new(NOTICE_DISMISS_MS, move || {
        link.send_message(Msg::DismissNotice);
    }));
    model.notice = Some(notice);
}
