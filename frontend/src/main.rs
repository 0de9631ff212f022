use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use gloo_timers::callback::Timeout;
use shared::{ModelVariant, PredictionResponse};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

mod api;
mod components;
mod controller;

use components::handlers;
use components::header::render_header;
use components::results::render_results;
use components::theme_toggle::{self, Theme};
use components::toast::render_toast;
use components::upload_section::render_upload_section;
use controller::{Controller, Notice};

// Models
/// A selected browser file together with its preview object URL. Dropping the
/// last clone revokes the URL, so replacing or clearing the selection also
/// releases the preview resource.
#[derive(Clone)]
pub struct PreviewedImage {
    pub file: GlooFile,
    pub preview: ObjectUrl,
}

// Yew msg components
pub enum Msg {
    // File acquisition
    FileOffered(web_sys::File),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
    SetDragging(bool),

    // Interaction flow
    ClearImage,
    Submit,
    SetVariant(ModelVariant),
    PredictionFinished(Result<PredictionResponse, String>),

    // UI states
    DismissNotice,
    ToggleTheme,
}

// Main component
pub struct Model {
    pub controller: Controller<PreviewedImage>,
    pub notice: Option<Notice>,
    pub notice_timer: Option<Timeout>,
    pub is_dragging: bool,
    pub theme: Theme,
    paste_listener: Option<EventListener>,
}

impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self {
            controller: Controller::new(),
            notice: None,
            notice_timer: None,
            is_dragging: false,
            theme: theme_toggle::load_theme(),
            paste_listener: None,
        };

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // File acquisition
            Msg::FileOffered(file) => handlers::handle_file_offered(self, ctx, file),
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Interaction flow
            Msg::ClearImage => handlers::handle_clear(self, ctx),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::SetVariant(variant) => handlers::handle_set_variant(self, ctx, variant),
            Msg::PredictionFinished(outcome) => {
                handlers::handle_prediction_finished(self, ctx, outcome)
            }

            // UI states
            Msg::DismissNotice => handlers::handle_dismiss_notice(self),
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { render_header() }
                <div class="top-right">
                    { theme_toggle::render_theme_toggle(self.theme, ctx.link()) }
                </div>

                <main class="main-content">
                    { render_upload_section(self, ctx) }
                    { render_results(self) }
                </main>

                { render_toast(self, ctx) }

                <footer class="app-footer">
                    <p>{"Malaria Cell Classification | Rust WASM Frontend"}</p>
                    <a
                        href="https://github.com/ThashmikaX/Malaria-Detection-Model"
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {"Source of the model project"}
                    </a>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
