use super::super::Model;
use super::super::Msg;
use super::utils::{debounce, first_file};
use shared::{IntoEnumIterator, ModelVariant};
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, HtmlInputElement};
use yew::prelude::*;

pub fn render_upload_section(model: &Model, ctx: &Context<Model>) -> Html {
    html! {
        <div class="upload-section">
            { render_drop_zone(model, ctx) }
            { render_variant_selector(model, ctx) }
            { render_submit_button(model, ctx) }
        </div>
    }
}

fn render_drop_zone(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();
    let busy = model.controller.busy();

    let handle_change = link.batch_callback(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        let file = input.files().as_ref().and_then(first_file);

        input.set_value("");

        file.map(Msg::FileOffered)
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
    let trigger_file_input = Callback::from(move |_| {
        if busy {
            return;
        }
        if let Some(input) = web_sys::window()
            .unwrap()
            .document()
            .unwrap()
            .get_element_by_id("file-input")
        {
            if let Ok(html_input) = input.dyn_into::<web_sys::HtmlElement>() {
                html_input.click();
            }
        }
    });

    html! {
        <>
            <input
                type="file"
                id="file-input"
                accept="image/*"
                style="display: none;"
                disabled={busy}
                onchange={handle_change}
            />

            <div
                id="drop-zone"
                class={classes!(
                    "upload-area",
                    model.is_dragging.then_some("drag-over"),
                    busy.then_some("upload-disabled"),
                )}
                ondragover={handle_drag_over}
                ondragleave={handle_drag_leave}
                ondrop={handle_drop}
                onclick={debounce(300, {
                    let trigger_file_input = trigger_file_input.clone();
                    move || trigger_file_input.emit(())
                })}
            >
                { render_zone_content(model, ctx) }
            </div>
        </>
    }
}

fn render_zone_content(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(image) = model.controller.image() else {
        return html! {
            <div class="upload-placeholder">
                <i class="fa-solid fa-cloud-arrow-up"></i>
                <p>{"Drag & drop your cell image here, paste, or click to browse"}</p>
                <p class="file-types">{"Supported formats: JPG, PNG, WEBP, GIF"}</p>
            </div>
        };
    };

    let link = ctx.link();

    html! {
        <div class="preview-wrap">
            <img id="image-preview"
                src={image.file.preview.to_string()}
                alt={image.name.clone()} />
            {
                // The selection is locked in while its request is pending.
                if model.controller.busy() {
                    html! {}
                } else {
                    html! {
                        <button
                            class="remove-btn"
                            title="Remove this image"
                            onclick={link.callback(|e: MouseEvent| {
                                e.stop_propagation();
                                Msg::ClearImage
                            })}
                        >
                            <i class="fa-solid fa-times"></i>
                        </button>
                    }
                }
            }
        </div>
    }
}

fn render_variant_selector(model: &Model, ctx: &Context<Model>) -> Html {
    let busy = model.controller.busy();

    html! {
        <div class="variant-selector">
            { for ModelVariant::iter().map(|variant| {
                html! {
                    <label>
                        <input type="radio" name="model_variant"
                            value={variant.path_segment()}
                            checked={model.controller.variant() == variant}
                            disabled={busy}
                            onchange={ctx.link().callback(move |_| Msg::SetVariant(variant))} />
                        <span class="radio-label-text">{ variant.to_string() }</span>
                    </label>
                }
            })}
        </div>
    }
}

fn render_submit_button(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link().clone();
    let busy = model.controller.busy();

    html! {
        <button
            id="detect-button"
            class="analyze-btn"
            disabled={busy || model.controller.image().is_none()}
            onclick={debounce(300, {
                let link = link.clone();
                move || link.send_message(Msg::Submit)
            })}
        >
            {
                if busy {
                    html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Detecting..."}</> }
                } else {
                    html! { <><i class="fa-solid fa-magnifying-glass"></i>{" Detect"}</> }
                }
            }
        </button>
    }
}
