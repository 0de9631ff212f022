use super::super::{Model, Msg};
use crate::controller::NoticeKind;
use yew::prelude::*;

/// Transient notification for the last operation. Dismisses itself after a
/// few seconds (the component arms the timer) or on the close button.
pub fn render_toast(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(notice) = &model.notice else {
        return html! {};
    };

    let link = ctx.link();
    let kind_class = match notice.kind {
        NoticeKind::Success => "toast-success",
        NoticeKind::Error => "toast-error",
    };

    html! {
        <div class={classes!("toast", kind_class)} role="status">
            <div class="toast-title">
                {
                    match notice.kind {
                        NoticeKind::Success => html! { <><i class="fa-solid fa-circle-check"></i>{" Success"}</> },
                        NoticeKind::Error => html! { <><i class="fa-solid fa-circle-exclamation"></i>{" Error"}</> },
                    }
                }
            </div>
            <p class="toast-message">{ &notice.text }</p>
            <button
                class="toast-close"
                title="Dismiss"
                onclick={link.callback(|_| Msg::DismissNotice)}
            >
                {"✕"}
            </button>
        </div>
    }
}
