//! Renders the single visible toast from `RwSignal<ToastState>`.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use leptos::prelude::*;

use crate::state::toast::{NoticeKind, ToastState};

/// CSS modifier class for a notice kind.
pub(crate) fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast toast--success",
        NoticeKind::Error => "toast toast--error",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let on_close = move |_| {
        if let Some(id) = toasts.with_untracked(|t| t.current.as_ref().map(|(id, _)| *id)) {
            toasts.update(|t| t.dismiss(id));
        }
    };

    view! {
        {move || {
            toasts
                .get()
                .notice()
                .cloned()
                .map(|notice| {
                    let role = if notice.kind == NoticeKind::Error { "alert" } else { "status" };
                    view! {
                        <div class=toast_class(notice.kind) role=role>
                            <span class="toast__message">{notice.message}</span>
                            <button class="toast__close" type="button" aria-label="Dismiss" on:click=on_close>
                                "x"
                            </button>
                        </div>
                    }
                })
        }}
    }
}
