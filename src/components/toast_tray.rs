//! Toast overlay rendering the notification queue from context.
//!
//! Each toast can be dismissed by click and is auto-dismissed after a short
//! delay in the browser.

use leptos::prelude::*;

use crate::state::toast::{Toast, ToastKind, ToastState};

/// Milliseconds a toast stays visible before auto-dismissal.
const TOAST_DISMISS_MS: u64 = 4_000;

/// Fixed overlay showing live toasts, newest at the bottom.
#[component]
pub fn ToastTray() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toast-tray">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    schedule_dismiss(toasts, id);
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast--success",
                        ToastKind::Error => "toast--error",
                    };
                    view! {
                        <div class=format!("toast {kind_class}")>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| toasts.update(|state| state.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

fn schedule_dismiss(toasts: RwSignal<ToastState>, id: u64) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(TOAST_DISMISS_MS)).await;
        toasts.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (toasts, id);
}
