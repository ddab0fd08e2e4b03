use crate::services::ToastQueue;
use dioxus::prelude::*;
use dioxus_i18n::t;
use gallery_core::NotificationKind;

#[component]
pub fn Loading() -> Element {
    rsx! {
        div { style: "height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 16px;",
            div { style: "font-size: 48px; animation: spin 2s linear infinite;", "⏳" }
            p { style: "margin: 0; font-size: 18px; color: #9ca3af;", {t!("loading")} }
        }
    }
}

#[component]
pub fn ErrorView(#[props(default)] on_retry: Option<EventHandler<()>>) -> Element {
    rsx! {
        div { style: "height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 12px; padding: 16px; text-align: center;",
            div { style: "font-size: 48px;", "❌" }
            h2 { style: "margin: 0; font-size: 24px;", {t!("gallery-error-title")} }
            p { style: "margin: 0; font-size: 14px; color: #9ca3af;", {t!("gallery-error-description")} }
            if let Some(handler) = on_retry {
                button {
                    class: "btn-primary",
                    style: "margin-top: 12px;",
                    onclick: move |_| handler.call(()),
                    "🔄 "
                    {t!("action-retry")}
                }
            }
        }
    }
}

/// Renders the toast queue from context in the bottom right corner
#[component]
pub fn Toaster() -> Element {
    let mut queue = use_context::<Signal<ToastQueue>>();
    let toasts = queue.read().toasts().to_vec();

    rsx! {
        div { style: "position: fixed; bottom: 16px; right: 16px; z-index: 2000; display: flex; flex-direction: column; gap: 8px; max-width: 360px;",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    style: if toast.notification.kind == NotificationKind::Success {
                        "padding: 12px 16px; border-radius: 8px; background: #38a169; color: white; display: flex; gap: 12px;"
                    } else {
                        "padding: 12px 16px; border-radius: 8px; background: #e53e3e; color: white; display: flex; gap: 12px;"
                    },
                    div { style: "flex: 1;",
                        p { style: "margin: 0 0 4px 0; font-weight: 600;", {t!(toast.notification.title_key)} }
                        p { style: "margin: 0; font-size: 14px;", {t!(toast.notification.description_key)} }
                    }
                    button {
                        style: "background: none; border: none; color: white; font-size: 18px; cursor: pointer;",
                        title: t!("action-close"),
                        onclick: move |_| queue.write().dismiss(toast.id),
                        "×"
                    }
                }
            }
        }
    }
}
