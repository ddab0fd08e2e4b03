use crate::components::{FileInput, TextInput};
use crate::services::{self, GalleryServices, ToastQueue};
use dioxus::prelude::*;
use dioxus_i18n::t;
use gallery_core::{FieldErrors, ImageFile, QueryCache, UploadDraft};

/// Modal wrapper around the upload form
#[component]
pub fn UploadModal(on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.8); z-index: 1000; display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_close.call(()),
            div {
                style: "width: 100%; max-width: 480px; background: #353431; border-radius: 8px; padding: 24px;",
                onclick: move |e| e.stop_propagation(),
                div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;",
                    h2 { style: "margin: 0; font-size: 24px;", {t!("upload-dialog-title")} }
                    button {
                        style: "width: 32px; height: 32px; background: rgba(255, 255, 255, 0.2); color: white; border-radius: 50%; font-size: 20px; cursor: pointer; border: none;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                FormAddImage { close_modal: on_close }
            }
        }
    }
}

#[component]
pub fn FormAddImage(close_modal: EventHandler<()>) -> Element {
    let gallery = use_context::<GalleryServices>();
    let cache = use_context::<Signal<QueryCache>>();
    let toasts = use_context::<Signal<ToastQueue>>();

    let mut draft = use_signal(UploadDraft::new);
    let mut errors = use_signal(FieldErrors::default);
    let mut local_preview = use_signal(|| None::<String>);
    let mut hosting = use_signal(|| false);
    let mut submitting = use_signal(|| false);

    let attach_gallery = gallery.clone();
    let handle_pick = move |file: ImageFile| {
        let gallery = attach_gallery.clone();
        local_preview.set(Some(file.preview_data_url()));
        draft.write().set_file(file.clone());
        errors.write().image = None;
        hosting.set(true);

        spawn(async move {
            let result = gallery.upload_flow().attach_file(&gallery.host, &file).await;

            // The user may have picked another file meanwhile
            if draft.read().file.as_ref() == Some(&file) {
                match result {
                    Ok(url) => draft.write().hosted_url = Some(url),
                    Err(e) => errors.write().image = Some(e),
                }
            }
            hosting.set(false);
        });
    };

    let handle_submit = move |_| {
        let flow = gallery.upload_flow();
        let current = draft();
        submitting.set(true);

        spawn(async move {
            let outcome = flow
                .submit(
                    current,
                    move || services::invalidate_gallery(cache),
                    move || {
                        draft.set(UploadDraft::new());
                        errors.set(FieldErrors::default());
                        local_preview.set(None);
                        close_modal.call(());
                    },
                )
                .await;
            submitting.set(false);

            match outcome {
                Ok(notification) => services::notify(toasts, notification),
                Err(field_errors) => errors.set(field_errors),
            }
        });
    };

    rsx! {
        div { style: "display: flex; flex-direction: column; gap: 16px;",
            FileInput {
                preview_url: local_preview(),
                busy: hosting(),
                on_pick: handle_pick,
                error: errors.read().image.clone(),
            }
            TextInput {
                value: draft.read().title.clone(),
                placeholder: t!("upload-title-placeholder"),
                on_input: move |v| draft.write().title = v,
                error: errors.read().title.clone(),
            }
            TextInput {
                value: draft.read().description.clone(),
                placeholder: t!("upload-description-placeholder"),
                on_input: move |v| draft.write().description = v,
                error: errors.read().description.clone(),
            }
            button {
                class: "btn-primary",
                style: "width: 100%; margin-top: 8px; padding: 16px;",
                disabled: submitting() || hosting(),
                onclick: handle_submit,
                if submitting() {
                    "⏳ "
                    {t!("action-loading")}
                } else {
                    {t!("action-send")}
                }
            }
        }
    }
}
