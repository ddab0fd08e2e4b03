use dioxus::prelude::*;
use dioxus_i18n::t;
use gallery_core::{FieldError, ImageFile};

/// Translated inline message for a field error
pub fn field_error_message(error: &FieldError) -> String {
    match error {
        FieldError::TooLarge { max_bytes } => t!(error.message_key(), max: *max_bytes),
        FieldError::TooShort { min } => t!(error.message_key(), min: *min),
        FieldError::TooLong { max } => t!(error.message_key(), max: *max),
        _ => t!(error.message_key()),
    }
}

#[component]
pub fn TextInput(
    value: String,
    placeholder: String,
    on_input: EventHandler<String>,
    #[props(default)] error: Option<FieldError>,
) -> Element {
    let class = if error.is_some() {
        "input input-error"
    } else {
        "input"
    };

    rsx! {
        div {
            input {
                r#type: "text",
                class: "{class}",
                placeholder: "{placeholder}",
                value: "{value}",
                oninput: move |e| on_input.call(e.value()),
            }
            if let Some(err) = error {
                div { class: "field-error", "⚠️ " {field_error_message(&err)} }
            }
        }
    }
}

/// Image picker with local preview
///
/// Reads the picked file into memory and reports it; hosting is the parent's job.
#[component]
pub fn FileInput(
    #[props(default)] preview_url: Option<String>,
    #[props(default)] busy: bool,
    on_pick: EventHandler<ImageFile>,
    #[props(default)] error: Option<FieldError>,
) -> Element {
    let border = if error.is_some() { "#e53e3e" } else { "#4a4a4a" };

    rsx! {
        div {
            label {
                style: "position: relative; display: flex; align-items: center; justify-content: center; height: 180px; border: 2px dashed {border}; border-radius: 8px; overflow: hidden; cursor: pointer; color: #9ca3af;",
                if let Some(url) = preview_url {
                    img {
                        src: "{url}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                } else {
                    span { "📷 " {t!("upload-pick-image")} }
                }
                if busy {
                    div { style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(0, 0, 0, 0.6); color: white;",
                        "⏳ "
                        {t!("upload-hosting")}
                    }
                }
                input {
                    r#type: "file",
                    accept: ".gif,.jpg,.jpeg,.png",
                    style: "display: none;",
                    disabled: busy,
                    onchange: move |evt: FormEvent| async move {
                        let Some(file) = evt.files().into_iter().next() else {
                            return;
                        };
                        let name = file.name();
                        match file.read_bytes().await {
                            Ok(bytes) => on_pick.call(ImageFile::new(name, bytes.to_vec())),
                            Err(e) => log::error!("Reading picked file '{}' failed: {}", name, e),
                        }
                    },
                }
            }
            if let Some(err) = error {
                div { class: "field-error", "⚠️ " {field_error_message(&err)} }
            }
        }
    }
}
