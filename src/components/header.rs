use dioxus::prelude::*;
use dioxus_i18n::t;

#[component]
pub fn Header(on_add_image: EventHandler<()>) -> Element {
    rsx! {
        div { style: "background: #353431; padding: 24px 0;",
            div { style: "max-width: 1120px; margin: 0 auto; padding: 0 80px; display: flex; align-items: center; justify-content: space-between;",
                h1 { style: "margin: 0; font-size: 32px; font-weight: 700; color: #dd6b20;",
                    {t!("app-title")}
                }
                button {
                    class: "btn-primary",
                    onclick: move |_| on_add_image.call(()),
                    {t!("action-add-image")}
                }
            }
        }
    }
}
