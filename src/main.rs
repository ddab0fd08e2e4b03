use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;
use dioxus_i18n::t;

mod components;
mod config;
mod error;
mod i18n;
mod services;

use components::{HomeScreen, Toaster};
use config::AppConfig;
use error::AppError;
use gallery_core::QueryCache;
use services::{GalleryServices, ToastQueue};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    {
        // Dioxus may already have installed its own logger
        let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .try_init();
    }

    dioxus::launch(App);
}

fn init_services() -> Result<GalleryServices, AppError> {
    let config = AppConfig::load()?;
    log::info!("Gallery API at {}", config.api_base_url);
    GalleryServices::from_config(&config)
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);
    use_context_provider(|| Signal::new(QueryCache::new()));
    use_context_provider(|| Signal::new(ToastQueue::new()));

    // Clients are provided once; a broken configuration leaves only the error page
    let startup = use_hook(|| match init_services() {
        Ok(services) => {
            provide_context(services);
            Ok(())
        }
        Err(e) => {
            log::error!("Startup failed: {}", e);
            Err(e.user_message())
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        match startup {
            Ok(()) => rsx! {
                HomeScreen {}
                Toaster {}
            },
            Err(message) => rsx! {
                div { style: "padding: 16px; max-width: 600px; margin: 48px auto; background: #353431; border-radius: 8px;",
                    h2 { style: "margin: 0 0 12px 0; color: #e53e3e;", {t!("startup-error-title")} }
                    p { style: "margin: 0; font-size: 14px;", "{message}" }
                }
            },
        }
    }
}
