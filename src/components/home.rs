use crate::components::{ErrorView, Header, Loading, UploadModal};
use crate::services::{self, GallerySnapshot, GalleryServices, GalleryState};
use dioxus::prelude::*;
use dioxus_gallery::{GalleryItem, ImageGrid, ImagePreviewOverlay};
use dioxus_i18n::t;
use gallery_core::{QueryCache, IMAGES_QUERY};

/// The gallery page: image grid, "load more", preview overlay and upload dialog
#[component]
pub fn HomeScreen() -> Element {
    let gallery = use_context::<GalleryServices>();
    let cache = use_context::<Signal<QueryCache>>();
    let mut selected_url = use_signal(|| None::<String>);
    let mut upload_open = use_signal(|| false);

    // Runs on mount and again after every invalidation
    let store = gallery.store.clone();
    use_effect(move || {
        let needs_fetch = cache
            .read()
            .query(&IMAGES_QUERY)
            .map_or(true, |query| query.needs_fetch());
        if needs_fetch {
            services::fetch_next_page(cache, store.clone());
        }
    });

    let snapshot = GallerySnapshot::from_cache(&cache.read());

    match snapshot.state {
        GalleryState::Loading => return rsx! { Loading {} },
        GalleryState::Error => {
            return rsx! {
                ErrorView { on_retry: move |_| services::invalidate_gallery(cache) }
            }
        }
        GalleryState::Ready => {}
    }

    let items: Vec<GalleryItem> = snapshot.images.iter().map(GalleryItem::from).collect();
    let load_more_store = gallery.store.clone();

    rsx! {
        Header { on_add_image: move |_| upload_open.set(true) }

        div { style: "max-width: 1120px; margin: 80px auto; padding: 0 80px;",
            ImageGrid {
                items,
                on_view: move |url| selected_url.set(Some(url)),
                empty_label: t!("gallery-empty"),
            }
            if snapshot.show_load_more() {
                button {
                    class: "btn-primary",
                    style: "margin: 32px 0;",
                    disabled: snapshot.fetching_next_page,
                    onclick: move |_| services::fetch_next_page(cache, load_more_store.clone()),
                    if snapshot.fetching_next_page {
                        "⏳ "
                        {t!("action-loading")}
                    } else {
                        {t!("action-load-more")}
                    }
                }
            }
        }

        ImagePreviewOverlay {
            is_open: selected_url().is_some(),
            url: selected_url(),
            on_close: move |_| selected_url.set(None),
            open_original_label: t!("preview-open-original"),
        }

        if upload_open() {
            UploadModal { on_close: move |_| upload_open.set(false) }
        }
    }
}
