use dioxus::prelude::*;
use gallery_core::Image;

/// Represents a single card in the grid
#[derive(Clone, PartialEq, Debug)]
pub struct GalleryItem {
    /// Stable key of the card (the image's creation timestamp)
    pub key: i64,
    pub title: String,
    pub description: String,
    /// URL of the hosted image, used for thumbnail and preview
    pub url: String,
}

impl From<&Image> for GalleryItem {
    fn from(image: &Image) -> Self {
        Self {
            key: image.ts,
            title: image.title.clone(),
            description: image.description.clone(),
            url: image.url.clone(),
        }
    }
}

/// A grid of image cards
///
/// The grid does not track which image is open; it reports the clicked
/// image's URL and the parent decides what to do with it.
///
/// # Example
/// ```rust,ignore
/// let mut selected = use_signal(|| None::<String>);
///
/// ImageGrid {
///     items: images.iter().map(GalleryItem::from).collect(),
///     on_view: move |url| selected.set(Some(url)),
/// }
/// ImagePreviewOverlay {
///     is_open: selected().is_some(),
///     url: selected(),
///     on_close: move |_| selected.set(None),
/// }
/// ```
#[component]
pub fn ImageGrid(
    /// Cards in display order
    items: Vec<GalleryItem>,
    /// Called with the image URL when a card is clicked
    on_view: EventHandler<String>,
    #[props(default = "No images yet".to_string())] empty_label: String,
) -> Element {
    if items.is_empty() {
        return rsx! {
            div {
                style: "padding: 24px; text-align: center; background: #353431; border-radius: 8px; color: #9ca3af;",
                "{empty_label}"
            }
        };
    }

    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(290px, 1fr)); gap: 40px;",
            for item in items {
                ImageCard {
                    key: "{item.key}",
                    item: item.clone(),
                    on_view,
                }
            }
        }
    }
}

/// A single card: thumbnail, title and description
#[component]
pub fn ImageCard(item: GalleryItem, on_view: EventHandler<String>) -> Element {
    let url = item.url.clone();

    rsx! {
        div {
            style: "border-radius: 8px; overflow: hidden; background: #353431; box-shadow: 0 2px 8px rgba(0, 0, 0, 0.4);",
            img {
                src: "{item.url}",
                alt: "{item.title}",
                style: "width: 100%; height: 192px; object-fit: cover; cursor: pointer;",
                onclick: move |_| on_view.call(url.clone()),
            }
            div {
                style: "padding: 20px 24px;",
                h2 {
                    style: "margin: 0 0 4px 0; font-size: 24px; color: #f3f3f3;",
                    "{item.title}"
                }
                p {
                    style: "margin: 0; font-size: 16px; color: #9ca3af;",
                    "{item.description}"
                }
            }
        }
    }
}

/// Whether the overlay has something to show
pub fn overlay_visible(is_open: bool, url: Option<&str>) -> bool {
    is_open && url.map_or(false, |u| !u.is_empty())
}

/// Full-size view of one image
///
/// Renders nothing unless `is_open` is set and a URL is present. Closing is
/// reported through `on_close`; the parent owns the open state.
#[component]
pub fn ImagePreviewOverlay(
    is_open: bool,
    url: Option<String>,
    on_close: EventHandler<()>,
    #[props(default = "Open original".to_string())] open_original_label: String,
) -> Element {
    let Some(url) = url.filter(|u| overlay_visible(is_open, Some(u.as_str()))) else {
        return rsx! {};
    };

    rsx! {
        div {
            style: "position: fixed; top: 0; left: 0; right: 0; bottom: 0; background: rgba(0, 0, 0, 0.8); z-index: 1000; display: flex; align-items: center; justify-content: center;",
            onclick: move |_| on_close.call(()),
            div {
                style: "max-width: 900px; max-height: 90vh; background: #353431; border-radius: 8px; overflow: hidden; display: flex; flex-direction: column;",
                onclick: move |e| e.stop_propagation(),
                div {
                    style: "display: flex; justify-content: flex-end; padding: 8px;",
                    button {
                        style: "width: 32px; height: 32px; background: rgba(255, 255, 255, 0.2); color: white; border-radius: 50%; font-size: 20px; cursor: pointer; border: none;",
                        onclick: move |_| on_close.call(()),
                        "×"
                    }
                }
                img {
                    src: "{url}",
                    style: "max-width: 900px; max-height: 600px; object-fit: contain;",
                }
                div {
                    style: "padding: 8px 16px; background: #353431;",
                    a {
                        href: "{url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        style: "color: #f3f3f3; font-size: 14px;",
                        "{open_original_label}"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_image() {
        let image = Image {
            id: "a".to_string(),
            title: "Sky".to_string(),
            description: "Blue".to_string(),
            url: "https://i.example/a.png".to_string(),
            ts: 1_620_000_000_000,
        };
        let item = GalleryItem::from(&image);
        assert_eq!(item.key, image.ts);
        assert_eq!(item.url, image.url);
        assert_eq!(item.title, "Sky");
    }

    #[test]
    fn test_overlay_visibility() {
        assert!(overlay_visible(true, Some("https://i.example/a.png")));
        assert!(!overlay_visible(false, Some("https://i.example/a.png")));
        assert!(!overlay_visible(true, None));
        assert!(!overlay_visible(true, Some("")));
    }
}
