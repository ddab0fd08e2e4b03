use crate::config::AppConfig;
use crate::error::AppError;
use dioxus::prelude::*;
use gallery_core::{
    fetch_page, Image, ImgbbHost, PaginatedQuery, QueryCache, RestImageStore, UploadFlow,
    ValidationRules, IMAGES_QUERY,
};

/// Clients shared through the component tree
#[derive(Clone)]
pub struct GalleryServices {
    pub store: RestImageStore,
    pub host: ImgbbHost,
    pub rules: ValidationRules,
}

impl GalleryServices {
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self {
            store: RestImageStore::new(config.api_config())?,
            host: ImgbbHost::new(config.image_host_config())?,
            rules: config.validation_rules(),
        })
    }

    pub fn upload_flow(&self) -> UploadFlow<RestImageStore> {
        UploadFlow::new(self.store.clone(), self.rules.clone())
    }
}

/// Requests the next gallery page unless a request is already outstanding
pub fn fetch_next_page(mut cache: Signal<QueryCache>, store: RestImageStore) {
    let Some(ticket) = cache.write().query_mut(&IMAGES_QUERY).begin_fetch() else {
        return;
    };

    spawn(async move {
        let result = fetch_page(&store, &ticket).await;
        cache.write().query_mut(&IMAGES_QUERY).resolve(&ticket, result);
    });
}

/// Marks the gallery stale; the view refetches from the first page
pub fn invalidate_gallery(mut cache: Signal<QueryCache>) {
    cache.write().invalidate(&IMAGES_QUERY);
}

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryState {
    Loading,
    Error,
    Ready,
}

/// What the gallery view renders, read out of the cache in one go
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySnapshot {
    pub state: GalleryState,
    pub images: Vec<Image>,
    pub has_more: bool,
    pub fetching_next_page: bool,
}

impl GallerySnapshot {
    pub fn from_cache(cache: &QueryCache) -> Self {
        match cache.query(&IMAGES_QUERY) {
            Some(query) => Self::from_query(query),
            None => Self::from_query(&PaginatedQuery::new()),
        }
    }

    fn from_query(query: &PaginatedQuery) -> Self {
        let state = if query.is_error() {
            GalleryState::Error
        } else if query.is_loading() {
            GalleryState::Loading
        } else {
            GalleryState::Ready
        };

        Self {
            state,
            images: query.items().cloned().collect(),
            has_more: query.has_more(),
            fetching_next_page: query.is_fetching_next_page(),
        }
    }

    /// The "load more" button is offered exactly when there is another page
    pub fn show_load_more(&self) -> bool {
        self.state == GalleryState::Ready && self.has_more
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gallery_core::{ApiError, GalleryPage};

    fn image(id: &str, ts: i64) -> Image {
        Image {
            id: id.to_string(),
            title: id.to_uppercase(),
            description: format!("{} description", id),
            url: format!("https://i.example/{}.jpg", id),
            ts,
        }
    }

    #[test]
    fn test_empty_cache_is_loading() {
        let snapshot = GallerySnapshot::from_cache(&QueryCache::new());
        assert_eq!(snapshot.state, GalleryState::Loading);
        assert!(!snapshot.show_load_more());
    }

    #[test]
    fn test_two_pages_then_no_load_more() {
        let mut cache = QueryCache::new();

        let first = cache.query_mut(&IMAGES_QUERY).begin_fetch().unwrap();
        cache.query_mut(&IMAGES_QUERY).resolve(
            &first,
            Ok(GalleryPage {
                data: vec![image("a", 1)],
                after: Some("c2".to_string()),
            }),
        );
        let snapshot = GallerySnapshot::from_cache(&cache);
        assert!(snapshot.show_load_more());

        let second = cache.query_mut(&IMAGES_QUERY).begin_fetch().unwrap();
        assert!(GallerySnapshot::from_cache(&cache).fetching_next_page);
        cache.query_mut(&IMAGES_QUERY).resolve(
            &second,
            Ok(GalleryPage {
                data: vec![image("b", 2)],
                after: None,
            }),
        );

        let snapshot = GallerySnapshot::from_cache(&cache);
        let ids: Vec<_> = snapshot.images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(snapshot.state, GalleryState::Ready);
        assert!(!snapshot.show_load_more());
    }

    #[test]
    fn test_failed_fetch_shows_error_only() {
        let mut cache = QueryCache::new();
        let ticket = cache.query_mut(&IMAGES_QUERY).begin_fetch().unwrap();
        cache
            .query_mut(&IMAGES_QUERY)
            .resolve(&ticket, Err(ApiError::Status(502)));

        let snapshot = GallerySnapshot::from_cache(&cache);
        assert_eq!(snapshot.state, GalleryState::Error);
        assert!(!snapshot.show_load_more());
    }

    #[test]
    fn test_invalidated_cache_loads_again() {
        let mut cache = QueryCache::new();
        let ticket = cache.query_mut(&IMAGES_QUERY).begin_fetch().unwrap();
        cache.query_mut(&IMAGES_QUERY).resolve(
            &ticket,
            Ok(GalleryPage {
                data: vec![image("a", 1)],
                after: None,
            }),
        );

        cache.invalidate(&IMAGES_QUERY);
        let snapshot = GallerySnapshot::from_cache(&cache);
        assert_eq!(snapshot.state, GalleryState::Loading);
        assert!(snapshot.images.is_empty());
    }
}
