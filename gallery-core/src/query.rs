//! Cursor-based paginated query and the cache that owns it
//!
//! A [`PaginatedQuery`] is a small state machine. Fetching is split in two
//! halves so the async request can run without holding the cache:
//! [`PaginatedQuery::begin_fetch`] hands out a [`FetchTicket`] carrying the
//! cursor, and [`PaginatedQuery::resolve`] applies the response. Tickets issued
//! before an [`PaginatedQuery::invalidate`] are stale and their responses are
//! dropped.

use crate::error::ApiError;
use crate::models::{GalleryPage, Image};
use std::collections::HashMap;

/// Identity of a cached query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QueryKey(&'static str);

impl QueryKey {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// The image list of the gallery page
pub const IMAGES_QUERY: QueryKey = QueryKey::new("images");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryStatus {
    /// Stale after an invalidation; the next read starts over
    Idle,
    Loading,
    Success,
    Error(String),
}

/// Permission to run one page request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    cursor: Option<String>,
}

impl FetchTicket {
    /// Cursor to send; `None` for the first page
    pub fn cursor(&self) -> Option<&str> {
        self.cursor.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedQuery {
    pages: Vec<GalleryPage>,
    status: QueryStatus,
    generation: u64,
    in_flight: bool,
}

impl Default for PaginatedQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl PaginatedQuery {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            status: QueryStatus::Loading,
            generation: 0,
            in_flight: false,
        }
    }

    pub fn status(&self) -> &QueryStatus {
        &self.status
    }

    pub fn pages(&self) -> &[GalleryPage] {
        &self.pages
    }

    /// Number of invalidations so far
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All fetched images, pages concatenated in fetch order
    pub fn items(&self) -> impl Iterator<Item = &Image> + '_ {
        self.pages.iter().flat_map(|page| page.data.iter())
    }

    pub fn has_more(&self) -> bool {
        self.pages
            .last()
            .map_or(false, |page| page.next_cursor().is_some())
    }

    pub fn is_error(&self) -> bool {
        matches!(self.status, QueryStatus::Error(_))
    }

    /// True while nothing can be shown yet
    pub fn is_loading(&self) -> bool {
        self.pages.is_empty() && matches!(self.status, QueryStatus::Idle | QueryStatus::Loading)
    }

    pub fn is_fetching_next_page(&self) -> bool {
        self.in_flight && !self.pages.is_empty()
    }

    /// True when the first page still has to be requested
    pub fn needs_fetch(&self) -> bool {
        self.pages.is_empty()
            && !self.in_flight
            && matches!(self.status, QueryStatus::Idle | QueryStatus::Loading)
    }

    /// Starts the next page request, or returns `None` when one is already
    /// outstanding, the query failed, or the last page was reached.
    pub fn begin_fetch(&mut self) -> Option<FetchTicket> {
        if self.in_flight || self.is_error() {
            return None;
        }

        let cursor = match self.pages.last() {
            None => None,
            Some(page) => Some(page.next_cursor()?.to_string()),
        };

        if self.pages.is_empty() {
            self.status = QueryStatus::Loading;
        }
        self.in_flight = true;

        Some(FetchTicket {
            generation: self.generation,
            cursor,
        })
    }

    /// Applies a page response. Returns `false` if the ticket was stale and
    /// the result got dropped.
    pub fn resolve(&mut self, ticket: &FetchTicket, result: Result<GalleryPage, ApiError>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Dropping page response of generation {} (current {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.in_flight = false;
        match result {
            Ok(page) => {
                log::debug!(
                    "Page {} resolved with {} images",
                    self.pages.len() + 1,
                    page.data.len()
                );
                self.pages.push(page);
                self.status = QueryStatus::Success;
            }
            Err(e) => {
                log::warn!("Gallery page fetch failed: {}", e);
                self.status = QueryStatus::Error(e.to_string());
            }
        }
        true
    }

    /// Drops every page; the next read restarts from the first page
    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.pages.clear();
        self.in_flight = false;
        self.status = QueryStatus::Idle;
    }
}

/// In-memory cache of paginated queries, keyed by query identity
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryCache {
    queries: HashMap<QueryKey, PaginatedQuery>,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self, key: &QueryKey) -> Option<&PaginatedQuery> {
        self.queries.get(key)
    }

    /// Returns the query, creating it in its initial loading state
    pub fn query_mut(&mut self, key: &QueryKey) -> &mut PaginatedQuery {
        self.queries.entry(*key).or_default()
    }

    pub fn invalidate(&mut self, key: &QueryKey) {
        log::info!("Invalidating query '{}'", key.name());
        self.query_mut(key).invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(id: &str, ts: i64) -> Image {
        Image {
            id: id.to_string(),
            title: format!("Title {}", id),
            description: format!("Description {}", id),
            url: format!("https://i.example/{}.png", id),
            ts,
        }
    }

    fn page(ids: &[&str], after: Option<&str>) -> GalleryPage {
        GalleryPage {
            data: ids
                .iter()
                .enumerate()
                .map(|(i, id)| image(id, i as i64))
                .collect(),
            after: after.map(str::to_string),
        }
    }

    fn ids(query: &PaginatedQuery) -> Vec<String> {
        query.items().map(|img| img.id.clone()).collect()
    }

    #[test]
    fn test_initial_state() {
        let query = PaginatedQuery::new();
        assert_eq!(query.status(), &QueryStatus::Loading);
        assert!(query.pages().is_empty());
        assert!(query.is_loading());
        assert!(query.needs_fetch());
        assert!(!query.has_more());
    }

    #[test]
    fn test_first_ticket_has_no_cursor() {
        let mut query = PaginatedQuery::new();
        let ticket = query.begin_fetch().unwrap();
        assert_eq!(ticket.cursor(), None);
    }

    #[test]
    fn test_two_pages_are_concatenated() {
        let mut query = PaginatedQuery::new();

        let first = query.begin_fetch().unwrap();
        query.resolve(&first, Ok(page(&["a"], Some("c2"))));
        assert!(query.has_more());

        let second = query.begin_fetch().unwrap();
        assert_eq!(second.cursor(), Some("c2"));
        query.resolve(&second, Ok(page(&["b"], None)));

        assert_eq!(ids(&query), vec!["a", "b"]);
        assert!(!query.has_more());
        assert_eq!(query.status(), &QueryStatus::Success);
        assert!(query.begin_fetch().is_none());
    }

    #[test]
    fn test_pages_keep_order_and_duplicates() {
        let mut query = PaginatedQuery::new();
        let batches = [
            page(&["x", "y"], Some("1")),
            page(&["y"], Some("2")),
            page(&["a", "b", "c"], None),
        ];
        for batch in batches {
            let ticket = query.begin_fetch().unwrap();
            query.resolve(&ticket, Ok(batch));
        }
        assert_eq!(ids(&query), vec!["x", "y", "y", "a", "b", "c"]);
    }

    #[test]
    fn test_has_more_follows_last_page() {
        let mut query = PaginatedQuery::new();
        let ticket = query.begin_fetch().unwrap();
        query.resolve(&ticket, Ok(page(&["a"], Some(""))));
        assert!(!query.has_more());
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut query = PaginatedQuery::new();
        let ticket = query.begin_fetch().unwrap();
        assert!(query.begin_fetch().is_none());
        assert!(!query.needs_fetch());

        query.resolve(&ticket, Ok(page(&["a"], Some("c2"))));
        let next = query.begin_fetch().unwrap();
        assert!(query.is_fetching_next_page());
        query.resolve(&next, Ok(page(&["b"], None)));
        assert!(!query.is_fetching_next_page());
    }

    #[test]
    fn test_failure_stops_pagination() {
        let mut query = PaginatedQuery::new();
        let first = query.begin_fetch().unwrap();
        query.resolve(&first, Ok(page(&["a"], Some("c2"))));

        let second = query.begin_fetch().unwrap();
        query.resolve(&second, Err(ApiError::Status(500)));

        assert!(query.is_error());
        assert!(!query.is_loading());
        assert!(!query.needs_fetch());
        assert!(query.begin_fetch().is_none());
    }

    #[test]
    fn test_invalidate_restarts_from_first_page() {
        let mut query = PaginatedQuery::new();
        let ticket = query.begin_fetch().unwrap();
        query.resolve(&ticket, Ok(page(&["a"], Some("c2"))));

        query.invalidate();
        assert_eq!(query.status(), &QueryStatus::Idle);
        assert_eq!(query.generation(), 1);
        assert!(query.pages().is_empty());
        assert!(query.needs_fetch());

        let ticket = query.begin_fetch().unwrap();
        assert_eq!(ticket.cursor(), None);
        assert_eq!(query.status(), &QueryStatus::Loading);
    }

    #[test]
    fn test_invalidate_recovers_from_error() {
        let mut query = PaginatedQuery::new();
        let ticket = query.begin_fetch().unwrap();
        query.resolve(&ticket, Err(ApiError::Network("offline".to_string())));

        query.invalidate();
        assert!(query.begin_fetch().is_some());
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut query = PaginatedQuery::new();
        let stale = query.begin_fetch().unwrap();
        query.invalidate();

        assert!(!query.resolve(&stale, Ok(page(&["old"], None))));
        assert!(query.pages().is_empty());
        assert!(query.needs_fetch());
    }

    #[test]
    fn test_cache_creates_and_invalidates_by_key() {
        let mut cache = QueryCache::new();
        assert!(cache.query(&IMAGES_QUERY).is_none());

        let ticket = cache.query_mut(&IMAGES_QUERY).begin_fetch().unwrap();
        cache
            .query_mut(&IMAGES_QUERY)
            .resolve(&ticket, Ok(page(&["a"], None)));

        let other = QueryKey::new("other");
        cache.query_mut(&other);

        cache.invalidate(&IMAGES_QUERY);
        assert_eq!(cache.query(&IMAGES_QUERY).unwrap().generation(), 1);
        assert_eq!(cache.query(&other).unwrap().generation(), 0);
    }
}
