//! Mock Scryfall client for testing
//!
//! Provides a mock implementation of [`ScryfallApi`] for unit testing
//! without making real API calls.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::ScryfallApi;
use super::models::{CardImage, CardSet, ScryfallCard, SearchPage, ServiceHealth};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Configure expected responses via builder methods, then use in tests.
///
/// # Example
/// ```ignore
/// let mock = MockScryfallClient::new()
///     .with_named_card("lightning bolt", bolt()).await;
///
/// let card = mock.named_card("lightning bolt").await?;
/// assert!(card.is_some());
/// ```
pub struct MockScryfallClient {
    /// Cards keyed by lowercased lookup name
    named: Arc<Mutex<HashMap<String, ScryfallCard>>>,
    /// Search pages keyed by query; index 0 is page 1
    search_pages: Arc<Mutex<HashMap<String, Vec<SearchPage>>>>,
    /// Sets to return from list_sets
    sets: Arc<Mutex<Vec<CardSet>>>,
    /// Images keyed by URL
    images: Arc<Mutex<HashMap<String, CardImage>>>,
    /// Health status string to report
    health_status: Arc<Mutex<String>>,
    /// Error to return (if any), consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
    /// Captured (query, page) pairs from search_page
    captured_searches: Arc<Mutex<Vec<(String, usize)>>>,
}

impl Default for MockScryfallClient {
    fn default() -> Self {
        Self {
            named: Arc::new(Mutex::new(HashMap::new())),
            search_pages: Arc::new(Mutex::new(HashMap::new())),
            sets: Arc::new(Mutex::new(Vec::new())),
            images: Arc::new(Mutex::new(HashMap::new())),
            health_status: Arc::new(Mutex::new("healthy".to_string())),
            error: Arc::new(Mutex::new(None)),
            call_count: Arc::new(Mutex::new(CallCounts::default())),
            captured_searches: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub named_card: usize,
    pub search_page: usize,
    pub list_sets: usize,
    pub fetch_image: usize,
    pub health: usize,
}

impl CallCounts {
    /// Get total number of API calls made.
    pub fn total(&self) -> usize {
        self.named_card + self.search_page + self.list_sets + self.fetch_image + self.health
    }
}

impl MockScryfallClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure a card to return for a fuzzy name lookup.
    pub async fn with_named_card(self, lookup: &str, card: ScryfallCard) -> Self {
        self.named
            .lock()
            .await
            .insert(lookup.trim().to_lowercase(), card);
        self
    }

    /// Configure search pages for a query. `pages[0]` answers page 1.
    ///
    /// Requests past the configured pages repeat the last one, which
    /// models a server that keeps claiming `has_more`.
    pub async fn with_search_pages(self, query: &str, pages: Vec<SearchPage>) -> Self {
        self.search_pages
            .lock()
            .await
            .insert(query.to_string(), pages);
        self
    }

    /// Configure sets to return from list_sets.
    pub async fn with_sets(self, sets: Vec<CardSet>) -> Self {
        *self.sets.lock().await = sets;
        self
    }

    /// Configure an image to return for a URL.
    pub async fn with_image(self, url: &str, image: CardImage) -> Self {
        self.images.lock().await.insert(url.to_string(), image);
        self
    }

    /// Configure the health status string to report.
    pub async fn with_health_status(self, status: &str) -> Self {
        *self.health_status.lock().await = status.to_string();
        self
    }

    /// Configure an error to return on the next API call.
    /// The error is consumed after one use.
    pub async fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().await = Some(error);
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Get captured (query, page) pairs from search_page calls.
    pub async fn captured_searches(&self) -> Vec<(String, usize)> {
        self.captured_searches.lock().await.clone()
    }

    /// Check if there's a pending error and consume it.
    async fn check_error(&self) -> Result<()> {
        let mut error = self.error.lock().await;
        if let Some(e) = error.take() {
            return Err(e.into());
        }
        Ok(())
    }
}

#[async_trait]
impl ScryfallApi for MockScryfallClient {
    async fn named_card(&self, name: &str) -> Result<Option<ScryfallCard>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.named_card += 1;
        drop(counts);

        let named = self.named.lock().await;
        Ok(named.get(&name.trim().to_lowercase()).cloned())
    }

    async fn search_page(&self, query: &str, page: usize) -> Result<SearchPage> {
        self.captured_searches
            .lock()
            .await
            .push((query.to_string(), page));
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.search_page += 1;
        drop(counts);

        let pages = self.search_pages.lock().await;
        let Some(configured) = pages.get(query) else {
            return Ok(SearchPage::empty());
        };
        if configured.is_empty() {
            return Ok(SearchPage::empty());
        }
        let index = (page.saturating_sub(1)).min(configured.len() - 1);
        Ok(configured[index].clone())
    }

    async fn list_sets(&self) -> Result<Vec<CardSet>> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.list_sets += 1;
        drop(counts);

        Ok(self.sets.lock().await.clone())
    }

    async fn fetch_image(&self, url: &str) -> Result<CardImage> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.fetch_image += 1;
        drop(counts);

        let images = self.images.lock().await;
        images
            .get(url)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("no image at {url}")).into())
    }

    async fn health(&self) -> Result<ServiceHealth> {
        self.check_error().await?;

        let mut counts = self.call_count.lock().await;
        counts.health += 1;
        drop(counts);

        Ok(ServiceHealth {
            status: self.health_status.lock().await.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_card(id: &str, name: &str) -> ScryfallCard {
        ScryfallCard {
            id: id.to_string(),
            name: name.to_string(),
            mana_cost: None,
            type_line: None,
            rarity: None,
            collector_number: None,
            cmc: None,
            image_uris: None,
            card_faces: Vec::new(),
        }
    }

    #[tokio::test]
    async fn test_mock_default_empty() {
        let mock = MockScryfallClient::new();

        assert!(mock.named_card("anything").await.unwrap().is_none());
        assert!(mock.list_sets().await.unwrap().is_empty());
        assert!(mock.search_page("set:khm", 1).await.unwrap().data.is_empty());
    }

    #[tokio::test]
    async fn test_mock_named_card_normalizes_lookup() {
        let mock = MockScryfallClient::new()
            .with_named_card("lightning bolt", bare_card("bolt-1", "Lightning Bolt"))
            .await;

        let card = mock.named_card("  Lightning BOLT ").await.unwrap();
        assert_eq!(card.unwrap().name, "Lightning Bolt");
    }

    #[tokio::test]
    async fn test_mock_error_consumed_once() {
        let mock = MockScryfallClient::new()
            .with_error(ApiError::Unavailable { status: 503 })
            .await;

        assert!(mock.list_sets().await.is_err());
        assert!(mock.list_sets().await.is_ok());
    }

    #[tokio::test]
    async fn test_mock_call_counts() {
        let mock = MockScryfallClient::new();

        mock.named_card("a").await.unwrap();
        mock.named_card("b").await.unwrap();
        mock.list_sets().await.unwrap();

        let counts = mock.call_counts().await;
        assert_eq!(counts.named_card, 2);
        assert_eq!(counts.list_sets, 1);
        assert_eq!(counts.total(), 3);
    }

    #[tokio::test]
    async fn test_mock_search_repeats_last_page() {
        let endless = SearchPage {
            data: vec![bare_card("a", "Island")],
            has_more: true,
            total_cards: None,
        };
        let mock = MockScryfallClient::new()
            .with_search_pages("t:land", vec![endless])
            .await;

        let page5 = mock.search_page("t:land", 5).await.unwrap();
        assert!(page5.has_more);
        assert_eq!(page5.data.len(), 1);

        let captured = mock.captured_searches().await;
        assert_eq!(captured, vec![("t:land".to_string(), 5)]);
    }
}
