//! Scryfall API client

use async_trait::async_trait;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod scryfall;

#[cfg(test)]
pub use mock::MockScryfallClient;
pub use models::{Card, CardImage, CardSet, ScryfallCard, SearchPage, ServiceHealth};
pub use scryfall::ScryfallClient;

/// Scryfall API client trait
#[async_trait]
pub trait ScryfallApi: Send + Sync {
    /// Look up a single card by fuzzy name.
    ///
    /// Returns `Ok(None)` when no card matches, so callers can skip an
    /// unmatched name without treating it as a failure.
    async fn named_card(&self, name: &str) -> Result<Option<ScryfallCard>>;

    /// Fetch one page of a card search. Pages are 1-based.
    ///
    /// A search matching nothing returns an empty final page rather
    /// than an error.
    async fn search_page(&self, query: &str, page: usize) -> Result<SearchPage>;

    /// Fetch the full set catalog
    async fn list_sets(&self) -> Result<Vec<CardSet>>;

    /// Download card artwork from an absolute URL
    async fn fetch_image(&self, url: &str) -> Result<CardImage>;

    /// Probe upstream availability
    async fn health(&self) -> Result<ServiceHealth>;
}
