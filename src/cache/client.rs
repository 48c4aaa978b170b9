//! Cached wrapper for the Scryfall client
//!
//! Every cacheable operation follows the same shape: derive a key, try
//! the store, and on a miss fetch upstream, normalize, and store the
//! result under the TTL configured for that entity type. The cache can
//! be disabled entirely (for `--no-cache`), in which case every call
//! goes upstream.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;
use base64::engine::general_purpose;
use chrono::Utc;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::cache::key;
use crate::cache::store::{CacheStats, ClearStats, ResponseCache};
use crate::client::ScryfallApi;
use crate::client::models::{Card, CardImage, CardSet, ServiceHealth};
use crate::config::CacheSettings;
use crate::error::{ApiError, Error, Result};

/// Hard cap on pages fetched per search, in case upstream pagination
/// metadata never reports an end
pub const MAX_SEARCH_PAGES: usize = 20;

/// Sets released further back than this are not "recent"
const POPULAR_WINDOW_DAYS: i64 = 730;

/// Minimum card count for a set to qualify as popular
const POPULAR_MIN_CARDS: u32 = 100;

/// Number of sets the popular view keeps
const POPULAR_LIMIT: usize = 12;

/// Cached wrapper for any ScryfallApi implementation.
///
/// Holds the process-wide response store. Construct once and share;
/// the store starts empty and needs no teardown.
#[derive(Debug)]
pub struct CachedScryfallClient<C: ScryfallApi> {
    inner: Arc<C>,
    cache: Option<ResponseCache>,
    settings: CacheSettings,
}

/// Cache representation of downloaded artwork
#[derive(Serialize, Deserialize)]
struct StoredImage {
    content_type: String,
    /// Image bytes, base64-encoded
    data: String,
}

impl StoredImage {
    fn encode(image: &CardImage) -> Self {
        Self {
            content_type: image.content_type.clone(),
            data: general_purpose::STANDARD.encode(&image.data),
        }
    }

    fn decode(&self) -> Option<CardImage> {
        let data = general_purpose::STANDARD.decode(&self.data).ok()?;
        Some(CardImage {
            content_type: self.content_type.clone(),
            data,
        })
    }
}

impl<C: ScryfallApi> CachedScryfallClient<C> {
    /// Create a new cached client wrapper.
    ///
    /// # Arguments
    /// * `inner` - The underlying API client to wrap
    /// * `settings` - TTLs and store capacity
    /// * `enabled` - Whether caching is enabled (false for --no-cache)
    pub fn new(inner: C, settings: CacheSettings, enabled: bool) -> Self {
        let cache = enabled.then(|| ResponseCache::new(settings.max_entries));
        Self {
            inner: Arc::new(inner),
            cache,
            settings,
        }
    }

    /// Whether responses are being cached
    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Snapshot of the store, or None when caching is disabled
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ResponseCache::stats)
    }

    /// Wipe the store, or None when caching is disabled
    #[allow(dead_code)]
    pub fn clear_cache(&self) -> Option<ClearStats> {
        self.cache.as_ref().map(ResponseCache::clear_all)
    }

    /// Try to get cached data
    fn get_cached<T: DeserializeOwned>(&self, cache_key: &str) -> Option<T> {
        let cache = self.cache.as_ref()?;
        cache
            .get(cache_key)
            .and_then(|data| serde_json::from_slice(&data).ok())
    }

    /// Store data in cache
    fn set_cached<T: Serialize>(&self, cache_key: &str, data: &T, ttl: Duration) {
        if let Some(ref cache) = self.cache
            && let Ok(json) = serde_json::to_vec(data)
        {
            cache.put(cache_key, json, ttl);
        }
    }

    /// Fetch one card by fuzzy name.
    ///
    /// `Ok(None)` means no match; upstream failures propagate so the
    /// caller can tell "card not found" from "Scryfall is down". An
    /// unparseable response is logged and treated as no match.
    pub async fn card_named(&self, name: &str) -> Result<Option<Card>> {
        let cache_key = key::card(name);
        if let Some(cached) = self.get_cached(&cache_key) {
            log::debug!("Cache hit: {cache_key}");
            return Ok(Some(cached));
        }

        let raw = match self.inner.named_card(name).await {
            Ok(raw) => raw,
            Err(Error::Api(ApiError::Malformed(detail))) => {
                log::warn!("Unexpected card shape for {name:?}: {detail}");
                return Ok(None);
            }
            Err(err) => return Err(err),
        };
        let Some(raw) = raw else {
            return Ok(None);
        };

        let card = Card::from(raw);
        self.set_cached(&cache_key, &card, self.settings.card_ttl());
        Ok(Some(card))
    }

    /// Resolve a list of names sequentially, skipping names with no match.
    ///
    /// Request spacing comes from the underlying client's rate limit.
    pub async fn resolve_cards(&self, names: &[String]) -> Result<Vec<Card>> {
        let mut cards = Vec::new();
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            match self.card_named(name).await? {
                Some(card) => cards.push(card),
                None => log::warn!("No card found for {name:?}"),
            }
        }
        Ok(cards)
    }

    /// Fetch all card names in a set, deduplicated in first-seen order
    pub async fn set_card_names(&self, code: &str) -> Result<Vec<String>> {
        let cache_key = key::set_cards(code);
        if let Some(cached) = self.get_cached(&cache_key) {
            log::debug!("Cache hit: {cache_key}");
            return Ok(cached);
        }

        let query = format!("set:{}", code.trim().to_lowercase());
        let names = self.collect_names(&query).await?;
        self.set_cached(&cache_key, &names, self.settings.set_cards_ttl());
        Ok(names)
    }

    /// Search cards by a Scryfall query string, returning deduplicated
    /// names. Caching is optional here (`cache.cache_searches`) since
    /// the query space is unbounded.
    pub async fn search_card_names(&self, query: &str) -> Result<Vec<String>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let cache_key = key::search(query);
        if self.settings.cache_searches {
            if let Some(cached) = self.get_cached(&cache_key) {
                log::debug!("Cache hit: {cache_key}");
                return Ok(cached);
            }
        }

        let names = self.collect_names(query).await?;
        if self.settings.cache_searches {
            self.set_cached(&cache_key, &names, self.settings.search_ttl());
        }
        Ok(names)
    }

    /// Walk search pages sequentially, collecting names in first-seen
    /// order. Stops when upstream reports no more pages, when a page
    /// comes back empty, or at [`MAX_SEARCH_PAGES`].
    async fn collect_names(&self, query: &str) -> Result<Vec<String>> {
        let mut seen = HashSet::new();
        let mut names = Vec::new();
        let mut page = 1;
        loop {
            let result = self.inner.search_page(query, page).await?;
            if result.data.is_empty() {
                break;
            }
            for card in result.data {
                if seen.insert(card.name.clone()) {
                    names.push(card.name);
                }
            }
            if !result.has_more {
                break;
            }
            page += 1;
            if page > MAX_SEARCH_PAGES {
                log::warn!("Stopping search {query:?} after {MAX_SEARCH_PAGES} pages");
                break;
            }
        }
        Ok(names)
    }

    /// Fetch the full set catalog
    pub async fn all_sets(&self) -> Result<Vec<CardSet>> {
        let cache_key = key::ALL_SETS;
        if let Some(cached) = self.get_cached(cache_key) {
            log::debug!("Cache hit: {cache_key}");
            return Ok(cached);
        }

        let sets = self.inner.list_sets().await?;
        self.set_cached(cache_key, &sets, self.settings.set_catalog_ttl());
        Ok(sets)
    }

    /// Recent, reasonably sized, non-ancillary sets, newest first.
    ///
    /// Derived from [`all_sets`](Self::all_sets) but cached under its
    /// own key so the filter and sort are not recomputed per call.
    pub async fn popular_sets(&self) -> Result<Vec<CardSet>> {
        let cache_key = key::POPULAR_SETS;
        if let Some(cached) = self.get_cached(cache_key) {
            log::debug!("Cache hit: {cache_key}");
            return Ok(cached);
        }

        let all = self.all_sets().await?;
        let today = Utc::now().date_naive();
        let cutoff = today - chrono::Duration::days(POPULAR_WINDOW_DAYS);
        let mut recent: Vec<CardSet> = all
            .into_iter()
            .filter(|set| {
                set.released_at
                    .map(|released| released >= cutoff && released <= today)
                    .unwrap_or(false)
            })
            .filter(|set| set.card_count >= POPULAR_MIN_CARDS)
            .filter(|set| !is_ancillary(set))
            .collect();
        recent.sort_by(|a, b| b.released_at.cmp(&a.released_at));
        recent.truncate(POPULAR_LIMIT);

        self.set_cached(cache_key, &recent, self.settings.popular_ttl());
        Ok(recent)
    }

    /// Download the artwork for a card, or `Ok(None)` when the card has
    /// no image to fetch
    pub async fn card_image(&self, card: &Card) -> Result<Option<CardImage>> {
        let Some(url) = card.image_url.as_deref() else {
            return Ok(None);
        };

        let cache_key = key::card_image(&card.id);
        if let Some(stored) = self.get_cached::<StoredImage>(&cache_key) {
            log::debug!("Cache hit: {cache_key}");
            if let Some(image) = stored.decode() {
                return Ok(Some(image));
            }
            // Undecodable entry; fall through and refetch
        }

        let image = self.inner.fetch_image(url).await?;
        self.set_cached(
            &cache_key,
            &StoredImage::encode(&image),
            self.settings.image_ttl(),
        );
        Ok(Some(image))
    }

    /// Probe upstream availability. Never cached; a health check that
    /// answers from cache would defeat its purpose.
    pub async fn health(&self) -> Result<ServiceHealth> {
        self.inner.health().await
    }
}

/// Promotional, token, and similar non-constructed set categories,
/// matched by code or name pattern
fn is_ancillary(set: &CardSet) -> bool {
    let code = set.code.to_lowercase();
    if code == "prm" {
        return true;
    }
    // Scryfall prefixes promo and token set codes onto the parent code
    if code.len() > 3 && (code.starts_with('p') || code.starts_with('t')) {
        return true;
    }

    const EXCLUDED_NAMES: [&str; 6] = [
        "promo",
        "token",
        "art series",
        "minigame",
        "substitute",
        "alchemy",
    ];
    let name = set.name.to_lowercase();
    EXCLUDED_NAMES.iter().any(|pattern| name.contains(pattern))
}
