//! Scryfall API client implementation

use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use reqwest::header::{ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client as HttpClient, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use super::ScryfallApi;
use super::models::{CardImage, CardSet, ScryfallCard, SearchPage, ServiceHealth, SetList};
use crate::error::{ApiError, Error, Result};

/// Scryfall API base URL
pub const API_BASE_URL: &str = "https://api.scryfall.com";

/// Scryfall asks API consumers to identify themselves
const CLIENT_USER_AGENT: &str = concat!("deckhand/", env!("CARGO_PKG_VERSION"));

/// MIME type assumed when an image response carries no Content-Type
const DEFAULT_IMAGE_CONTENT_TYPE: &str = "image/jpeg";

/// Scryfall API client
#[derive(Debug)]
pub struct ScryfallClient {
    http: HttpClient,
    base_url: String,
    rate_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ScryfallClient {
    /// Create a new Scryfall API client.
    ///
    /// `request_delay` is the minimum spacing between consecutive
    /// upstream requests. The first request goes out immediately.
    pub fn new(base_url: impl Into<String>, request_delay: Duration) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // One cell per delay window, burst of one: every call after the
        // first waits out the remainder of the window.
        let quota = Quota::with_period(request_delay.max(Duration::from_millis(1)))
            .unwrap_or_else(|| Quota::per_second(NonZeroU32::MIN));
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        Ok(Self {
            http,
            base_url: base_url.into(),
            rate_limiter,
        })
    }

    /// Make a rate-limited GET request and decode the JSON response
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        self.rate_limiter.until_ready().await;

        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .get(&url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header(ACCEPT, "application/json");
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        match status {
            StatusCode::OK => {
                let data = response.json::<T>().await.map_err(|e| {
                    ApiError::Malformed(format!("failed to decode response: {e}"))
                })?;
                Ok(data)
            }
            StatusCode::NOT_FOUND => {
                let detail = error_detail(response, "resource not found").await;
                Err(ApiError::NotFound(detail).into())
            }
            StatusCode::TOO_MANY_REQUESTS => {
                let retry_after = response
                    .headers()
                    .get("retry-after")
                    .and_then(|v| v.to_str().ok())
                    .and_then(|v| v.parse::<u64>().ok())
                    .unwrap_or(60);
                Err(ApiError::RateLimited(Duration::from_secs(retry_after)).into())
            }
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                let detail = error_detail(response, "bad request").await;
                Err(ApiError::BadRequest(detail).into())
            }
            status if status.is_server_error() => Err(ApiError::Unavailable {
                status: status.as_u16(),
            }
            .into()),
            _ => Err(ApiError::Malformed(format!("unexpected status code: {status}")).into()),
        }
    }
}

/// Extract the `details` field from a Scryfall error body, falling back
/// to the raw body text
async fn error_detail(response: reqwest::Response, fallback: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        #[serde(default)]
        details: String,
    }

    let body = response.text().await.unwrap_or_default();
    if let Ok(parsed) = serde_json::from_str::<ErrorBody>(&body) {
        if !parsed.details.is_empty() {
            return parsed.details;
        }
    }
    if body.is_empty() {
        fallback.to_string()
    } else {
        body
    }
}

#[async_trait]
impl ScryfallApi for ScryfallClient {
    async fn named_card(&self, name: &str) -> Result<Option<ScryfallCard>> {
        match self
            .get_json::<ScryfallCard>("/cards/named", &[("fuzzy", name)])
            .await
        {
            Ok(card) => Ok(Some(card)),
            Err(Error::Api(ApiError::NotFound(_))) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn search_page(&self, query: &str, page: usize) -> Result<SearchPage> {
        let page = page.to_string();
        match self
            .get_json::<SearchPage>("/cards/search", &[("q", query), ("page", page.as_str())])
            .await
        {
            Ok(page) => Ok(page),
            // Scryfall reports an empty result set as a 404
            Err(Error::Api(ApiError::NotFound(_))) => Ok(SearchPage::empty()),
            Err(err) => Err(err),
        }
    }

    async fn list_sets(&self) -> Result<Vec<CardSet>> {
        let catalog: SetList = self.get_json("/sets", &[]).await?;
        Ok(catalog.data)
    }

    async fn fetch_image(&self, url: &str) -> Result<CardImage> {
        self.rate_limiter.until_ready().await;

        let response = self
            .http
            .get(url)
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(format!("no image at {url}")).into());
        }
        if status.is_server_error() {
            return Err(ApiError::Unavailable {
                status: status.as_u16(),
            }
            .into());
        }
        if !status.is_success() {
            return Err(ApiError::Malformed(format!("unexpected status code: {status}")).into());
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or(DEFAULT_IMAGE_CONTENT_TYPE)
            .to_string();
        let data = response.bytes().await.map_err(ApiError::from)?.to_vec();

        Ok(CardImage { content_type, data })
    }

    async fn health(&self) -> Result<ServiceHealth> {
        self.get_json("/health", &[]).await
    }
}
