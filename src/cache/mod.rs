//! Response caching
//!
//! The [`store`] module holds the bounded in-memory TTL map, [`key`]
//! builds the readable keys it is indexed by, and [`client`] wraps a
//! Scryfall client with cache-aside reads for every cacheable call.

pub mod client;
pub mod key;
pub mod store;

pub use client::CachedScryfallClient;
pub use store::{CacheStats, ClearStats, ResponseCache};
