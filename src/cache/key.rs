//! Cache key construction
//!
//! Keys are readable prefixed strings rather than hashes so that
//! `cache stats` output and debug logs stay meaningful. Parameters are
//! trimmed and lowercased, making the key a deterministic function of the
//! query regardless of how the caller spelled it.

/// Fixed key for the full set catalog
pub const ALL_SETS: &str = "all_sets";

/// Fixed key for the derived popular-sets view
pub const POPULAR_SETS: &str = "popular_sets";

/// Key for a single fuzzy card lookup
pub fn card(name: &str) -> String {
    format!("card:{}", normalize(name))
}

/// Key for a card's cached artwork, by Scryfall card id
pub fn card_image(card_id: &str) -> String {
    format!("card_image:{card_id}")
}

/// Key for the card names of one set
pub fn set_cards(code: &str) -> String {
    format!("set_cards:{}", normalize(code))
}

/// Key for a free-text search query
pub fn search(query: &str) -> String {
    format!("search:{}", normalize(query))
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}
