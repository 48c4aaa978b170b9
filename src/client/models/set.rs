//! Set models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A Magic set as returned by the Scryfall catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardSet {
    /// Set code, e.g. "khm"
    pub code: String,

    /// Display name, e.g. "Kaldheim"
    pub name: String,

    /// Release date (absent for unreleased sets)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_at: Option<NaiveDate>,

    /// Number of cards in the set
    #[serde(default)]
    pub card_count: u32,

    /// Scryfall set category, e.g. "expansion" or "token"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_type: Option<String>,
}

/// Envelope around the `/sets` catalog response
#[derive(Debug, Clone, Deserialize)]
pub struct SetList {
    /// All known sets, newest first
    #[serde(default)]
    pub data: Vec<CardSet>,
}

/// Upstream health probe result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHealth {
    /// Reported status string
    #[serde(default)]
    pub status: String,
}

impl ServiceHealth {
    /// Whether the service reports itself available
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}
