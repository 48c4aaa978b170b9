//! Set display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::CardSet;

/// Set display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct SetDisplay {
    /// Set code
    #[tabled(rename = "CODE")]
    pub code: String,

    /// Set name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Release date
    #[tabled(rename = "RELEASED")]
    pub released: String,

    /// Number of cards
    #[tabled(rename = "CARDS")]
    pub cards: u32,
}

impl From<&CardSet> for SetDisplay {
    fn from(set: &CardSet) -> Self {
        Self {
            code: set.code.clone(),
            name: set.name.clone(),
            released: set
                .released_at
                .map(|date| date.to_string())
                .unwrap_or_else(|| "--".to_string()),
            cards: set.card_count,
        }
    }
}

impl From<CardSet> for SetDisplay {
    fn from(set: CardSet) -> Self {
        Self::from(&set)
    }
}
