//! Card display models

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::Card;

/// Card display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CardDisplay {
    /// Card name
    #[tabled(rename = "NAME")]
    pub name: String,

    /// Mana cost in symbol notation
    #[tabled(rename = "COST")]
    pub cost: String,

    /// Type line
    #[tabled(rename = "TYPE")]
    pub type_line: String,

    /// Printing rarity
    #[tabled(rename = "RARITY")]
    pub rarity: String,

    /// Collector number
    #[tabled(rename = "NUMBER")]
    pub number: String,
}

impl From<&Card> for CardDisplay {
    fn from(card: &Card) -> Self {
        Self {
            name: card.name.clone(),
            cost: card.mana_cost.clone().unwrap_or_else(|| "--".to_string()),
            type_line: card.type_line.clone().unwrap_or_else(|| "--".to_string()),
            rarity: card.rarity.clone().unwrap_or_else(|| "--".to_string()),
            number: card.set_number.clone().unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl From<Card> for CardDisplay {
    fn from(card: Card) -> Self {
        Self::from(&card)
    }
}

/// Single-column display row for plain card name listings.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct NameDisplay {
    /// Card name
    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<&str> for NameDisplay {
    fn from(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl From<String> for NameDisplay {
    fn from(name: String) -> Self {
        Self { name }
    }
}
