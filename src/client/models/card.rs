//! Card models
//!
//! [`ScryfallCard`] mirrors the upstream JSON shape (snake_case, faces and
//! image URIs optional). [`Card`] is the normalized record the rest of the
//! crate works with; its serialized form uses camelCase field names.

use serde::{Deserialize, Serialize};

/// Normalized card record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Scryfall card ID
    pub id: String,

    /// Display name
    pub name: String,

    /// Best available artwork URL, absent when no face carries an image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Mana cost in symbol notation, e.g. `{1}{R}`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,

    /// Type line, e.g. "Instant"
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,

    /// Printing rarity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    /// Collector number within the printing's set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_number: Option<String>,

    /// Numeric converted mana cost
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mana_value: Option<f64>,
}

/// Raw card as returned by the Scryfall API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScryfallCard {
    /// Card ID
    pub id: String,

    /// Card name
    pub name: String,

    /// Mana cost (absent on some layouts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,

    /// Type line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,

    /// Rarity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,

    /// Collector number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collector_number: Option<String>,

    /// Converted mana cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cmc: Option<f64>,

    /// Images for single-faced cards
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageUris>,

    /// Faces of multi-faced cards; these carry the images instead
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub card_faces: Vec<CardFace>,
}

/// One face of a multi-faced card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardFace {
    /// Face name
    #[serde(default)]
    pub name: String,

    /// Face mana cost
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,

    /// Face images
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_uris: Option<ImageUris>,
}

/// Image URLs at the sizes Scryfall hosts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageUris {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub small: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub normal: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub large: Option<String>,
}

/// One page of a paginated card search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPage {
    /// Cards on this page
    #[serde(default)]
    pub data: Vec<ScryfallCard>,

    /// Whether another page follows
    #[serde(default)]
    pub has_more: bool,

    /// Total matches across all pages, when the API reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cards: Option<u32>,
}

impl SearchPage {
    /// An empty final page
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            has_more: false,
            total_cards: Some(0),
        }
    }
}

/// Downloaded card artwork
#[derive(Debug, Clone, PartialEq)]
pub struct CardImage {
    /// MIME type reported by the image host
    pub content_type: String,

    /// Raw image bytes
    pub data: Vec<u8>,
}

impl ScryfallCard {
    /// Best available image URL.
    ///
    /// Single-faced cards carry `image_uris` at the top level; multi-faced
    /// layouts move them onto each face, in which case the front face wins.
    pub fn resolve_image_url(&self) -> Option<String> {
        if let Some(normal) = self.image_uris.as_ref().and_then(|uris| uris.normal.as_ref()) {
            return Some(normal.clone());
        }
        self.card_faces
            .first()
            .and_then(|face| face.image_uris.as_ref())
            .and_then(|uris| uris.normal.clone())
    }
}

impl From<ScryfallCard> for Card {
    fn from(raw: ScryfallCard) -> Self {
        let image_url = raw.resolve_image_url();
        Self {
            id: raw.id,
            name: raw.name,
            image_url,
            mana_cost: raw.mana_cost,
            type_line: raw.type_line,
            rarity: raw.rarity,
            set_number: raw.collector_number,
            mana_value: raw.cmc,
        }
    }
}
