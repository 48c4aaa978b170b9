//! Scryfall API data models
//!
//! Wire shapes mirror the upstream JSON; [`Card`] is the normalized
//! record everything downstream consumes.

mod card;
mod set;

pub use card::{Card, CardFace, CardImage, ImageUris, ScryfallCard, SearchPage};
pub use set::{CardSet, ServiceHealth, SetList};
