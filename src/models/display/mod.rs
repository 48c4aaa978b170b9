//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod card;
mod set;

pub use card::{CardDisplay, NameDisplay};
pub use set::SetDisplay;
