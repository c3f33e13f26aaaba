//! Card model: attributes, locators, cards, and the deck.
//!
//! ## Key Types
//!
//! - `Count`, `Color`, `Fill`, `Shape`: closed three-valued attributes
//! - `AttributeKind`: names an attribute in label order
//! - `Locator`: normalized bounding box, opaque to the solver
//! - `Card`: immutable card value with a derived description
//! - `Deck`: all 81 cards, for dealing simulated boards

pub mod attributes;
pub mod card;
pub mod deck;
pub mod locator;

pub use attributes::{Attribute, AttributeKind, Color, Count, Fill, Shape};
pub use card::Card;
pub use deck::Deck;
pub use locator::Locator;
