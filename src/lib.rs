//! # set-solver
//!
//! Card model and matching engine for the card game Set.
//!
//! A detector (out of scope here) looks at a photo of the table and reports
//! one labelled bounding box per card. This crate turns those records into
//! cards and finds every triple that forms a Set.
//!
//! ## Pipeline
//!
//! 1. **Parse**: `parse_detections` turns `(label, locator)` records into a
//!    `Board`, dropping malformed records.
//! 2. **Match**: `find_sets` checks every combination of three positions
//!    and returns the valid triples in ascending-index order.
//! 3. **Present**: `Solution` keeps the board and matches together and
//!    answers which cards belong to a selected Set.
//!
//! ```
//! use set_solver::{find_sets, parse_detections, Locator};
//!
//! let board = parse_detections([
//!     ("0000", Locator::new(0.0, 0.0, 0.3, 0.2)),
//!     ("1111", Locator::new(0.3, 0.0, 0.3, 0.2)),
//!     ("2222", Locator::new(0.6, 0.0, 0.3, 0.2)),
//!     ("012", Locator::new(0.0, 0.5, 0.3, 0.2)),
//! ]);
//! assert_eq!(board.len(), 3);
//!
//! let sets = find_sets(&board);
//! assert_eq!(sets.len(), 1);
//! assert_eq!(sets[0][2].description(), "3 purple striped squiggle");
//! ```
//!
//! ## Modules
//!
//! - `cards`: attributes, locators, cards, and the 81-card deck
//! - `detection`: detector records and label parsing
//! - `solver`: validity rule, enumeration engine, results
//! - `error`: error type for strict construction

pub mod cards;
pub mod detection;
pub mod error;
pub mod solver;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::cards::{
    Attribute, AttributeKind, Card, Color, Count, Deck, Fill, Locator, Shape,
};

pub use crate::detection::{parse_detections, parse_detections_with, parse_label, Detection, ParseConfig};

pub use crate::error::{Result, SetError};

pub use crate::solver::{
    find_set_matches, find_sets, is_set, third_card, Board, SetMatch, Solution,
};
