//! Normalized bounding rectangle of a detected card.
//!
//! The solver never reads these fields. They travel with the card so a
//! presentation layer can highlight the cards of a selected Set.

use serde::{Deserialize, Serialize};

/// Bounding box in normalized image coordinates (0.0 to 1.0 on each axis).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Locator {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Locator {
    /// Create a locator from origin and size.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the rectangle.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl From<(f32, f32, f32, f32)> for Locator {
    fn from((x, y, width, height): (f32, f32, f32, f32)) -> Self {
        Self::new(x, y, width, height)
    }
}
