//! A single detected card.
//!
//! `Card` is an immutable value: four typed attributes plus the locator of
//! the detection it came from. Because the attributes are closed enums, a
//! `Card` can only hold valid codes; the integer constructor is the one place
//! where untrusted codes are checked.
//!
//! ## Example
//!
//! ```
//! use set_solver::cards::{Card, Locator};
//!
//! let card = Card::new(2, 0, 1, 2, Locator::default()).unwrap();
//! assert_eq!(card.description(), "3 red empty squiggle");
//! assert_eq!(card.label(), "2012");
//!
//! assert!(Card::new(0, 3, 0, 0, Locator::default()).is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Count, Fill, Shape};
use super::locator::Locator;
use crate::error::Result;

/// One physical card and where it was seen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    count: Count,
    color: Color,
    fill: Fill,
    shape: Shape,
    locator: Locator,
}

impl Card {
    /// Build a card from raw integer codes.
    ///
    /// Fails with `InvalidAttributeCode` naming the first attribute (in
    /// count, color, fill, shape order) whose code is outside `{0, 1, 2}`.
    pub fn new(count: u8, color: u8, fill: u8, shape: u8, locator: Locator) -> Result<Self> {
        Ok(Self::from_attributes(
            Count::try_from_code(count)?,
            Color::try_from_code(color)?,
            Fill::try_from_code(fill)?,
            Shape::try_from_code(shape)?,
            locator,
        ))
    }

    /// Build a card from typed attributes.
    #[must_use]
    pub const fn from_attributes(
        count: Count,
        color: Color,
        fill: Fill,
        shape: Shape,
        locator: Locator,
    ) -> Self {
        Self {
            count,
            color,
            fill,
            shape,
            locator,
        }
    }

    #[must_use]
    pub const fn count(&self) -> Count {
        self.count
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub const fn fill(&self) -> Fill {
        self.fill
    }

    #[must_use]
    pub const fn shape(&self) -> Shape {
        self.shape
    }

    #[must_use]
    pub const fn locator(&self) -> Locator {
        self.locator
    }

    /// Attribute codes in label order.
    #[must_use]
    pub fn codes(&self) -> [u8; 4] {
        [
            self.count.code(),
            self.color.code(),
            self.fill.code(),
            self.shape.code(),
        ]
    }

    /// True if both cards show the same face, ignoring where they were seen.
    #[must_use]
    pub fn same_face(&self, other: &Card) -> bool {
        self.codes() == other.codes()
    }

    /// Same card, moved to another locator.
    #[must_use]
    pub const fn with_locator(self, locator: Locator) -> Self {
        Self { locator, ..self }
    }

    /// Human-readable description, e.g. `"2 green striped oval"`.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }

    /// Key a presentation layer uses to find the card's artwork.
    #[must_use]
    pub fn asset_key(&self) -> String {
        self.description()
    }

    /// The four-character code token the detector would emit for this card.
    #[must_use]
    pub fn label(&self) -> String {
        self.codes()
            .iter()
            .map(|code| char::from(b'0' + code))
            .collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.count, self.color, self.fill, self.shape)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::AttributeKind;
    use crate::error::SetError;

    #[test]
    fn test_new_resolves_codes() {
        let card = Card::new(0, 1, 2, 0, Locator::default()).unwrap();
        assert_eq!(card.count(), Count::One);
        assert_eq!(card.color(), Color::Green);
        assert_eq!(card.fill(), Fill::Striped);
        assert_eq!(card.shape(), Shape::Oval);
        assert_eq!(card.codes(), [0, 1, 2, 0]);
    }

    #[test]
    fn test_description_order() {
        let card = Card::new(1, 2, 0, 1, Locator::default()).unwrap();
        assert_eq!(card.description(), "2 purple full diamond");
        assert_eq!(card.asset_key(), card.description());
        assert_eq!(format!("{}", card), "2 purple full diamond");
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = Card::new(0, 0, 0, 3, Locator::default()).unwrap_err();
        assert_eq!(
            err,
            SetError::InvalidAttributeCode {
                attribute: AttributeKind::Shape,
                code: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_first_bad_attribute_reported() {
        let err = Card::new(5, 9, 0, 0, Locator::default()).unwrap_err();
        assert!(matches!(
            err,
            SetError::InvalidAttributeCode {
                attribute: AttributeKind::Count,
                ..
            }
        ));
    }

    #[test]
    fn test_locator_carried_unchanged() {
        let loc = Locator::new(0.1, 0.2, 0.3, 0.4);
        let card = Card::new(2, 2, 2, 2, loc).unwrap();
        assert_eq!(card.locator(), loc);

        let moved = card.with_locator(Locator::default());
        assert!(moved.same_face(&card));
        assert_ne!(moved, card);
    }

    #[test]
    fn test_label() {
        let card = Card::new(2, 0, 1, 2, Locator::default()).unwrap();
        assert_eq!(card.label(), "2012");
    }

    #[test]
    fn test_serialization() {
        let card = Card::new(0, 1, 2, 1, Locator::new(0.5, 0.5, 0.1, 0.2)).unwrap();
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
