//! The four card attributes and their closed value sets.
//!
//! Every attribute has exactly three values. Each value carries an integer
//! code (0, 1, 2), which is what the detector emits and what the validity
//! rule sums, plus a display name used in card descriptions.
//!
//! | Code | Count | Color  | Fill    | Shape    |
//! |------|-------|--------|---------|----------|
//! | 0    | 1     | red    | full    | oval     |
//! | 1    | 2     | green  | empty   | diamond  |
//! | 2    | 3     | purple | striped | squiggle |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SetError};

/// Names one of the four attributes, in label order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    Count,
    Color,
    Fill,
    Shape,
}

impl AttributeKind {
    /// All kinds in label order (count, color, fill, shape).
    pub const ALL: [AttributeKind; 4] = [
        AttributeKind::Count,
        AttributeKind::Color,
        AttributeKind::Fill,
        AttributeKind::Shape,
    ];

    /// Position of this attribute inside a label token.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttributeKind::Count => "count",
            AttributeKind::Color => "color",
            AttributeKind::Fill => "fill",
            AttributeKind::Shape => "shape",
        };
        f.write_str(name)
    }
}

/// Shared behaviour of the four attribute enums.
pub trait Attribute: Copy + Eq + fmt::Debug + fmt::Display + 'static {
    /// Which attribute this type represents.
    const KIND: AttributeKind;

    /// All values, indexed by code.
    const ALL: [Self; 3];

    /// Integer code in `{0, 1, 2}`.
    fn code(self) -> u8;

    /// Canonical display name.
    fn name(self) -> &'static str;

    /// Look up a value by code.
    #[must_use]
    fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// Look up a value by code, failing with `InvalidAttributeCode`.
    fn try_from_code(code: u8) -> Result<Self> {
        Self::from_code(code).ok_or_else(|| SetError::invalid_code(Self::KIND, code))
    }
}

macro_rules! attribute_enum {
    (
        $(#[$meta:meta])*
        $name:ident => $kind:expr,
        { $($variant:ident = $code:literal => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        #[repr(u8)]
        pub enum $name {
            $($variant = $code),+
        }

        impl Attribute for $name {
            const KIND: AttributeKind = $kind;
            const ALL: [Self; 3] = [$($name::$variant),+];

            fn code(self) -> u8 {
                self as u8
            }

            fn name(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

attribute_enum! {
    /// Number of symbols printed on the card.
    Count => AttributeKind::Count,
    { One = 0 => "1", Two = 1 => "2", Three = 2 => "3" }
}

attribute_enum! {
    /// Symbol color.
    Color => AttributeKind::Color,
    { Red = 0 => "red", Green = 1 => "green", Purple = 2 => "purple" }
}

attribute_enum! {
    /// Symbol shading.
    Fill => AttributeKind::Fill,
    { Full = 0 => "full", Empty = 1 => "empty", Striped = 2 => "striped" }
}

attribute_enum! {
    /// Symbol outline.
    Shape => AttributeKind::Shape,
    { Oval = 0 => "oval", Diamond = 1 => "diamond", Squiggle = 2 => "squiggle" }
}
