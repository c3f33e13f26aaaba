//! One record from the object detector.

use serde::{Deserialize, Serialize};

use crate::cards::Locator;

/// A detected card: the detector's top label, its confidence, and where it is.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
    pub locator: Locator,
}

impl Detection {
    /// Create a detection with full confidence.
    pub fn new(label: impl Into<String>, locator: Locator) -> Self {
        Self {
            label: label.into(),
            confidence: 1.0,
            locator,
        }
    }

    /// Set the detector confidence (builder pattern).
    #[must_use]
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    /// Overlay text for the bounding box, e.g. `"0120 0.93"`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{} {:.2}", self.label, self.confidence)
    }
}

impl From<(String, Locator)> for Detection {
    fn from((label, locator): (String, Locator)) -> Self {
        Self::new(label, locator)
    }
}

impl From<(&str, Locator)> for Detection {
    fn from((label, locator): (&str, Locator)) -> Self {
        Self::new(label, locator)
    }
}
