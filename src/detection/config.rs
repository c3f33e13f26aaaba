//! Batch parsing configuration.

use serde::{Deserialize, Serialize};

/// Knobs for lenient batch parsing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Detections with a lower confidence are dropped (default: 0.0, keep all).
    pub min_confidence: f32,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.0,
        }
    }
}

impl ParseConfig {
    /// Set the minimum detector confidence.
    #[must_use]
    pub fn with_min_confidence(mut self, min_confidence: f32) -> Self {
        self.min_confidence = min_confidence;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keeps_everything() {
        assert_eq!(ParseConfig::default().min_confidence, 0.0);
    }

    #[test]
    fn test_builder() {
        let config = ParseConfig::default().with_min_confidence(0.6);
        assert_eq!(config.min_confidence, 0.6);
    }

    #[test]
    fn test_serialization() {
        let config: ParseConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, ParseConfig::default());

        let config = ParseConfig::default().with_min_confidence(0.5);
        let json = serde_json::to_string(&config).unwrap();
        let back: ParseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
