//! Label parsing.
//!
//! A label is exactly four characters, each `'0'`, `'1'` or `'2'`, giving
//! the count, color, fill and shape codes in that order.

use log::{debug, trace};

use super::config::ParseConfig;
use super::record::Detection;
use crate::cards::{AttributeKind, Card, Locator};
use crate::error::{Result, SetError};
use crate::solver::Board;

/// Characters in a label token.
pub const LABEL_LEN: usize = 4;

/// Parse one label into a card, failing on any malformed input.
///
/// Length is checked first (`MalformedLabel`), then each character in
/// label order (`InvalidAttributeCode` for the first one outside
/// `'0'..='2'`).
///
/// ```
/// use set_solver::cards::{Color, Locator};
/// use set_solver::detection::parse_label;
///
/// let card = parse_label("0120", Locator::default()).unwrap();
/// assert_eq!(card.color(), Color::Green);
/// assert!(parse_label("012", Locator::default()).is_err());
/// assert!(parse_label("0123", Locator::default()).is_err());
/// ```
pub fn parse_label(label: &str, locator: Locator) -> Result<Card> {
    let length = label.chars().count();
    if length != LABEL_LEN {
        return Err(SetError::MalformedLabel {
            label: label.to_string(),
            length,
        });
    }

    let mut codes = [0u8; LABEL_LEN];
    for (kind, ch) in AttributeKind::ALL.into_iter().zip(label.chars()) {
        codes[kind.index()] = match ch {
            '0'..='2' => ch as u8 - b'0',
            _ => return Err(SetError::invalid_code(kind, ch)),
        };
    }

    let [count, color, fill, shape] = codes;
    Card::new(count, color, fill, shape, locator)
}

/// Parse a batch of detections with the default configuration.
///
/// Malformed records are dropped; the remaining cards keep their relative
/// order.
pub fn parse_detections<I>(records: I) -> Board
where
    I: IntoIterator,
    I::Item: Into<Detection>,
{
    parse_detections_with(records, &ParseConfig::default())
}

/// Parse a batch of detections, dropping every record that is malformed or
/// below `config.min_confidence`.
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
pub fn parse_detections_with<I>(records: I, config: &ParseConfig) -> Board
where
    I: IntoIterator,
    I::Item: Into<Detection>,
{
    let mut dropped = 0usize;

    let cards: Vec<Card> = records
        .into_iter()
        .map(Into::into)
        .filter_map(|detection: Detection| {
            if detection.confidence < config.min_confidence {
                debug!(
                    "dropping detection {}: below min confidence {:.2}",
                    detection.summary(),
                    config.min_confidence
                );
                dropped += 1;
                return None;
            }
            match parse_label(&detection.label, detection.locator) {
                Ok(card) => Some(card),
                Err(err) => {
                    debug!("dropping detection {}: {}", detection.summary(), err);
                    dropped += 1;
                    None
                }
            }
        })
        .collect();

    trace!("parsed {} cards, dropped {} detections", cards.len(), dropped);
    Board::new(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Count, Fill, Shape};

    fn loc(x: f32) -> Locator {
        Locator::new(x, 0.0, 0.1, 0.1)
    }

    #[test]
    fn test_parse_label_orders_attributes() {
        let card = parse_label("2101", loc(0.0)).unwrap();
        assert_eq!(card.count(), Count::Three);
        assert_eq!(card.fill(), Fill::Full);
        assert_eq!(card.shape(), Shape::Diamond);
        assert_eq!(card.label(), "2101");
    }

    #[test]
    fn test_parse_label_length() {
        for label in ["", "012", "01201"] {
            let err = parse_label(label, loc(0.0)).unwrap_err();
            assert!(matches!(err, SetError::MalformedLabel { .. }), "{label}");
        }
    }

    #[test]
    fn test_parse_label_counts_chars_not_bytes() {
        let err = parse_label("00é0", loc(0.0)).unwrap_err();
        assert_eq!(
            err,
            SetError::InvalidAttributeCode {
                attribute: AttributeKind::Fill,
                code: "é".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_label_bad_code() {
        let err = parse_label("0300", loc(0.0)).unwrap_err();
        assert_eq!(
            err,
            SetError::InvalidAttributeCode {
                attribute: AttributeKind::Color,
                code: "3".to_string(),
            }
        );
        assert!(parse_label("000x", loc(0.0)).is_err());
        assert!(parse_label("-000", loc(0.0)).is_err());
    }

    #[test]
    fn test_batch_drops_bad_records() {
        let board = parse_detections([
            ("0000", loc(0.0)),
            ("012", loc(0.1)),
            ("1111", loc(0.2)),
            ("0003", loc(0.3)),
            ("2222", loc(0.4)),
        ]);
        let labels: Vec<String> = board.iter().map(Card::label).collect();
        assert_eq!(labels, ["0000", "1111", "2222"]);
        assert_eq!(board[1].locator(), loc(0.2));
    }

    #[test]
    fn test_batch_confidence_threshold() {
        let config = ParseConfig::default().with_min_confidence(0.5);
        let board = parse_detections_with(
            [
                Detection::new("0000", loc(0.0)).with_confidence(0.9),
                Detection::new("1111", loc(0.1)).with_confidence(0.2),
                Detection::new("2222", loc(0.2)).with_confidence(0.5),
            ],
            &config,
        );
        let labels: Vec<String> = board.iter().map(Card::label).collect();
        assert_eq!(labels, ["0000", "2222"]);
    }

    #[test]
    fn test_batch_empty() {
        let board = parse_detections(Vec::<Detection>::new());
        assert!(board.is_empty());
    }
}
