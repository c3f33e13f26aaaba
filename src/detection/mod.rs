//! Turning detector output into cards.
//!
//! The object detector hands over one record per card it saw: a
//! four-character label (count, color, fill, shape codes) and a normalized
//! bounding box. This module has two entry points with different failure
//! policies:
//!
//! - `parse_label`: strict, one record, errors surface to the caller
//! - `parse_detections`: lenient, whole batch, bad records are dropped

pub mod config;
pub mod parser;
pub mod record;

pub use config::ParseConfig;
pub use parser::{parse_detections, parse_detections_with, parse_label, LABEL_LEN};
pub use record::Detection;
