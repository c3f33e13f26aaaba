//! Parsing and matching bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::Locator;
use crate::detection::{parse_detections_with, Detection, ParseConfig};
use crate::solver::{Board, SetMatch};

use super::py_cards::{PyCard, PyRect};

/// Python wrapper for SetMatch.
#[pyclass(name = "SetMatch")]
#[derive(Clone, Debug)]
pub struct PySetMatch(pub SetMatch);

#[pymethods]
impl PySetMatch {
    /// Board positions, ascending.
    #[getter]
    fn positions(&self) -> Vec<usize> {
        self.0.positions.to_vec()
    }

    /// The three cards, in position order.
    #[getter]
    fn cards(&self) -> Vec<PyCard> {
        self.0.cards.iter().copied().map(PyCard).collect()
    }

    /// True if the card at `position` belongs to this Set.
    fn contains(&self, position: usize) -> bool {
        self.0.contains(position)
    }

    fn __len__(&self) -> usize {
        3
    }

    fn __repr__(&self) -> String {
        format!("SetMatch({:?})", self.0.positions)
    }
}

/// Parse `(label, (x, y, width, height))` records into cards.
///
/// Malformed records are dropped. When `confidences` is given (one per
/// record), records below `min_confidence` are dropped too.
#[pyfunction(name = "parse_detections")]
#[pyo3(signature = (records, confidences = None, min_confidence = 0.0))]
pub fn py_parse_detections(
    records: Vec<(String, PyRect)>,
    confidences: Option<Vec<f32>>,
    min_confidence: f32,
) -> PyResult<Vec<PyCard>> {
    let confidences = match confidences {
        Some(values) if values.len() != records.len() => {
            return Err(PyErr::new::<PyValueError, _>(format!(
                "expected {} confidences, got {}",
                records.len(),
                values.len()
            )));
        }
        Some(values) => values,
        None => vec![1.0; records.len()],
    };

    let config = ParseConfig::default().with_min_confidence(min_confidence);
    let detections = records
        .into_iter()
        .zip(confidences)
        .map(|((label, rect), confidence)| {
            Detection::new(label, Locator::from(rect)).with_confidence(confidence)
        });

    Ok(parse_detections_with(detections, &config)
        .iter()
        .copied()
        .map(PyCard)
        .collect())
}

/// Find every Set among `board`, in ascending-position order.
#[pyfunction(name = "find_sets")]
pub fn py_find_sets(board: Vec<PyCard>) -> Vec<PySetMatch> {
    let board: Board = board.into_iter().map(|card| card.0).collect();
    crate::solver::find_set_matches(&board)
        .into_iter()
        .map(PySetMatch)
        .collect()
}
