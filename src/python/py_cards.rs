//! Card bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::cards::{Attribute, Card, Locator};

/// Rectangle as Python sees it: `(x, y, width, height)`.
pub type PyRect = (f32, f32, f32, f32);

/// Python wrapper for Card.
#[pyclass(name = "Card")]
#[derive(Clone, Debug)]
pub struct PyCard(pub Card);

#[pymethods]
impl PyCard {
    /// Count code (0-2).
    #[getter]
    fn count(&self) -> u8 {
        self.0.count().code()
    }

    /// Color code (0-2).
    #[getter]
    fn color(&self) -> u8 {
        self.0.color().code()
    }

    /// Fill code (0-2).
    #[getter]
    fn fill(&self) -> u8 {
        self.0.fill().code()
    }

    /// Shape code (0-2).
    #[getter]
    fn shape(&self) -> u8 {
        self.0.shape().code()
    }

    /// Human-readable description, also the artwork lookup key.
    #[getter]
    fn description(&self) -> String {
        self.0.description()
    }

    /// Four-character code label.
    #[getter]
    fn label(&self) -> String {
        self.0.label()
    }

    /// Bounding box as `(x, y, width, height)`.
    #[getter]
    fn locator(&self) -> PyRect {
        let loc = self.0.locator();
        (loc.x, loc.y, loc.width, loc.height)
    }

    fn __repr__(&self) -> String {
        format!("Card('{}', {:?})", self.0.label(), self.locator())
    }

    fn __str__(&self) -> String {
        self.0.description()
    }
}

/// Build a card from integer codes, raising `ValueError` on bad codes.
#[pyfunction]
#[pyo3(signature = (count, color, fill, shape, locator = (0.0, 0.0, 0.0, 0.0)))]
pub fn create_card(count: u8, color: u8, fill: u8, shape: u8, locator: PyRect) -> PyResult<PyCard> {
    Card::new(count, color, fill, shape, Locator::from(locator))
        .map(PyCard)
        .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
}

/// Parse a single label strictly, raising `ValueError` on malformed input.
#[pyfunction]
#[pyo3(signature = (label, locator = (0.0, 0.0, 0.0, 0.0)))]
pub fn parse_label(label: &str, locator: PyRect) -> PyResult<PyCard> {
    crate::detection::parse_label(label, Locator::from(locator))
        .map(PyCard)
        .map_err(|e| PyErr::new::<PyValueError, _>(format!("{}", e)))
}
