//! Python bindings for the set-solver engine.
//!
//! These exist for a presentation layer written in Python: feed it the
//! detector output, get back the Sets to list and highlight.
//!
//! # Quick Start
//!
//! ```python
//! import set_solver as ss
//!
//! board = ss.parse_detections(
//!     [
//!         ("0000", (0.0, 0.0, 0.3, 0.2)),
//!         ("1111", (0.3, 0.0, 0.3, 0.2)),
//!         ("2222", (0.6, 0.0, 0.3, 0.2)),
//!     ],
//!     confidences=[0.97, 0.91, 0.88],
//!     min_confidence=0.5,
//! )
//!
//! for found in ss.find_sets(board):
//!     print(found.positions, [card.description for card in found.cards])
//! ```

use pyo3::prelude::*;

mod py_cards;
mod py_solver;

pub use py_cards::*;
pub use py_solver::*;

/// set_solver: find Sets among detected cards.
#[pymodule]
fn set_solver(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyCard>()?;
    m.add_class::<PySetMatch>()?;

    m.add_function(wrap_pyfunction!(create_card, m)?)?;
    m.add_function(wrap_pyfunction!(parse_label, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_detections, m)?)?;
    m.add_function(wrap_pyfunction!(py_find_sets, m)?)?;

    Ok(())
}
