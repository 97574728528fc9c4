//! Python bindings for the rust-chargeup scoring engine.
//!
//! The score-sheet UI is written in Python; it resolves pointer and key
//! input into intents and drives a `Session` through these bindings.
//!
//! # Quick Start
//!
//! ```python
//! import rust_chargeup as cu
//!
//! session = cu.Session(three_team=True)
//! session.select_team(1)
//!
//! session.begin_stroke()
//! session.paint("High", 4)
//! session.cycle_end_action()
//!
//! total, per_team = session.scoreboard()
//! session.save("match.frc")
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_session;

pub use py_core::*;
pub use py_session::*;

/// rust-chargeup: score sheet engine for the Charged Up grid.
#[pymodule]
fn rust_chargeup(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PySession>()?;
    m.add_function(wrap_pyfunction!(score_document, m)?)?;

    m.add("FILE_EXTENSION", crate::document::FILE_EXTENSION)?;
    m.add("DEFAULT_FILE_NAME", crate::document::DEFAULT_FILE_NAME)?;

    Ok(())
}
