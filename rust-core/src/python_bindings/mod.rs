//! PyO3 bindings for Python integration

use pyo3::prelude::*;

mod analysis_bindings;

/// Python module definition
#[pymodule]
fn vibration_spectrum(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<analysis_bindings::PyVibrationAnalyzer>()?;

    // Add configuration enums
    m.add_class::<analysis_bindings::PyWindowType>()?;
    m.add_class::<analysis_bindings::PyBinMapping>()?;

    Ok(())
}
