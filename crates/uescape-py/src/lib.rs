mod escaper;

pub use escaper::Escaper;

use ::uescape::{EscapeError, EscapeOptions};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub(crate) fn to_py_err(err: EscapeError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// Escape UTF-8 `data` into ASCII text with JSON `\uXXXX` escapes.
///
/// Raises `ValueError` if `data` is not well-sequenced UTF-8.
#[pyfunction]
#[pyo3(signature = (data, *, stop_at_nul = false))]
pub fn escape(data: &[u8], stop_at_nul: bool) -> PyResult<String> {
    let options = EscapeOptions {
        stop_at_nul,
        ..Default::default()
    };
    ::uescape::escape_with(data, options).map_err(to_py_err)
}

#[pymodule]
#[pyo3(name = "uescape")]
pub fn uescape_py(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(escape, m)?)?;
    m.add_class::<Escaper>()?;
    Ok(())
}
