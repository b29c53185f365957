use ::uescape::{EscapeOptions, MultiByteDecoder};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::to_py_err;

/// Incremental escaper: feed UTF-8 bytes in any chunking, get back the
/// escaped text each chunk completes.
#[pyclass(module = "uescape")]
pub struct Escaper {
    decoder: Option<MultiByteDecoder<String>>,
}

#[pymethods]
impl Escaper {
    #[new]
    #[pyo3(signature = (*, allow_truncated_input = false))]
    pub fn new(allow_truncated_input: bool) -> Self {
        let options = EscapeOptions {
            allow_truncated_input,
            ..Default::default()
        };
        Self {
            decoder: Some(MultiByteDecoder::new(String::new(), options)),
        }
    }

    /// Feed a chunk and return the text produced since the previous call.
    pub fn feed(&mut self, data: &[u8]) -> PyResult<String> {
        let decoder = self
            .decoder
            .as_mut()
            .ok_or_else(|| PyValueError::new_err("escaper is already finished"))?;
        decoder.feed(data).map_err(to_py_err)?;
        Ok(core::mem::take(decoder.get_mut()))
    }

    /// End the input and return any text not yet returned by `feed`.
    pub fn finish(&mut self) -> PyResult<String> {
        let decoder = self
            .decoder
            .take()
            .ok_or_else(|| PyValueError::new_err("escaper is already finished"))?;
        decoder.finish().map_err(to_py_err)
    }
}
