use pyo3::{
    Python,
    types::{PyAnyMethods, PyBytes, PyModule},
};
use ::uescape_py::{Escaper, escape, uescape_py};

#[test]
fn escape_function() {
    assert_eq!(escape("a\u{e7}\u{1F600}".as_bytes(), false).unwrap(), r"a\u00E7\uD83D\uDE00");
    assert_eq!(escape(b"ab\0cd", true).unwrap(), "ab");
}

#[test]
fn escape_function_raises_value_error() {
    let err = escape(b"\x80", false).unwrap_err();
    Python::with_gil(|py| {
        assert!(err.is_instance_of::<pyo3::exceptions::PyValueError>(py));
        assert_eq!(
            err.value(py).to_string(),
            "unexpected continuation byte 0x80 at byte 0"
        );
    });
}

#[test]
fn escaper_streams_chunks() {
    let mut e = Escaper::new(false);
    assert_eq!(e.feed(&[0x61, 0xF0, 0x9F]).unwrap(), r"a\uD83");
    assert_eq!(e.feed(&[0x98]).unwrap(), r"D\uDE");
    assert_eq!(e.feed(&[0x80]).unwrap(), "00");
    assert_eq!(e.finish().unwrap(), "");
    assert!(e.feed(b"x").is_err());
}

#[test]
fn escaper_rejects_truncated_input() {
    let mut e = Escaper::new(false);
    e.feed(&[0xC3]).unwrap();
    assert!(e.finish().is_err());

    let mut lenient = Escaper::new(true);
    assert_eq!(lenient.feed(&[0xC3]).unwrap(), r"\u00");
    assert_eq!(lenient.finish().unwrap(), "");
}

#[test]
fn module_exposes_escape() {
    Python::with_gil(|py| {
        let m = PyModule::new(py, "uescape").unwrap();
        uescape_py(&m).unwrap();
        let out = m
            .getattr("escape")
            .unwrap()
            .call1((PyBytes::new(py, "\u{3042}".as_bytes()),))
            .unwrap();
        assert_eq!(out.extract::<String>().unwrap(), r"\u3042");
        assert!(m.getattr("Escaper").is_ok());
    });
}
