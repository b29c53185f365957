//! Whole-input entry points that drive a fresh [`MultiByteDecoder`] over a
//! byte slice.

use alloc::string::String;
use core::fmt::Write;

use crate::{decoder::MultiByteDecoder, error::EscapeError, options::EscapeOptions};

/// Escapes `input` with the default options.
///
/// # Errors
///
/// Returns an [`EscapeError`] if `input` is not a well-sequenced UTF-8 byte
/// string.
///
/// # Examples
///
/// ```rust
/// assert_eq!(uescape::escape(b"\xE3\x81\x82").unwrap(), r"\u3042");
/// assert!(uescape::escape(b"\x80").is_err());
/// ```
pub fn escape(input: &[u8]) -> Result<String, EscapeError> {
    escape_with(input, EscapeOptions::default())
}

/// Escapes `input` with the given options.
///
/// # Errors
///
/// See [`escape`].
pub fn escape_with(input: &[u8], options: EscapeOptions) -> Result<String, EscapeError> {
    // Worst case is six output bytes per input byte (`\u00XX` for each lead).
    let mut out = String::with_capacity(input.len().saturating_mul(6));
    escape_into(input, &mut out, options)?;
    Ok(out)
}

/// Escapes `input` into any [`core::fmt::Write`] sink.
///
/// On error, the sink holds the output produced before the offending byte.
///
/// # Errors
///
/// See [`escape`]. Also fails with [`ErrorKind::Write`](crate::ErrorKind) if
/// the sink rejects a write.
pub fn escape_into<W: Write + ?Sized>(
    input: &[u8],
    out: &mut W,
    options: EscapeOptions,
) -> Result<(), EscapeError> {
    let mut decoder = MultiByteDecoder::new(out, options);
    decoder.feed(input)?;
    decoder.finish()?;
    Ok(())
}

/// Escapes already-validated text.
///
/// A `&str` is always well-formed UTF-8, so this cannot fail on sequencing.
/// NUL characters are passed through.
///
/// # Panics
///
/// Never in practice: the input is valid UTF-8 and a `String` sink cannot
/// refuse writes.
#[must_use]
pub fn escape_str(input: &str) -> String {
    let mut out = String::with_capacity(input.len().saturating_mul(6));
    escape_into(input.as_bytes(), &mut out, EscapeOptions::default())
        .expect("escaping valid UTF-8 into a String cannot fail");
    out
}
