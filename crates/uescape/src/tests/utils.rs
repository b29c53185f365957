use alloc::string::String;
use core::fmt::Write;

use crate::{EscapeError, EscapeOptions, MultiByteDecoder};

/// Reference escaping built on the standard library's UTF-16 encoder.
pub fn reference_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() * 6);
    for c in s.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(out, "\\u{unit:04X}").unwrap();
            }
        }
    }
    out
}

/// Feeds `bytes` split at the given cut points (taken modulo the remaining
/// length) and returns the escaped text.
pub fn escape_chunked(bytes: &[u8], splits: &[usize]) -> Result<String, EscapeError> {
    let mut out = String::new();
    let mut decoder = MultiByteDecoder::new(&mut out, EscapeOptions::default());
    let mut rest = bytes;
    for &s in splits {
        if rest.is_empty() {
            break;
        }
        let (chunk, tail) = rest.split_at(1 + s % rest.len());
        decoder.feed(chunk)?;
        rest = tail;
    }
    decoder.feed(rest)?;
    decoder.finish()?;
    Ok(out)
}
