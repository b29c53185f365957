//! Streaming conversion of UTF-8 bytes into ASCII text where every non-ASCII
//! character is written as a JSON `\uXXXX` escape.
//!
//! Characters outside the Basic Multilingual Plane are written as a UTF-16
//! surrogate pair, the same way a JSON serializer restricted to ASCII output
//! would write them.
//!
//! ```rust
//! let escaped = uescape::escape("a\u{e7}\u{1F600}".as_bytes()).unwrap();
//! assert_eq!(escaped, r"a\u00E7\uD83D\uDE00");
//! ```
//!
//! The work is done one byte at a time by [`MultiByteDecoder`], which never
//! buffers more than the handful of bits it still owes the output. Input can
//! therefore arrive in arbitrary chunks:
//!
//! ```rust
//! use uescape::{EscapeOptions, MultiByteDecoder};
//!
//! let mut out = String::new();
//! let mut decoder = MultiByteDecoder::new(&mut out, EscapeOptions::default());
//! decoder.feed(&[0xF0, 0x9F]).unwrap();
//! decoder.feed(&[0x98, 0x80]).unwrap();
//! decoder.finish().unwrap();
//! assert_eq!(out, r"\uD83D\uDE00");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decoder;
mod error;
mod escape;
mod hex;
mod options;

#[cfg(test)]
mod tests;

pub use decoder::MultiByteDecoder;
pub use error::{ErrorKind, EscapeError};
pub use escape::{escape, escape_into, escape_str, escape_with};
pub use hex::hex_digit;
pub use options::EscapeOptions;
