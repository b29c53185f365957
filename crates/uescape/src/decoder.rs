//! The per-byte UTF-8 to `\uXXXX` state machine.
//!
//! Overview
//! - [`MultiByteDecoder`] consumes one byte per [`step`](MultiByteDecoder::step)
//!   and appends escape text to a caller-owned sink as soon as enough bits are
//!   known to produce the next hex digit. Nothing is buffered beyond the two
//!   or three bits a digit straddles.
//! - ASCII bytes are copied through unchanged. Every other code point becomes
//!   one `\uXXXX` token, or two for code points above U+FFFF, where the tokens
//!   form the UTF-16 surrogate pair
//!   `D800 + ((cp - 0x10000) >> 10)`, `DC00 + ((cp - 0x10000) & 0x3FF)`.
//!
//! Bit layout
//! - Two-byte `110aaabb 10bbcccc`: the lead writes `\u0` and `aaa`, the tail
//!   writes the last two digits.
//! - Three-byte `1110aaaa 10bbbbcc 10ccdddd`: one digit per byte boundary,
//!   with the two bits straddling the middle byte carried in the state.
//! - Four-byte `11110ppp 10ppxxxx 10xxxxxx 10xxxxxx`: the five plane bits `p`
//!   are only complete at the second byte, which is where the `- 0x10000`
//!   bias is applied and the high surrogate's middle digits are written. The
//!   third byte completes the high surrogate and opens the low one.
//!
//! Invariants
//! - A continuation byte is accepted only while a sequence is in progress, and
//!   a lead or ASCII byte only while idle.
//! - A step that fails writes nothing. After a failure the decoder is
//!   poisoned: every later `step`, `feed` and `finish` returns the same error.

use alloc::string::String;
use core::fmt::Write;

use crate::{
    error::{ErrorKind, EscapeError},
    hex::hex_digit,
    options::EscapeOptions,
};

/// Where the decoder is within the current code point.
///
/// Each variant carries exactly the bits still owed to the output, so there is
/// no way to be "awaiting a low surrogate" with no bytes left to complete it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between code points.
    Idle,
    /// After a three-byte lead; the next byte holds code point bits 11..6.
    ThreeByteMiddle,
    /// After a four-byte lead; `plane_hi` holds code point bits 20..18.
    HighSurrogate { plane_hi: u8 },
    /// After the second byte of a four-byte sequence; the high surrogate
    /// still owes its last digit and the low surrogate is pending. `carry`
    /// holds code point bits 13..12.
    LowSurrogate { carry: u8 },
    /// The next byte is the last of the sequence. `carry` holds the two bits
    /// that become the top of the second-to-last digit.
    Tail { carry: u8 },
}

impl State {
    fn remaining(self) -> u8 {
        match self {
            State::Idle => 0,
            State::Tail { .. } => 1,
            State::ThreeByteMiddle | State::LowSurrogate { .. } => 2,
            State::HighSurrogate { .. } => 3,
        }
    }
}

/// Streaming transcoder from UTF-8 bytes to ASCII text with `\uXXXX`
/// escapes.
///
/// The decoder owns its output sink, which may itself be a `&mut` borrow such
/// as `&mut String`, and only ever appends to it. Use one decoder per input
/// string; there is no reset.
///
/// # Examples
///
/// ```rust
/// use uescape::{EscapeOptions, MultiByteDecoder};
///
/// let mut out = String::new();
/// let mut decoder = MultiByteDecoder::new(&mut out, EscapeOptions::default());
/// for &b in "ç".as_bytes() {
///     decoder.step(b).unwrap();
/// }
/// decoder.finish().unwrap();
/// assert_eq!(out, r"\u00E7");
/// ```
#[derive(Debug)]
pub struct MultiByteDecoder<W: Write = String> {
    output: W,
    options: EscapeOptions,
    state: State,
    offset: usize,
    terminated: bool,
    failed: Option<EscapeError>,
}

impl<W: Write> MultiByteDecoder<W> {
    /// Creates a decoder that appends to `output`.
    pub fn new(output: W, options: EscapeOptions) -> Self {
        Self {
            output,
            options,
            state: State::Idle,
            offset: 0,
            terminated: false,
            failed: None,
        }
    }

    /// Consumes exactly one input byte, appending zero or more characters to
    /// the output.
    ///
    /// # Errors
    ///
    /// Returns an [`EscapeError`] if the byte breaks UTF-8 sequencing, is an
    /// unsupported lead byte, completes an out-of-range plane, or if the sink
    /// rejects the write. The same error is returned for every later call.
    pub fn step(&mut self, byte: u8) -> Result<(), EscapeError> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        if self.terminated {
            return Ok(());
        }
        if self.options.stop_at_nul && byte == 0 {
            self.terminated = true;
            return Ok(());
        }

        let next = if byte & 0xC0 == 0x80 {
            self.continuation(byte)
        } else {
            self.lead(byte)
        };

        match next {
            Ok(state) => {
                self.state = state;
                self.offset += 1;
                Ok(())
            }
            Err(kind) => Err(self.error(kind)),
        }
    }

    /// Steps over every byte of `bytes` in order, stopping at the first error.
    ///
    /// Chunks may split a multi-byte sequence anywhere; the output is the same
    /// as for the concatenated input.
    ///
    /// # Errors
    ///
    /// See [`step`](Self::step).
    pub fn feed(&mut self, bytes: &[u8]) -> Result<(), EscapeError> {
        for &byte in bytes {
            if self.terminated {
                break;
            }
            self.step(byte)?;
        }
        Ok(())
    }

    /// Ends the input and returns the sink.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnexpectedEndOfInput`] if a multi-byte sequence is
    /// still in progress and
    /// [`allow_truncated_input`](EscapeOptions::allow_truncated_input) is not
    /// set, or the error that previously poisoned the decoder.
    pub fn finish(mut self) -> Result<W, EscapeError> {
        if let Some(err) = self.failed {
            return Err(err);
        }
        let remaining = self.state.remaining();
        if remaining > 0 && !self.options.allow_truncated_input {
            return Err(self.error(ErrorKind::UnexpectedEndOfInput { remaining }));
        }
        Ok(self.output)
    }

    /// Continuation bytes still expected before the current code point is
    /// complete.
    #[must_use]
    pub fn remaining(&self) -> u8 {
        self.state.remaining()
    }

    /// Whether the high surrogate of a four-byte sequence has been written and
    /// the low surrogate is owed on the next byte.
    #[must_use]
    pub fn pending_low_surrogate(&self) -> bool {
        matches!(self.state, State::LowSurrogate { .. })
    }

    /// Whether the decoder is between code points.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state == State::Idle
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The sink written so far.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.output
    }

    /// Mutable access to the sink, e.g. to drain text produced so far.
    ///
    /// Only append to or take from the sink between steps; the decoder does
    /// not re-emit anything already written.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// The options this decoder was created with.
    #[must_use]
    pub fn options(&self) -> EscapeOptions {
        self.options
    }

    fn lead(&mut self, byte: u8) -> Result<State, ErrorKind> {
        if self.state != State::Idle {
            return Err(ErrorKind::UnexpectedLead {
                byte,
                remaining: self.state.remaining(),
            });
        }

        match byte {
            0x00..=0x7F => {
                self.write_char(char::from(byte))?;
                Ok(State::Idle)
            }
            0xC0..=0xDF => {
                self.write_str(r"\u0")?;
                self.write_digit((byte >> 2) & 0x7)?;
                Ok(State::Tail { carry: byte & 0x3 })
            }
            0xE0..=0xEF => {
                self.write_str(r"\u")?;
                self.write_digit(byte)?;
                Ok(State::ThreeByteMiddle)
            }
            // F5..=F7 would start a code point beyond U+10FFFF.
            0xF0..=0xF4 => {
                self.write_str(r"\uD")?;
                Ok(State::HighSurrogate {
                    plane_hi: byte & 0x7,
                })
            }
            _ => Err(ErrorKind::UnsupportedLead(byte)),
        }
    }

    fn continuation(&mut self, byte: u8) -> Result<State, ErrorKind> {
        let payload = byte & 0x3F;

        match self.state {
            State::Idle => Err(ErrorKind::UnexpectedContinuation(byte)),
            State::HighSurrogate { plane_hi } => {
                let plane = (plane_hi << 2) | (payload >> 4);
                if !(1..=16).contains(&plane) {
                    return Err(ErrorKind::PlaneOutOfRange(plane));
                }
                let bias = plane - 1;
                self.write_digit(0x8 | (bias >> 2))?;
                self.write_digit(((bias & 0x3) << 2) | ((payload >> 2) & 0x3))?;
                Ok(State::LowSurrogate {
                    carry: payload & 0x3,
                })
            }
            State::LowSurrogate { carry } => {
                self.write_digit((carry << 2) | (payload >> 4))?;
                self.write_str(r"\uD")?;
                self.write_digit(0xC | ((payload >> 2) & 0x3))?;
                Ok(State::Tail {
                    carry: payload & 0x3,
                })
            }
            State::ThreeByteMiddle => {
                self.write_digit(payload >> 2)?;
                Ok(State::Tail {
                    carry: payload & 0x3,
                })
            }
            State::Tail { carry } => {
                self.write_digit((carry << 2) | (payload >> 4))?;
                self.write_digit(payload)?;
                Ok(State::Idle)
            }
        }
    }

    #[inline]
    fn write_digit(&mut self, nibble: u8) -> Result<(), ErrorKind> {
        self.write_char(hex_digit(nibble))
    }

    #[inline]
    fn write_char(&mut self, c: char) -> Result<(), ErrorKind> {
        self.output.write_char(c).map_err(|_| ErrorKind::Write)
    }

    #[inline]
    fn write_str(&mut self, s: &str) -> Result<(), ErrorKind> {
        self.output.write_str(s).map_err(|_| ErrorKind::Write)
    }

    fn error(&mut self, kind: ErrorKind) -> EscapeError {
        let err = EscapeError {
            kind,
            offset: self.offset,
        };
        self.failed = Some(err);
        #[cfg(any(test, feature = "fuzzing"))]
        assert!(!self.options.panic_on_error, "{err}");
        err
    }
}
