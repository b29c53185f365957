use thiserror::Error;

/// A fatal failure while escaping, together with the byte offset at which it
/// was detected.
///
/// The offset is the zero-based index of the byte that introduced the
/// inconsistency, counted across every chunk fed to the decoder. For
/// [`ErrorKind::UnexpectedEndOfInput`] it is the total number of bytes
/// consumed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("{kind} at byte {offset}")]
pub struct EscapeError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// Where it went wrong.
    pub offset: usize,
}

/// Classification of an [`EscapeError`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A continuation byte (`10xxxxxx`) arrived while no multi-byte sequence
    /// was in progress.
    #[error("unexpected continuation byte 0x{0:02X}")]
    UnexpectedContinuation(u8),
    /// A lead or ASCII byte arrived while a multi-byte sequence still expected
    /// continuation bytes.
    #[error("unexpected byte 0x{byte:02X}, expected {remaining} more continuation byte(s)")]
    UnexpectedLead {
        /// The offending byte.
        byte: u8,
        /// Continuation bytes the interrupted sequence still expected.
        remaining: u8,
    },
    /// A lead byte outside the one- to four-byte UTF-8 forms, such as the
    /// legacy five- and six-byte leads.
    #[error("unsupported lead byte 0x{0:02X}")]
    UnsupportedLead(u8),
    /// A four-byte sequence whose plane is not in `1..=16`, i.e. a code point
    /// that is overlong or beyond U+10FFFF and has no surrogate pair.
    #[error("four-byte sequence encodes plane {0}, expected 1..=16")]
    PlaneOutOfRange(u8),
    /// The input ended in the middle of a multi-byte sequence.
    #[error("unexpected end of input, expected {remaining} more continuation byte(s)")]
    UnexpectedEndOfInput {
        /// Continuation bytes the truncated sequence still expected.
        remaining: u8,
    },
    /// The output sink refused to accept more text.
    #[error("output sink write failed")]
    Write,
}
