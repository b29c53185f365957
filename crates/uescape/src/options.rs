/// Configuration options for [`MultiByteDecoder`](crate::MultiByteDecoder)
/// and the [`escape`](crate::escape) family of functions.
///
/// # Examples
///
/// ```rust
/// use uescape::{escape_with, EscapeOptions};
///
/// let options = EscapeOptions {
///     stop_at_nul: true,
///     ..Default::default()
/// };
/// assert_eq!(escape_with(b"ab\0cd", options).unwrap(), "ab");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EscapeOptions {
    /// Whether a NUL byte terminates the input.
    ///
    /// When `true`, the decoder treats the first `0x00` byte as the end of
    /// the string, the way a C string is terminated, and ignores every byte
    /// after it, including those in later chunks. When `false`, NUL is an
    /// ordinary ASCII byte and is passed through.
    ///
    /// # Default
    ///
    /// `false`
    pub stop_at_nul: bool,

    /// Whether input may end in the middle of a multi-byte sequence.
    ///
    /// By default, finishing a decoder that still expects continuation bytes
    /// is an [`ErrorKind::UnexpectedEndOfInput`](crate::ErrorKind) error.
    /// Enabling this accepts the truncated tail; whatever part of its escape
    /// was already written stays in the output, unterminated.
    ///
    /// # Default
    ///
    /// `false`
    pub allow_truncated_input: bool,

    #[cfg(any(test, feature = "fuzzing"))]
    #[cfg_attr(feature = "serde", serde(skip))]
    /// Panic on malformed input instead of returning an error.
    ///
    /// Enabled only in test and fuzzing builds to produce backtraces.
    pub panic_on_error: bool,
}
