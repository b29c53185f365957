/// Converts the low four bits of `nibble` into an uppercase ASCII hex digit.
///
/// Bits above the low nibble are ignored, so callers can pass shifted values
/// without masking first.
///
/// ```rust
/// assert_eq!(uescape::hex_digit(0x9), '9');
/// assert_eq!(uescape::hex_digit(0xA), 'A');
/// assert_eq!(uescape::hex_digit(0x3F), 'F');
/// ```
#[inline]
#[must_use]
pub fn hex_digit(nibble: u8) -> char {
    let n = nibble & 0xF;
    if n <= 9 {
        (b'0' + n) as char
    } else {
        (b'A' - 10 + n) as char
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use super::hex_digit;

    #[test]
    fn all_nibbles() {
        let digits: String = (0..16).map(hex_digit).collect();
        assert_eq!(digits, "0123456789ABCDEF");
    }

    #[test]
    fn high_bits_ignored() {
        assert_eq!(hex_digit(0xF0), '0');
        assert_eq!(hex_digit(0x1C), 'C');
    }
}
