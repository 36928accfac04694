//! Byte classification helpers.
//!
//! Everything the scanner branches on is a single byte; multi-byte UTF-8
//! sequences are only ever skipped whole, never decoded.

/// Identifier continuation characters: `[A-Za-z0-9_$]`.
const IDENT_CHAR: [bool; 256] = build_ident_table();

const fn build_ident_table() -> [bool; 256] {
    let mut table = [false; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        table[i] = b.is_ascii_alphanumeric() || b == b'_' || b == b'$';
        i += 1;
    }
    table
}

/// Space, tab, vertical tab, or form feed. Newlines are not included;
/// they produce their own trivia kind.
#[inline]
pub(crate) fn is_horizontal_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | 0x0B | 0x0C)
}

#[inline]
pub(crate) fn is_newline(b: u8) -> bool {
    matches!(b, b'\r' | b'\n')
}

#[inline]
pub(crate) fn is_ident_char(b: u8) -> bool {
    IDENT_CHAR[b as usize]
}

/// First character of a plain identifier: letter or underscore.
#[inline]
pub(crate) fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

#[inline]
pub(crate) fn is_decimal_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

#[inline]
pub(crate) fn is_octal_digit(b: u8) -> bool {
    matches!(b, b'0'..=b'7')
}

#[inline]
pub(crate) fn is_binary_digit(b: u8) -> bool {
    matches!(b, b'0' | b'1')
}

#[inline]
pub(crate) fn is_hex_digit(b: u8) -> bool {
    b.is_ascii_hexdigit()
}

/// Numeric value of a hex digit. Caller guarantees `is_hex_digit(b)`;
/// anything else maps to zero.
#[inline]
pub(crate) fn hex_digit_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    }
}

#[inline]
pub(crate) fn decimal_digit_value(b: u8) -> u8 {
    b.wrapping_sub(b'0')
}

/// Printable ASCII, excluding space.
#[inline]
pub(crate) fn is_printable_non_whitespace(b: u8) -> bool {
    (0x21..=0x7E).contains(&b)
}

/// UTF-8 continuation byte. Multi-byte sequences are skipped whole when
/// they appear outside strings and comments.
#[inline]
pub(crate) fn is_utf8_continuation(b: u8) -> bool {
    (0x80..0xC0).contains(&b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_chars() {
        assert!(is_ident_char(b'a'));
        assert!(is_ident_char(b'Z'));
        assert!(is_ident_char(b'0'));
        assert!(is_ident_char(b'_'));
        assert!(is_ident_char(b'$'));
        assert!(!is_ident_char(b'-'));
        assert!(!is_ident_char(0));
        assert!(!is_ident_start(b'5'));
        assert!(!is_ident_start(b'$'));
        assert!(is_ident_start(b'_'));
    }

    #[test]
    fn digit_classes() {
        assert!(is_binary_digit(b'1') && !is_binary_digit(b'2'));
        assert!(is_octal_digit(b'7') && !is_octal_digit(b'8'));
        assert!(is_hex_digit(b'f') && is_hex_digit(b'F') && !is_hex_digit(b'g'));
    }

    #[test]
    fn digit_values() {
        assert_eq!(hex_digit_value(b'a'), 10);
        assert_eq!(hex_digit_value(b'F'), 15);
        assert_eq!(decimal_digit_value(b'9'), 9);
    }

    #[test]
    fn whitespace_classes() {
        assert!(is_horizontal_whitespace(b'\t'));
        assert!(is_horizontal_whitespace(0x0C));
        assert!(!is_horizontal_whitespace(b'\n'));
        assert!(is_newline(b'\r'));
    }

    #[test]
    fn utf8_continuation_bytes() {
        assert!(is_utf8_continuation(0xA9));
        assert!(!is_utf8_continuation(0xC3));
        assert!(!is_utf8_continuation(b'a'));
    }
}
