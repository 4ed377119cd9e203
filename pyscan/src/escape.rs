//! Escape-sequence and string-prefix matching.
//!
//! Both matchers operate on peeks only — they report a length and let
//! the scanner do the consuming, so a failed match costs nothing.
//!
//! Escape grammar (shared by single- and double-quoted literals):
//! - `\` + one of `' " ? \ a b f n r t v` — 2 bytes
//! - `\` + 1–3 octal digits
//! - `\x` + one or more hex digits (unbounded)
//! - `\u` + exactly 4 hex digits, `\U` + exactly 8
//!
//! A `\u`/`\U` whose digit count is not fully hex is rejected outright
//! and left to be scanned as plain literal text.

use pyscan_core::Cursor;

/// Length in bytes of the escape sequence starting at the cursor's
/// backslash, or 0 when the bytes after the backslash form no
/// recognized escape.
///
/// The cursor must sit on the `\` itself; the returned length includes it.
pub(crate) fn match_escape_sequence(cursor: &Cursor<'_>) -> usize {
    match cursor.peek(1) {
        b'\'' | b'"' | b'?' | b'\\' | b'a' | b'b' | b'f' | b'n' | b'r' | b't' | b'v' => 2,
        b'0'..=b'7' => {
            let mut octal_digits = 1;
            for i in 0..2 {
                let next = cursor.peek(2 + i);
                if !(b'0'..=b'7').contains(&next) {
                    break;
                }
                octal_digits += 1;
            }
            1 + octal_digits
        }
        b'x' => {
            let mut hex_digits = 0;
            while cursor.peek(2 + hex_digits).is_ascii_hexdigit() {
                hex_digits += 1;
            }
            if hex_digits == 0 {
                return 0;
            }
            2 + hex_digits
        }
        prefix @ (b'u' | b'U') => {
            let number_of_digits = if prefix == b'u' { 4 } else { 8 };
            for i in 0..number_of_digits {
                if !cursor.peek(2 + i).is_ascii_hexdigit() {
                    return 0;
                }
            }
            2 + number_of_digits
        }
        _ => 0,
    }
}

/// Length of an optional literal prefix (`L`, `u`, `u8`, `U`) plus the
/// quote byte itself, or 0 when the cursor is not at such a literal.
///
/// `quote` is the byte that must follow the prefix — `"` or `'` for
/// quoted literals, `R` when probing for a raw literal (whose own `"`
/// the caller checks one byte further on).
pub(crate) fn match_string_prefix(cursor: &Cursor<'_>, quote: u8) -> usize {
    if cursor.peek(0) == quote {
        return 1;
    }
    if cursor.peek(0) == b'L' && cursor.peek(1) == quote {
        return 2;
    }
    if cursor.peek(0) == b'u' {
        if cursor.peek(1) == quote {
            return 2;
        }
        if cursor.peek(1) == b'8' && cursor.peek(2) == quote {
            return 3;
        }
    }
    if cursor.peek(0) == b'U' && cursor.peek(1) == quote {
        return 2;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor_at(text: &str) -> Cursor<'_> {
        Cursor::new(text)
    }

    #[test]
    fn single_character_escapes_are_two_bytes() {
        for escape in [
            r"\'", "\\\"", r"\?", r"\\", r"\a", r"\b", r"\f", r"\n", r"\r", r"\t", r"\v",
        ] {
            assert_eq!(
                match_escape_sequence(&cursor_at(escape)),
                2,
                "escape {escape:?}"
            );
        }
    }

    #[test]
    fn unrecognized_escape_is_rejected() {
        assert_eq!(match_escape_sequence(&cursor_at(r"\q")), 0);
        assert_eq!(match_escape_sequence(&cursor_at(r"\8")), 0);
        assert_eq!(match_escape_sequence(&cursor_at("\\")), 0);
    }

    #[test]
    fn octal_escapes_take_up_to_three_digits() {
        assert_eq!(match_escape_sequence(&cursor_at(r"\0")), 2);
        assert_eq!(match_escape_sequence(&cursor_at(r"\07")), 3);
        assert_eq!(match_escape_sequence(&cursor_at(r"\077")), 4);
        // Fourth octal digit is not part of the escape
        assert_eq!(match_escape_sequence(&cursor_at(r"\0777")), 4);
        // Non-octal digit stops the run
        assert_eq!(match_escape_sequence(&cursor_at(r"\08")), 2);
    }

    #[test]
    fn hex_escape_is_unbounded_but_needs_a_digit() {
        assert_eq!(match_escape_sequence(&cursor_at(r"\x1")), 3);
        assert_eq!(match_escape_sequence(&cursor_at(r"\x1F")), 4);
        assert_eq!(match_escape_sequence(&cursor_at(r"\xDEADbeef0")), 11);
        // Bare \x is plain text
        assert_eq!(match_escape_sequence(&cursor_at(r"\xg")), 0);
        assert_eq!(match_escape_sequence(&cursor_at(r"\x")), 0);
    }

    #[test]
    fn unicode_escapes_need_exact_digit_counts() {
        assert_eq!(match_escape_sequence(&cursor_at("\\u0041")), 6);
        assert_eq!(match_escape_sequence(&cursor_at(r"\U0001F600")), 10);
        // Short or non-hex digit runs reject the whole sequence
        assert_eq!(match_escape_sequence(&cursor_at(r"\u041")), 0);
        assert_eq!(match_escape_sequence(&cursor_at(r"\u00zz")), 0);
        assert_eq!(match_escape_sequence(&cursor_at(r"\U0001F60")), 0);
    }

    #[test]
    fn extra_digits_after_unicode_are_not_claimed() {
        // \u takes exactly 4 — the fifth digit stays outside the escape
        assert_eq!(match_escape_sequence(&cursor_at("\\u00411")), 6);
    }

    #[test]
    fn bare_quote_is_prefix_length_one() {
        assert_eq!(match_string_prefix(&cursor_at("\"abc\""), b'"'), 1);
        assert_eq!(match_string_prefix(&cursor_at("'c'"), b'\''), 1);
    }

    #[test]
    fn wide_and_unicode_prefixes() {
        assert_eq!(match_string_prefix(&cursor_at("L\"x\""), b'"'), 2);
        assert_eq!(match_string_prefix(&cursor_at("u\"x\""), b'"'), 2);
        assert_eq!(match_string_prefix(&cursor_at("U\"x\""), b'"'), 2);
        assert_eq!(match_string_prefix(&cursor_at("u8\"x\""), b'"'), 3);
    }

    #[test]
    fn raw_literal_probe_uses_r_as_quote() {
        assert_eq!(match_string_prefix(&cursor_at("R\"(x)\""), b'R'), 1);
        assert_eq!(match_string_prefix(&cursor_at("LR\"(x)\""), b'R'), 2);
        assert_eq!(match_string_prefix(&cursor_at("u8R\"(x)\""), b'R'), 3);
    }

    #[test]
    fn identifiers_are_not_prefixes() {
        assert_eq!(match_string_prefix(&cursor_at("u8x"), b'"'), 0);
        assert_eq!(match_string_prefix(&cursor_at("Label"), b'"'), 0);
        assert_eq!(match_string_prefix(&cursor_at("under"), b'"'), 0);
    }
}
