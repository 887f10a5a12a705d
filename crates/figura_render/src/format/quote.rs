//! Double-quoted string literals with Go escapes.

use alloc::string::String;
use core::fmt::Write;

/// Appends `s` as a double-quoted literal.
///
/// Printable characters are kept, `\a \b \f \n \r \t \v \\ \"` use their
/// short escapes, other characters below `0x80` are `\xHH`, the remaining
/// ones `\uHHHH` or `\UHHHHHHHH`.
pub(crate) fn write_quoted(out: &mut String, s: &str) {
    out.reserve(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            c if is_print(c) => out.push(c),
            '\u{07}' => out.push_str("\\a"),
            '\u{08}' => out.push_str("\\b"),
            '\u{0C}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{0B}' => out.push_str("\\v"),
            c if c < ' ' || c == '\u{7F}' => {
                let _ = write!(out, "\\x{:02x}", u32::from(c));
            }
            c if u32::from(c) < 0x1_0000 => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => {
                let _ = write!(out, "\\U{:08x}", u32::from(c));
            }
        }
    }
    out.push('"');
}

/// Letters, marks, numbers, punctuation, symbols and the ASCII space.
///
/// Approximated as everything that is neither a control character, nor
/// whitespace other than `' '`, nor an invisible format or private-use
/// character.
fn is_print(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_graphic() || c == ' ';
    }
    !(c.is_control() || c.is_whitespace() || is_format(c))
}

fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{AD}'
            | '\u{600}'..='\u{605}'
            | '\u{61C}'
            | '\u{6DD}'
            | '\u{70F}'
            | '\u{180E}'
            | '\u{200B}'..='\u{200F}'
            | '\u{202A}'..='\u{202E}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206F}'
            | '\u{FEFF}'
            | '\u{FFF9}'..='\u{FFFB}'
            | '\u{E000}'..='\u{F8FF}'
            | '\u{F0000}'..='\u{10FFFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::write_quoted;

    fn quote(s: &str) -> String {
        let mut out = String::new();
        write_quoted(&mut out, s);
        out
    }

    #[test]
    fn plain() {
        assert_eq!(quote(""), r#""""#);
        assert_eq!(quote("some string"), r#""some string""#);
        assert_eq!(quote("héllo, 世界"), r#""héllo, 世界""#);
    }

    #[test]
    fn short_escapes() {
        assert_eq!(quote("a\"b\\c"), r#""a\"b\\c""#);
        assert_eq!(quote("\n\r\t"), r#""\n\r\t""#);
        assert_eq!(quote("\u{7}\u{8}\u{c}\u{b}"), r#""\a\b\f\v""#);
    }

    #[test]
    fn hex_escapes() {
        assert_eq!(quote("\0"), r#""\x00""#);
        assert_eq!(quote("\u{1b}[0m"), r#""\x1b[0m""#);
        assert_eq!(quote("\u{7f}"), r#""\x7f""#);
        assert_eq!(quote("\u{85}"), r#""\u0085""#);
        assert_eq!(quote("\u{a0}"), r#""\u00a0""#);
        assert_eq!(quote("\u{feff}"), r#""\ufeff""#);
        assert_eq!(quote("\u{f0000}"), r#""\U000f0000""#);
    }
}

