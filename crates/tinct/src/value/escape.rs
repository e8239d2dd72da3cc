//! Quoted string decoding and encoding for border fields.
//!
//! The escape grammar is the familiar double-quoted one: `\\`, `\"`, `\'`,
//! the single-letter controls `\a \b \f \n \r \t \v`, three-digit octal bytes
//! (`\101`), two-digit hex bytes (`\x41`), and four- or eight-digit code
//! points (`\u0041`, `\U00000041`). Byte escapes may combine into multi-byte
//! UTF-8 sequences; the decoded field must be valid UTF-8.

use crate::error::EscapeError;

/// Decode a quoted string at the start of `input`.
///
/// Returns the number of bytes consumed, including both quotes, and the
/// decoded text.
///
/// # Example
///
/// ```
/// use tinct::value::escape::unquote;
///
/// assert_eq!(unquote(r#""\x41\u00e9" rest"#), Ok((12, "Aé".to_string())));
/// ```
pub fn unquote(input: &str) -> Result<(usize, String), EscapeError> {
    let bytes = input.as_bytes();
    if bytes.first() != Some(&b'"') {
        return Err(EscapeError::Unterminated);
    }

    let mut out = Vec::with_capacity(input.len());
    let mut index = 1;
    loop {
        match bytes.get(index) {
            None => return Err(EscapeError::Unterminated),
            Some(b'"') => {
                let text = String::from_utf8(out).map_err(|_| EscapeError::InvalidUtf8)?;
                return Ok((index + 1, text));
            }
            Some(b'\\') => index += decode_escape(&input[index..], &mut out)?,
            Some(&byte) => {
                out.push(byte);
                index += 1;
            }
        }
    }
}

/// Decode one escape sequence at the start of `s`, appending its bytes.
fn decode_escape(s: &str, out: &mut Vec<u8>) -> Result<usize, EscapeError> {
    let Some(letter) = s[1..].chars().next() else {
        return Err(EscapeError::Unterminated);
    };

    let simple = match letter {
        '\\' => Some(b'\\'),
        '"' => Some(b'"'),
        '\'' => Some(b'\''),
        'a' => Some(0x07),
        'b' => Some(0x08),
        'f' => Some(0x0c),
        'n' => Some(b'\n'),
        'r' => Some(b'\r'),
        't' => Some(b'\t'),
        'v' => Some(0x0b),
        _ => None,
    };
    if let Some(byte) = simple {
        out.push(byte);
        return Ok(2);
    }

    match letter {
        '0'..='7' => {
            let value = digits(s, 1, 3, 8).ok_or_else(|| invalid(s, 4))?;
            let byte = u8::try_from(value).map_err(|_| invalid(s, 4))?;
            out.push(byte);
            Ok(4)
        }
        'x' => {
            let value = digits(s, 2, 2, 16).ok_or_else(|| invalid(s, 4))?;
            out.push(value as u8);
            Ok(4)
        }
        'u' | 'U' => {
            let count = if letter == 'u' { 4 } else { 8 };
            let value = digits(s, 2, count, 16).ok_or_else(|| invalid(s, count + 2))?;
            let c = char::from_u32(value).ok_or(EscapeError::InvalidCodePoint { value })?;
            let mut buf = [0; 4];
            out.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            Ok(count + 2)
        }
        _ => Err(invalid(s, 2)),
    }
}

/// Parse `count` digits in `radix` starting at byte `start`.
fn digits(s: &str, start: usize, count: usize, radix: u32) -> Option<u32> {
    let digits = s.get(start..start + count)?;
    if !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}

fn invalid(s: &str, len: usize) -> EscapeError {
    EscapeError::InvalidEscape {
        sequence: s.chars().take(len).collect(),
    }
}

/// Quote a string so that [`unquote`] returns it unchanged.
///
/// Printable characters are kept verbatim. Quotes, backslashes, control and
/// format characters are escaped, using `\xNN` below `0x80` and `\uNNNN` or
/// `\UNNNNNNNN` above. `;` is written as `\x3b` so a quoted field never
/// ends a directive.
pub fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\x07' => out.push_str("\\a"),
            '\x08' => out.push_str("\\b"),
            '\x0c' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\x0b' => out.push_str("\\v"),
            ';' => out.push_str("\\x3b"),
            c if is_printable(c) => out.push(c),
            c => {
                let value = u32::from(c);
                let escaped = match value {
                    0..0x80 => format!("\\x{value:02x}"),
                    0x80..0x10000 => format!("\\u{value:04x}"),
                    _ => format!("\\U{value:08x}"),
                };
                out.push_str(&escaped);
            }
        }
    }
    out.push('"');
    out
}

fn is_printable(c: char) -> bool {
    c == ' ' || !(c.is_control() || c.is_whitespace() || is_format(c) || is_private_use(c))
}

/// Unicode general category Cf.
fn is_format(c: char) -> bool {
    matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{890}'..='\u{891}'
            | '\u{8e2}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{110bd}'
            | '\u{110cd}'
            | '\u{13430}'..='\u{1343f}'
            | '\u{1bca0}'..='\u{1bca3}'
            | '\u{1d173}'..='\u{1d17a}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    )
}

/// Unicode general category Co.
fn is_private_use(c: char) -> bool {
    matches!(
        c,
        '\u{e000}'..='\u{f8ff}' | '\u{f0000}'..='\u{ffffd}' | '\u{100000}'..='\u{10fffd}'
    )
}
