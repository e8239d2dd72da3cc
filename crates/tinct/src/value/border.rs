//! Border parser.
//!
//! A border is either a preset name (`rounded`) or the explicit form
//! `border("t","b","l","r","tl","tr","br","bl")` with eight quoted fields.

use std::sync::LazyLock;

use regex::Regex;

use super::escape::unquote;
use super::no_value;
use crate::error::ValueError;
use crate::meta::{ArgKind, ArgValue};
use crate::style::Border;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([A-Za-z]+)(?:\s+|$)").expect("word pattern is valid"));

static OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*border\s*\(").expect("border pattern is valid"));

static END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:\s+|$)").expect("end pattern is valid"));

pub(super) fn parse_border(rest: &str) -> Result<(usize, ArgValue), ValueError> {
    if let Some(caps) = WORD.captures(rest)
        && &caps[1] != "border"
    {
        let border = Border::preset(&caps[1]).ok_or_else(|| ValueError::UnknownBorder {
            token: caps[1].to_string(),
        })?;
        return Ok((caps[0].len(), ArgValue::Border(border)));
    }

    let open = OPEN
        .find(rest)
        .ok_or_else(|| no_value(ArgKind::Border, rest))?;
    let malformed = || ValueError::NoBorder {
        found: rest.trim().to_string(),
    };

    let mut cursor = open.end();
    let mut fields: [String; 8] = Default::default();
    for (index, field) in fields.iter_mut().enumerate() {
        cursor = skip_whitespace(rest, cursor);
        if index > 0 {
            cursor = expect(rest, cursor, ',').ok_or_else(malformed)?;
            cursor = skip_whitespace(rest, cursor);
        }
        if !rest[cursor..].starts_with('"') {
            return Err(malformed());
        }
        let (consumed, text) = unquote(&rest[cursor..])?;
        cursor += consumed;
        *field = text;
    }
    cursor = skip_whitespace(rest, cursor);
    cursor = expect(rest, cursor, ')').ok_or_else(malformed)?;

    let end = END.find(&rest[cursor..]).ok_or_else(malformed)?;
    Ok((cursor + end.end(), ArgValue::Border(Border::from_fields(fields))))
}

fn skip_whitespace(s: &str, from: usize) -> usize {
    let tail = &s[from..];
    from + (tail.len() - tail.trim_start().len())
}

fn expect(s: &str, at: usize, c: char) -> Option<usize> {
    s[at..].starts_with(c).then_some(at + c.len_utf8())
}
