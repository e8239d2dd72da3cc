//! Integer, boolean and position parsers.

use std::sync::LazyLock;

use regex::Regex;

use super::no_value;
use crate::error::ValueError;
use crate::meta::{ArgKind, ArgValue};
use crate::style::Position;

static INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*([0-9]+)(?:\s+|$)").expect("int pattern is valid"));

static BOOL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(1|[tT]|TRUE|[tT]rue|0|[fF]|FALSE|[fF]alse)(?:\s+|$)")
        .expect("bool pattern is valid")
});

static POSITION_KEYWORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(top|bottom|left|right|center)(?:\s+|$)").expect("position pattern is valid")
});

static POSITION_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:\s+|$)").expect("number pattern is valid")
});

pub(super) fn parse_int(rest: &str) -> Result<(usize, ArgValue), ValueError> {
    let caps = INT
        .captures(rest)
        .ok_or_else(|| no_value(ArgKind::Int, rest))?;
    let literal = &caps[1];
    let value = literal
        .parse::<i128>()
        .map_err(|_| ValueError::IntOutOfRange {
            literal: literal.to_string(),
        })?;
    Ok((caps[0].len(), ArgValue::Int(value)))
}

pub(super) fn parse_bool(rest: &str) -> Result<(usize, ArgValue), ValueError> {
    let caps = BOOL
        .captures(rest)
        .ok_or_else(|| no_value(ArgKind::Bool, rest))?;
    let value = matches!(&caps[1], "1" | "t" | "T" | "TRUE" | "true" | "True");
    Ok((caps[0].len(), ArgValue::Bool(value)))
}

pub(super) fn parse_position(rest: &str) -> Result<(usize, ArgValue), ValueError> {
    if let Some(caps) = POSITION_KEYWORD.captures(rest)
        && let Some(position) = Position::from_keyword(&caps[1])
    {
        return Ok((caps[0].len(), ArgValue::Position(position)));
    }

    let caps = POSITION_NUMBER
        .captures(rest)
        .ok_or_else(|| no_value(ArgKind::Position, rest))?;
    let literal = &caps[1];
    let out_of_range = || ValueError::PositionOutOfRange {
        literal: literal.to_string(),
    };
    let value = literal.parse::<f64>().map_err(|_| out_of_range())?;
    let position = Position::new(value).ok_or_else(out_of_range)?;
    Ok((caps[0].len(), ArgValue::Position(position)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int() {
        assert_eq!(parse_int("22"), Ok((2, ArgValue::Int(22))));
        assert_eq!(parse_int(" 0 "), Ok((3, ArgValue::Int(0))));
        assert_eq!(
            parse_int("18446744073709551615"),
            Ok((20, ArgValue::Int(18_446_744_073_709_551_615)))
        );
        assert_eq!(
            parse_int("999999999999999999999999999999999999999"),
            Err(ValueError::IntOutOfRange {
                literal: "999999999999999999999999999999999999999".into()
            })
        );
        assert!(parse_int("-1").is_err());
    }

    #[test]
    fn test_bool_spellings() {
        for spelling in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(spelling), Ok((spelling.len(), ArgValue::Bool(true))));
        }
        for spelling in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(spelling), Ok((spelling.len(), ArgValue::Bool(false))));
        }
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("tRUE").is_err());
    }

    #[test]
    fn test_position() {
        assert_eq!(parse_position("center"), Ok((6, ArgValue::Position(Position::CENTER))));
        assert_eq!(parse_position("right "), Ok((6, ArgValue::Position(Position::RIGHT))));
        assert_eq!(parse_position("0.25"), Ok((4, ArgValue::Position(Position(0.25)))));
        assert_eq!(parse_position(".5"), Ok((2, ArgValue::Position(Position(0.5)))));
        assert_eq!(parse_position("1"), Ok((1, ArgValue::Position(Position(1.0)))));
        assert_eq!(
            parse_position("1.5"),
            Err(ValueError::PositionOutOfRange {
                literal: "1.5".into()
            })
        );
        assert!(parse_position("middle").is_err());
    }
}
