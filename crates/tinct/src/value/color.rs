//! Color parser.

use std::sync::LazyLock;

use regex::Regex;

use super::{no_value, TOKEN};
use crate::error::ValueError;
use crate::meta::{ArgKind, ArgValue};
use crate::style::Color;

static ADAPTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*adaptive\s*\(([^,]*),([^,]*)\)(?:\s+|$)").expect("adaptive pattern is valid")
});

/// Parse `adaptive(light,dark)`, `none`, or a plain color code.
pub(super) fn parse_color(rest: &str) -> Result<(usize, ArgValue), ValueError> {
    if let Some(caps) = ADAPTIVE.captures(rest) {
        let light = code(caps[1].trim())?;
        let dark = code(caps[2].trim())?;
        return Ok((caps[0].len(), ArgValue::Color(Color::adaptive(light, dark))));
    }

    let caps = TOKEN
        .captures(rest)
        .ok_or_else(|| no_value(ArgKind::Color, rest))?;
    let color = match &caps[1] {
        "none" => Color::NoColor,
        token => Color::code(code(token)?),
    };
    Ok((caps[0].len(), ArgValue::Color(color)))
}

fn code(token: &str) -> Result<&str, ValueError> {
    if Color::is_code(token) {
        Ok(token)
    } else {
        Err(ValueError::ColorNotRecognized {
            token: token.to_string(),
        })
    }
}
