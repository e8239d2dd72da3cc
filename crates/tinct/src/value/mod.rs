//! Argument value parsers.
//!
//! Every parser follows the same cursor contract: starting at a byte
//! position, skip leading whitespace, match one value of its kind, then
//! consume one trailing whitespace run or the end of input. On success the
//! parser returns the new position and the value. A failure is final for the
//! enclosing directive; parsers never backtrack into a different kind.
//!
//! # Example
//!
//! ```
//! use tinct::meta::{ArgKind, ArgValue};
//!
//! let input = "12 true";
//! let (pos, width) = ArgKind::Int.parse(input, 0)?;
//! let (end, flag) = ArgKind::Bool.parse(input, pos)?;
//! assert_eq!(width, ArgValue::Int(12));
//! assert_eq!(flag, ArgValue::Bool(true));
//! assert_eq!(end, input.len());
//! # Ok::<(), tinct::ValueError>(())
//! ```

mod border;
mod color;
pub mod escape;
mod scalar;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValueError;
use crate::meta::{ArgKind, ArgValue};

/// First whitespace-delimited token, used to name bad input in errors.
static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(\S+)(?:\s+|$)").expect("token pattern is valid"));

impl ArgKind {
    /// Parse one value of this kind from `input` at byte position `pos`.
    pub fn parse(self, input: &str, pos: usize) -> Result<(usize, ArgValue), ValueError> {
        let rest = input.get(pos..).unwrap_or_default();
        let (consumed, value) = match self {
            ArgKind::Int => scalar::parse_int(rest)?,
            ArgKind::Bool => scalar::parse_bool(rest)?,
            ArgKind::Position => scalar::parse_position(rest)?,
            ArgKind::Color => color::parse_color(rest)?,
            ArgKind::Border => border::parse_border(rest)?,
        };
        Ok((pos + consumed, value))
    }
}

/// The error for input that does not start with a value of `expected`.
fn no_value(expected: ArgKind, rest: &str) -> ValueError {
    let found = TOKEN
        .captures(rest)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default();
    ValueError::NoValue { expected, found }
}
