//! Fractional alignment positions.

use std::fmt;

/// A fractional position along an axis, from `0.0` (top or left) to `1.0`
/// (bottom or right).
///
/// # Example
///
/// ```
/// use tinct::Position;
///
/// assert_eq!(Position::CENTER.value(), 0.5);
/// assert_eq!(Position::from_keyword("bottom"), Some(Position::BOTTOM));
/// assert_eq!(Position::RIGHT.to_string(), "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Position(pub f64);

impl Position {
    pub const TOP: Self = Self(0.0);
    pub const BOTTOM: Self = Self(1.0);
    pub const CENTER: Self = Self(0.5);
    pub const LEFT: Self = Self(0.0);
    pub const RIGHT: Self = Self(1.0);

    /// Create a position, or `None` when outside `[0, 1]`.
    pub fn new(value: f64) -> Option<Self> {
        (0.0..=1.0).contains(&value).then_some(Self(value))
    }

    /// The fractional value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Parse a symbolic keyword.
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "top" => Some(Self::TOP),
            "bottom" => Some(Self::BOTTOM),
            "center" => Some(Self::CENTER),
            "left" => Some(Self::LEFT),
            "right" => Some(Self::RIGHT),
            _ => None,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range() {
        assert_eq!(Position::new(0.25), Some(Position(0.25)));
        assert_eq!(Position::new(1.5), None);
        assert_eq!(Position::new(-0.1), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::TOP.to_string(), "0");
        assert_eq!(Position::CENTER.to_string(), "0.5");
        assert_eq!(Position(0.25).to_string(), "0.25");
    }
}
