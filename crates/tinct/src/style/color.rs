//! Terminal colors.

use std::fmt;

/// A terminal color.
///
/// Codes are kept verbatim: a palette index such as `"12"` or a hex triplet
/// such as `"#7D56F4"`. Rendering a code for a particular terminal profile
/// happens elsewhere.
///
/// # Example
///
/// ```
/// use tinct::Color;
///
/// let accent = Color::adaptive("#333", "#EEE");
/// assert_eq!(accent.to_string(), "adaptive(#333,#EEE)");
/// assert_eq!(Color::default().to_string(), "none");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// No color set.
    #[default]
    NoColor,
    /// A palette index or hex triplet.
    Code(String),
    /// A pair of codes chosen by the terminal's background.
    Adaptive { light: String, dark: String },
}

impl Color {
    /// Create a plain color from a code.
    pub fn code(code: impl Into<String>) -> Self {
        Self::Code(code.into())
    }

    /// Create an adaptive color.
    pub fn adaptive(light: impl Into<String>, dark: impl Into<String>) -> Self {
        Self::Adaptive {
            light: light.into(),
            dark: dark.into(),
        }
    }

    /// Check if no color is set.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::NoColor)
    }

    /// Check whether a token is a palette index or a 3- or 6-digit hex triplet.
    pub fn is_code(token: &str) -> bool {
        if let Some(hex) = token.strip_prefix('#') {
            (hex.len() == 3 || hex.len() == 6) && hex.bytes().all(|b| b.is_ascii_hexdigit())
        } else {
            !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColor => f.write_str("none"),
            Self::Code(code) => f.write_str(code),
            Self::Adaptive { light, dark } => write!(f, "adaptive({light},{dark})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_code() {
        assert!(Color::is_code("0"));
        assert!(Color::is_code("255"));
        assert!(Color::is_code("#abc"));
        assert!(Color::is_code("#7D56F4"));
        assert!(!Color::is_code("#abcd"));
        assert!(!Color::is_code("#axxa"));
        assert!(!Color::is_code("red"));
        assert!(!Color::is_code(""));
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::code("#FAFAFA").to_string(), "#FAFAFA");
        assert_eq!(Color::adaptive("1", "2").to_string(), "adaptive(1,2)");
    }
}
