//! Border glyph sets.

use std::fmt;

use unicode_width::UnicodeWidthStr;

use crate::value::escape::quote;

/// The glyphs drawn on each edge and corner of a border.
///
/// Field order matches the `border(...)` directive form: top, bottom, left,
/// right, top-left, top-right, bottom-right, bottom-left.
///
/// # Example
///
/// ```
/// use tinct::Border;
///
/// let border = Border::rounded();
/// assert_eq!(border.top_left, "╭");
/// assert_eq!(Border::preset("thick"), Some(Border::thick()));
/// assert_eq!(Border::preset("dotted"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Border {
    pub top: String,
    pub bottom: String,
    pub left: String,
    pub right: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_right: String,
    pub bottom_left: String,
}

/// Names of the built-in presets.
pub const PRESET_NAMES: [&str; 5] = ["normal", "rounded", "thick", "double", "hidden"];

impl Border {
    /// Create a border from its eight glyphs in directive order.
    pub fn from_fields(fields: [String; 8]) -> Self {
        let [top, bottom, left, right, top_left, top_right, bottom_right, bottom_left] = fields;
        Self {
            top,
            bottom,
            left,
            right,
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// The eight glyphs in directive order.
    pub fn fields(&self) -> [&str; 8] {
        [
            self.top.as_str(),
            self.bottom.as_str(),
            self.left.as_str(),
            self.right.as_str(),
            self.top_left.as_str(),
            self.top_right.as_str(),
            self.bottom_right.as_str(),
            self.bottom_left.as_str(),
        ]
    }

    fn from_glyphs(glyphs: [&str; 8]) -> Self {
        Self::from_fields(glyphs.map(str::to_string))
    }

    /// A standard border with square corners.
    pub fn normal() -> Self {
        Self::from_glyphs(["─", "─", "│", "│", "┌", "┐", "┘", "└"])
    }

    /// A border with rounded corners.
    pub fn rounded() -> Self {
        Self::from_glyphs(["─", "─", "│", "│", "╭", "╮", "╯", "╰"])
    }

    /// A border drawn with heavy lines.
    pub fn thick() -> Self {
        Self::from_glyphs(["━", "━", "┃", "┃", "┏", "┓", "┛", "┗"])
    }

    /// A border drawn with double lines.
    pub fn double() -> Self {
        Self::from_glyphs(["═", "═", "║", "║", "╔", "╗", "╝", "╚"])
    }

    /// A border of spaces, occupying room without drawing anything.
    pub fn hidden() -> Self {
        Self::from_glyphs([" "; 8])
    }

    /// Look up a preset by name.
    pub fn preset(name: &str) -> Option<Self> {
        match name {
            "normal" => Some(Self::normal()),
            "rounded" => Some(Self::rounded()),
            "thick" => Some(Self::thick()),
            "double" => Some(Self::double()),
            "hidden" => Some(Self::hidden()),
            _ => None,
        }
    }

    /// Display width of the top edge, including its corners.
    pub fn top_size(&self) -> usize {
        edge_width([self.top_left.as_str(), self.top.as_str(), self.top_right.as_str()])
    }

    /// Display width of the right edge, including its corners.
    pub fn right_size(&self) -> usize {
        edge_width([self.top_right.as_str(), self.right.as_str(), self.bottom_right.as_str()])
    }

    /// Display width of the bottom edge, including its corners.
    pub fn bottom_size(&self) -> usize {
        edge_width([self.bottom_left.as_str(), self.bottom.as_str(), self.bottom_right.as_str()])
    }

    /// Display width of the left edge, including its corners.
    pub fn left_size(&self) -> usize {
        edge_width([self.top_left.as_str(), self.left.as_str(), self.bottom_left.as_str()])
    }
}

fn edge_width(glyphs: [&str; 3]) -> usize {
    glyphs.iter().map(|g| g.width()).max().unwrap_or(0)
}

/// Renders the explicit `border("..", ..)` form with quoted fields.
impl fmt::Display for Border {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("border(")?;
        for (index, field) in self.fields().iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            f.write_str(&quote(field))?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        for name in PRESET_NAMES {
            let border = Border::preset(name).unwrap();
            assert!(border.fields().iter().all(|g| !g.is_empty()), "{name}");
        }
        assert_eq!(Border::normal().bottom_right, "┘");
        assert_eq!(Border::double().bottom_left, "╚");
    }

    #[test]
    fn test_edge_sizes() {
        assert_eq!(Border::normal().top_size(), 1);
        assert_eq!(Border::hidden().left_size(), 1);
        assert_eq!(Border::default().right_size(), 0);

        let mut wide = Border::default();
        wide.bottom = "＝".into();
        assert_eq!(wide.bottom_size(), 2);
        assert_eq!(wide.top_size(), 0);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            Border::hidden().to_string(),
            r#"border(" "," "," "," "," "," "," "," ")"#
        );
        let mut quoted = Border::default();
        quoted.top = "\"".into();
        assert!(quoted.to_string().starts_with(r#"border("\"","""#));
    }
}
