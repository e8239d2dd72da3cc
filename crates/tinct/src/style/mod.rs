//! The style value and its capability surface.
//!
//! [`Style`] is an immutable-per-operation bundle of terminal attributes.
//! Every setter consumes the style and returns the updated value, so a style
//! is built the same way whether the calls come from Rust code or from
//! imported directives:
//!
//! ```
//! use tinct::{Color, Style};
//!
//! let style = Style::new()
//!     .bold(true)
//!     .foreground(Color::code("#FAFAFA"))
//!     .padding(&[2, 4]);
//!
//! assert_eq!(style.get_padding_top(), 2);
//! assert_eq!(style.get_padding_left(), 4);
//! ```
//!
//! The `impl` block carrying the operations is annotated with
//! `#[style_surface]`, which publishes every setter, unsetter and getter to
//! the property registry.

mod border;
mod color;
mod position;
mod sides;

pub use border::{Border, PRESET_NAMES};
pub use color::Color;
pub use position::Position;
pub use sides::Sides;

use tinct_macros::style_surface;

/// Terminal style attributes.
///
/// Two styles are equal when every attribute is equal.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    // Text decoration
    bold: bool,
    italic: bool,
    underline: bool,
    strikethrough: bool,
    reverse: bool,
    blink: bool,
    faint: bool,
    underline_spaces: bool,
    strikethrough_spaces: bool,
    color_whitespace: bool,
    inline: bool,

    // Colors
    foreground: Color,
    background: Color,
    margin_background: Color,

    // Size
    width: usize,
    height: usize,
    max_width: usize,
    max_height: usize,

    // Box model
    padding: Sides<usize>,
    margin: Sides<usize>,

    // Alignment
    align: Position,
    align_vertical: Position,

    // Border
    border_style: Border,
    border_sides: Sides<bool>,
    border_foreground: Sides<Color>,
    border_background: Sides<Color>,
}

/// Copy `src` into `dst` when `dst` is unset and `src` is set.
fn inherit_field<T: Clone + Default + PartialEq>(dst: &mut T, src: &T) {
    let default = T::default();
    if *dst == default && *src != default {
        *dst = src.clone();
    }
}

#[style_surface]
impl Style {
    /// Create a style with every attribute unset.
    pub fn new() -> Self {
        Self::default()
    }

    // === Text Decoration ===

    /// Set bold text.
    pub fn bold(mut self, v: bool) -> Self {
        self.bold = v;
        self
    }

    /// Clear the bold attribute.
    pub fn unset_bold(mut self) -> Self {
        self.bold = false;
        self
    }

    /// Whether text is bold.
    pub fn get_bold(&self) -> bool {
        self.bold
    }

    /// Set italic text.
    pub fn italic(mut self, v: bool) -> Self {
        self.italic = v;
        self
    }

    pub fn unset_italic(mut self) -> Self {
        self.italic = false;
        self
    }

    pub fn get_italic(&self) -> bool {
        self.italic
    }

    /// Set underlined text.
    pub fn underline(mut self, v: bool) -> Self {
        self.underline = v;
        self
    }

    pub fn unset_underline(mut self) -> Self {
        self.underline = false;
        self
    }

    pub fn get_underline(&self) -> bool {
        self.underline
    }

    /// Set strikethrough text.
    pub fn strikethrough(mut self, v: bool) -> Self {
        self.strikethrough = v;
        self
    }

    pub fn unset_strikethrough(mut self) -> Self {
        self.strikethrough = false;
        self
    }

    pub fn get_strikethrough(&self) -> bool {
        self.strikethrough
    }

    /// Swap foreground and background colors.
    pub fn reverse(mut self, v: bool) -> Self {
        self.reverse = v;
        self
    }

    pub fn unset_reverse(mut self) -> Self {
        self.reverse = false;
        self
    }

    pub fn get_reverse(&self) -> bool {
        self.reverse
    }

    /// Set blinking text.
    pub fn blink(mut self, v: bool) -> Self {
        self.blink = v;
        self
    }

    pub fn unset_blink(mut self) -> Self {
        self.blink = false;
        self
    }

    pub fn get_blink(&self) -> bool {
        self.blink
    }

    /// Set faint (dim) text.
    pub fn faint(mut self, v: bool) -> Self {
        self.faint = v;
        self
    }

    pub fn unset_faint(mut self) -> Self {
        self.faint = false;
        self
    }

    pub fn get_faint(&self) -> bool {
        self.faint
    }

    /// Underline spaces between words as well as the words.
    pub fn underline_spaces(mut self, v: bool) -> Self {
        self.underline_spaces = v;
        self
    }

    pub fn unset_underline_spaces(mut self) -> Self {
        self.underline_spaces = false;
        self
    }

    pub fn get_underline_spaces(&self) -> bool {
        self.underline_spaces
    }

    /// Strike through spaces between words as well as the words.
    pub fn strikethrough_spaces(mut self, v: bool) -> Self {
        self.strikethrough_spaces = v;
        self
    }

    pub fn unset_strikethrough_spaces(mut self) -> Self {
        self.strikethrough_spaces = false;
        self
    }

    pub fn get_strikethrough_spaces(&self) -> bool {
        self.strikethrough_spaces
    }

    /// Apply the background color to whitespace around the text.
    pub fn color_whitespace(mut self, v: bool) -> Self {
        self.color_whitespace = v;
        self
    }

    pub fn unset_color_whitespace(mut self) -> Self {
        self.color_whitespace = false;
        self
    }

    pub fn get_color_whitespace(&self) -> bool {
        self.color_whitespace
    }

    /// Render on a single line, ignoring margins, padding and borders.
    pub fn inline(mut self, v: bool) -> Self {
        self.inline = v;
        self
    }

    pub fn unset_inline(mut self) -> Self {
        self.inline = false;
        self
    }

    pub fn get_inline(&self) -> bool {
        self.inline
    }

    // === Colors ===

    /// Set the foreground (text) color.
    pub fn foreground(mut self, color: Color) -> Self {
        self.foreground = color;
        self
    }

    pub fn unset_foreground(mut self) -> Self {
        self.foreground = Color::NoColor;
        self
    }

    /// The foreground color, or [`Color::NoColor`] when unset.
    pub fn get_foreground(&self) -> Color {
        self.foreground.clone()
    }

    /// Set the background color.
    pub fn background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn unset_background(mut self) -> Self {
        self.background = Color::NoColor;
        self
    }

    pub fn get_background(&self) -> Color {
        self.background.clone()
    }

    /// Set the color drawn behind margins.
    pub fn margin_background(mut self, color: Color) -> Self {
        self.margin_background = color;
        self
    }

    pub fn unset_margin_background(mut self) -> Self {
        self.margin_background = Color::NoColor;
        self
    }

    pub fn get_margin_background(&self) -> Color {
        self.margin_background.clone()
    }

    // === Size ===

    /// Set the content width, in cells.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn unset_width(mut self) -> Self {
        self.width = 0;
        self
    }

    /// The content width; `0` means unconstrained.
    pub fn get_width(&self) -> usize {
        self.width
    }

    /// Set the content height, in lines.
    pub fn height(mut self, height: usize) -> Self {
        self.height = height;
        self
    }

    pub fn unset_height(mut self) -> Self {
        self.height = 0;
        self
    }

    pub fn get_height(&self) -> usize {
        self.height
    }

    /// Truncate rendered output to at most this many cells.
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    pub fn unset_max_width(mut self) -> Self {
        self.max_width = 0;
        self
    }

    pub fn get_max_width(&self) -> usize {
        self.max_width
    }

    /// Truncate rendered output to at most this many lines.
    pub fn max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }

    pub fn unset_max_height(mut self) -> Self {
        self.max_height = 0;
        self
    }

    pub fn get_max_height(&self) -> usize {
        self.max_height
    }

    // === Padding ===

    /// Set padding with CSS shorthand.
    ///
    /// One value applies to every side; two are vertical then horizontal;
    /// three are top, horizontal, bottom; four are top, right, bottom, left.
    /// Any other count leaves the style unchanged.
    pub fn padding(mut self, values: &[usize]) -> Self {
        if let Some(sides) = Sides::from_shorthand(values) {
            self.padding = sides;
        }
        self
    }

    /// Clear padding on every side.
    pub fn unset_padding(mut self) -> Self {
        self.padding = Sides::default();
        self
    }

    /// Set top padding.
    pub fn padding_top(mut self, v: usize) -> Self {
        self.padding.top = v;
        self
    }

    pub fn unset_padding_top(mut self) -> Self {
        self.padding.top = 0;
        self
    }

    pub fn get_padding_top(&self) -> usize {
        self.padding.top
    }

    pub fn padding_right(mut self, v: usize) -> Self {
        self.padding.right = v;
        self
    }

    pub fn unset_padding_right(mut self) -> Self {
        self.padding.right = 0;
        self
    }

    pub fn get_padding_right(&self) -> usize {
        self.padding.right
    }

    pub fn padding_bottom(mut self, v: usize) -> Self {
        self.padding.bottom = v;
        self
    }

    pub fn unset_padding_bottom(mut self) -> Self {
        self.padding.bottom = 0;
        self
    }

    pub fn get_padding_bottom(&self) -> usize {
        self.padding.bottom
    }

    pub fn padding_left(mut self, v: usize) -> Self {
        self.padding.left = v;
        self
    }

    pub fn unset_padding_left(mut self) -> Self {
        self.padding.left = 0;
        self
    }

    pub fn get_padding_left(&self) -> usize {
        self.padding.left
    }

    // === Margin ===

    /// Set margins with CSS shorthand, like [`Style::padding`].
    pub fn margin(mut self, values: &[usize]) -> Self {
        if let Some(sides) = Sides::from_shorthand(values) {
            self.margin = sides;
        }
        self
    }

    /// Clear margin on every side.
    pub fn unset_margin(mut self) -> Self {
        self.margin = Sides::default();
        self
    }

    /// Set top margin.
    pub fn margin_top(mut self, v: usize) -> Self {
        self.margin.top = v;
        self
    }

    pub fn unset_margin_top(mut self) -> Self {
        self.margin.top = 0;
        self
    }

    pub fn get_margin_top(&self) -> usize {
        self.margin.top
    }

    pub fn margin_right(mut self, v: usize) -> Self {
        self.margin.right = v;
        self
    }

    pub fn unset_margin_right(mut self) -> Self {
        self.margin.right = 0;
        self
    }

    pub fn get_margin_right(&self) -> usize {
        self.margin.right
    }

    pub fn margin_bottom(mut self, v: usize) -> Self {
        self.margin.bottom = v;
        self
    }

    pub fn unset_margin_bottom(mut self) -> Self {
        self.margin.bottom = 0;
        self
    }

    pub fn get_margin_bottom(&self) -> usize {
        self.margin.bottom
    }

    pub fn margin_left(mut self, v: usize) -> Self {
        self.margin.left = v;
        self
    }

    pub fn unset_margin_left(mut self) -> Self {
        self.margin.left = 0;
        self
    }

    pub fn get_margin_left(&self) -> usize {
        self.margin.left
    }

    // === Alignment ===

    /// Set horizontal alignment.
    pub fn align(mut self, position: Position) -> Self {
        self.align = position;
        self
    }

    pub fn unset_align(mut self) -> Self {
        self.align = Position::default();
        self
    }

    pub fn get_align(&self) -> Position {
        self.align
    }

    /// Set vertical alignment.
    pub fn align_vertical(mut self, position: Position) -> Self {
        self.align_vertical = position;
        self
    }

    pub fn unset_align_vertical(mut self) -> Self {
        self.align_vertical = Position::default();
        self
    }

    pub fn get_align_vertical(&self) -> Position {
        self.align_vertical
    }

    // === Border ===

    /// Set the border glyphs, then enable or disable sides.
    ///
    /// Side flags apply positionally to top, bottom, left and right. Sides
    /// without a flag keep their current setting.
    pub fn border(mut self, border: Border, sides: &[bool]) -> Self {
        self.border_style = border;
        let flags = [
            &mut self.border_sides.top,
            &mut self.border_sides.bottom,
            &mut self.border_sides.left,
            &mut self.border_sides.right,
        ];
        for (flag, &enabled) in flags.into_iter().zip(sides) {
            *flag = enabled;
        }
        self
    }

    /// Clear the border glyphs and every side flag.
    pub fn unset_border(mut self) -> Self {
        self.border_style = Border::default();
        self.border_sides = Sides::default();
        self
    }

    /// Set the border glyphs without changing which sides are drawn.
    pub fn border_style(mut self, border: Border) -> Self {
        self.border_style = border;
        self
    }

    pub fn unset_border_style(mut self) -> Self {
        self.border_style = Border::default();
        self
    }

    pub fn get_border_style(&self) -> Border {
        self.border_style.clone()
    }

    /// Draw the top border.
    pub fn border_top(mut self, v: bool) -> Self {
        self.border_sides.top = v;
        self
    }

    pub fn unset_border_top(mut self) -> Self {
        self.border_sides.top = false;
        self
    }

    pub fn get_border_top(&self) -> bool {
        self.border_sides.top
    }

    /// Draw the right border.
    pub fn border_right(mut self, v: bool) -> Self {
        self.border_sides.right = v;
        self
    }

    pub fn unset_border_right(mut self) -> Self {
        self.border_sides.right = false;
        self
    }

    pub fn get_border_right(&self) -> bool {
        self.border_sides.right
    }

    /// Draw the bottom border.
    pub fn border_bottom(mut self, v: bool) -> Self {
        self.border_sides.bottom = v;
        self
    }

    pub fn unset_border_bottom(mut self) -> Self {
        self.border_sides.bottom = false;
        self
    }

    pub fn get_border_bottom(&self) -> bool {
        self.border_sides.bottom
    }

    /// Draw the left border.
    pub fn border_left(mut self, v: bool) -> Self {
        self.border_sides.left = v;
        self
    }

    pub fn unset_border_left(mut self) -> Self {
        self.border_sides.left = false;
        self
    }

    pub fn get_border_left(&self) -> bool {
        self.border_sides.left
    }

    // === Border Foreground ===

    /// Set border foreground colors with CSS shorthand, like [`Style::padding`].
    pub fn border_foreground(mut self, colors: &[Color]) -> Self {
        if let Some(sides) = Sides::from_shorthand(colors) {
            self.border_foreground = sides;
        }
        self
    }

    pub fn unset_border_foreground(mut self) -> Self {
        self.border_foreground = Sides::default();
        self
    }

    pub fn border_top_foreground(mut self, color: Color) -> Self {
        self.border_foreground.top = color;
        self
    }

    pub fn unset_border_top_foreground(mut self) -> Self {
        self.border_foreground.top = Color::NoColor;
        self
    }

    pub fn get_border_top_foreground(&self) -> Color {
        self.border_foreground.top.clone()
    }

    pub fn border_right_foreground(mut self, color: Color) -> Self {
        self.border_foreground.right = color;
        self
    }

    pub fn unset_border_right_foreground(mut self) -> Self {
        self.border_foreground.right = Color::NoColor;
        self
    }

    pub fn get_border_right_foreground(&self) -> Color {
        self.border_foreground.right.clone()
    }

    pub fn border_bottom_foreground(mut self, color: Color) -> Self {
        self.border_foreground.bottom = color;
        self
    }

    pub fn unset_border_bottom_foreground(mut self) -> Self {
        self.border_foreground.bottom = Color::NoColor;
        self
    }

    pub fn get_border_bottom_foreground(&self) -> Color {
        self.border_foreground.bottom.clone()
    }

    pub fn border_left_foreground(mut self, color: Color) -> Self {
        self.border_foreground.left = color;
        self
    }

    pub fn unset_border_left_foreground(mut self) -> Self {
        self.border_foreground.left = Color::NoColor;
        self
    }

    pub fn get_border_left_foreground(&self) -> Color {
        self.border_foreground.left.clone()
    }

    // === Border Background ===

    /// Set border background colors with CSS shorthand, like [`Style::padding`].
    pub fn border_background(mut self, colors: &[Color]) -> Self {
        if let Some(sides) = Sides::from_shorthand(colors) {
            self.border_background = sides;
        }
        self
    }

    pub fn unset_border_background(mut self) -> Self {
        self.border_background = Sides::default();
        self
    }

    pub fn border_top_background(mut self, color: Color) -> Self {
        self.border_background.top = color;
        self
    }

    pub fn unset_border_top_background(mut self) -> Self {
        self.border_background.top = Color::NoColor;
        self
    }

    pub fn get_border_top_background(&self) -> Color {
        self.border_background.top.clone()
    }

    pub fn border_right_background(mut self, color: Color) -> Self {
        self.border_background.right = color;
        self
    }

    pub fn unset_border_right_background(mut self) -> Self {
        self.border_background.right = Color::NoColor;
        self
    }

    pub fn get_border_right_background(&self) -> Color {
        self.border_background.right.clone()
    }

    pub fn border_bottom_background(mut self, color: Color) -> Self {
        self.border_background.bottom = color;
        self
    }

    pub fn unset_border_bottom_background(mut self) -> Self {
        self.border_background.bottom = Color::NoColor;
        self
    }

    pub fn get_border_bottom_background(&self) -> Color {
        self.border_background.bottom.clone()
    }

    pub fn border_left_background(mut self, color: Color) -> Self {
        self.border_background.left = color;
        self
    }

    pub fn unset_border_left_background(mut self) -> Self {
        self.border_background.left = Color::NoColor;
        self
    }

    pub fn get_border_left_background(&self) -> Color {
        self.border_background.left.clone()
    }

    // === Frame Metrics ===

    /// Width of the top border edge, or `0` when the side is disabled.
    #[surface(derived)]
    pub fn get_border_top_size(&self) -> usize {
        if self.border_sides.top {
            self.border_style.top_size()
        } else {
            0
        }
    }

    #[surface(derived)]
    pub fn get_border_right_size(&self) -> usize {
        if self.border_sides.right {
            self.border_style.right_size()
        } else {
            0
        }
    }

    #[surface(derived)]
    pub fn get_border_bottom_size(&self) -> usize {
        if self.border_sides.bottom {
            self.border_style.bottom_size()
        } else {
            0
        }
    }

    #[surface(derived)]
    pub fn get_border_left_size(&self) -> usize {
        if self.border_sides.left {
            self.border_style.left_size()
        } else {
            0
        }
    }

    #[surface(derived)]
    pub fn get_horizontal_border_size(&self) -> usize {
        self.get_border_left_size() + self.get_border_right_size()
    }

    #[surface(derived)]
    pub fn get_vertical_border_size(&self) -> usize {
        self.get_border_top_size() + self.get_border_bottom_size()
    }

    #[surface(derived)]
    pub fn get_horizontal_padding(&self) -> usize {
        self.padding.horizontal()
    }

    #[surface(derived)]
    pub fn get_vertical_padding(&self) -> usize {
        self.padding.vertical()
    }

    #[surface(derived)]
    pub fn get_horizontal_margins(&self) -> usize {
        self.margin.horizontal()
    }

    #[surface(derived)]
    pub fn get_vertical_margins(&self) -> usize {
        self.margin.vertical()
    }

    /// Cells taken horizontally by margins, padding and borders.
    #[surface(derived)]
    pub fn get_horizontal_frame_size(&self) -> usize {
        self.get_horizontal_margins()
            + self.get_horizontal_padding()
            + self.get_horizontal_border_size()
    }

    /// Lines taken vertically by margins, padding and borders.
    #[surface(derived)]
    pub fn get_vertical_frame_size(&self) -> usize {
        self.get_vertical_margins()
            + self.get_vertical_padding()
            + self.get_vertical_border_size()
    }

    /// Horizontal and vertical frame sizes.
    #[surface(derived)]
    pub fn get_frame_size(&self) -> (usize, usize) {
        (self.get_horizontal_frame_size(), self.get_vertical_frame_size())
    }

    // === Composition ===

    /// Fill attributes that are unset here from `other`.
    ///
    /// Margins and padding are not inherited.
    pub fn inherit(mut self, other: Style) -> Style {
        macro_rules! inherit_if_unset {
            ($($($field:ident).+),+ $(,)?) => {
                $(
                    inherit_field(&mut self.$($field).+, &other.$($field).+);
                )+
            };
        }

        inherit_if_unset!(
            // Text decoration
            bold, italic, underline, strikethrough, reverse, blink, faint,
            underline_spaces, strikethrough_spaces, color_whitespace, inline,
            // Colors
            foreground, background, margin_background,
            // Size
            width, height, max_width, max_height,
            // Alignment
            align, align_vertical,
            // Border
            border_style,
            border_sides.top, border_sides.right, border_sides.bottom, border_sides.left,
            border_foreground.top, border_foreground.right,
            border_foreground.bottom, border_foreground.left,
            border_background.top, border_background.right,
            border_background.bottom, border_background.left,
        );
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meta::{ArgKind, Rejection, Surfaced};

    #[test]
    fn test_setters_return_new_value() {
        let base = Style::new().bold(true);
        let changed = base.clone().italic(true);
        assert!(!base.get_italic());
        assert!(changed.get_bold() && changed.get_italic());
        assert_eq!(changed.unset_italic(), base);
    }

    #[test]
    fn test_padding_shorthand() {
        let style = Style::new().padding(&[1, 2, 3]);
        assert_eq!(
            (
                style.get_padding_top(),
                style.get_padding_right(),
                style.get_padding_bottom(),
                style.get_padding_left()
            ),
            (1, 2, 3, 2)
        );
        assert_eq!(style.clone().padding(&[]), style);
        assert_eq!(style.clone().padding(&[1, 1, 1, 1, 1]), style);
        assert_eq!(style.unset_padding(), Style::new());
    }

    #[test]
    fn test_border_flags_are_positional() {
        let style = Style::new()
            .border_left(true)
            .border(Border::normal(), &[true, false]);
        assert!(style.get_border_top());
        assert!(!style.get_border_bottom());
        assert!(style.get_border_left());
        assert!(!style.get_border_right());
        assert_eq!(style.get_border_style(), Border::normal());
    }

    #[test]
    fn test_frame_size() {
        let style = Style::new()
            .border(Border::rounded(), &[true, true, true, true])
            .padding(&[1, 2])
            .margin(&[0, 3]);
        assert_eq!(style.get_horizontal_border_size(), 2);
        assert_eq!(style.get_vertical_border_size(), 2);
        assert_eq!(style.get_frame_size(), (2 + 4 + 6, 2 + 2));

        let hidden_sides = style.border_top(false);
        assert_eq!(hidden_sides.get_border_top_size(), 0);
        assert_eq!(hidden_sides.get_border_bottom_size(), 1);
    }

    #[test]
    fn test_inherit_fills_unset_attributes() {
        let parent = Style::new()
            .bold(true)
            .foreground(Color::code("12"))
            .padding(&[4]);
        let child = Style::new().foreground(Color::code("9")).inherit(parent);
        assert!(child.get_bold());
        assert_eq!(child.get_foreground(), Color::code("9"));
        assert_eq!(child.get_padding_top(), 0);
    }

    #[test]
    fn test_surface_shape() {
        let surface = Style::surface();
        assert_eq!(surface.type_name, "Style");

        let border = surface.setter("border").unwrap();
        assert_eq!(border.params, &[ArgKind::Border]);
        assert_eq!(border.variadic, Some(ArgKind::Bool));
        assert!(surface.unsetter("border").is_some());

        let padding = surface.setter("padding").unwrap();
        assert!(padding.params.is_empty());
        assert_eq!(padding.variadic, Some(ArgKind::Int));

        let frame = surface.getter("frame_size").unwrap();
        assert!(frame.derived);
        assert!(frame.kind.is_none() && frame.read.is_none());
        assert!(surface.getter("border_top_size").unwrap().derived);
        assert!(!surface.getter("bold").unwrap().derived);

        let inherit = surface.rejected("inherit").unwrap();
        assert_eq!(inherit.reason, Rejection::UnsupportedParameter { ty: "Style" });

        // Constructors and getters are not setters.
        assert!(surface.setter("new").is_none());
        assert!(surface.setter("get_bold").is_none());
    }
}
