//! Style export.
//!
//! Export walks the getters on a style's capability surface in name order
//! and writes `name: value;` for each. Derived getters, such as frame sizes,
//! are never written because no single setter accepts them back.

use crate::logging::targets;
use crate::meta::Surfaced;
use crate::property::kebab_case;

/// Options controlling export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Text placed between directives.
    pub separator: String,
    /// Write properties that hold their default value.
    pub include_defaults: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            include_defaults: false,
        }
    }
}

impl ExportOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the separator between directives.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Include properties at their default value.
    pub fn with_defaults(mut self, include: bool) -> Self {
        self.include_defaults = include;
        self
    }
}

/// Render a style as directive text.
///
/// The output imports back into an equivalent style. With the default
/// options, properties at their default value are left out, so exporting a
/// default style yields an empty string.
///
/// # Example
///
/// ```
/// use tinct::{Color, ExportOptions, Position, Style};
///
/// let style = Style::new().align(Position::CENTER).foreground(Color::code("12"));
/// let text = tinct::export(&style, &ExportOptions::new().with_separator("\n"));
/// assert_eq!(text, "align: 0.5;\nforeground: 12;");
/// ```
pub fn export<S: Surfaced>(style: &S, options: &ExportOptions) -> String {
    let surface = S::surface();

    let mut getters: Vec<_> = surface
        .getters
        .iter()
        .filter(|getter| !getter.derived)
        .filter_map(|getter| match getter.read {
            Some(read) => Some((kebab_case(getter.name), read)),
            None => {
                tracing::debug!(
                    target: targets::EXPORT,
                    getter = getter.name,
                    "skipping getter without a readable value"
                );
                None
            }
        })
        .collect();
    getters.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = String::new();
    for (name, read) in getters {
        let value = read(style);
        if !options.include_defaults && value.is_default() {
            continue;
        }
        if !out.is_empty() {
            out.push_str(&options.separator);
        }
        out.push_str(&name);
        out.push_str(": ");
        out.push_str(&value.to_string());
        out.push(';');
    }

    tracing::trace!(target: targets::EXPORT, style = surface.type_name, len = out.len(), "exported style");
    out
}
