//! Directive import.
//!
//! Input is a list of directives separated by `;`. Each directive is either
//! the keyword `clear`, which resets the accumulated style to its default, or
//! an assignment `name: args`. Directives apply strictly left to right and
//! processing stops at the first error.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::logging::targets;
use crate::meta::Surfaced;
use crate::property::PropertyRegistry;
use crate::style::Style;

/// Separator between directives.
pub const DIRECTIVE_SEPARATOR: char = ';';

/// Directive that resets the style to its default.
pub const CLEAR_KEYWORD: &str = "clear";

/// Applies directive text to style values using a property registry.
///
/// # Example
///
/// ```
/// use tinct::{Importer, Style};
/// use tinct::property::PropertyRegistry;
///
/// let importer = Importer::new(PropertyRegistry::global());
/// let (style, result) = importer.apply(Style::new(), "bold: true; width: wide");
///
/// // The style keeps every directive applied before the failure.
/// assert!(style.get_bold());
/// assert!(result.is_err());
/// ```
pub struct Importer<'r, S: Surfaced> {
    registry: &'r PropertyRegistry<S>,
}

impl<'r, S: Surfaced> Importer<'r, S> {
    /// Create an importer resolving names through `registry`.
    pub fn new(registry: &'r PropertyRegistry<S>) -> Self {
        Self { registry }
    }

    /// Apply every directive in `input` to `dst`.
    ///
    /// Returns the accumulated style together with the outcome. On error the
    /// style reflects every directive before the failing one.
    pub fn apply(&self, dst: S, input: &str) -> (S, Result<()>) {
        let mut style = dst;
        for segment in input.split(DIRECTIVE_SEPARATOR) {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }

            if segment == CLEAR_KEYWORD {
                tracing::trace!(target: targets::IMPORT, "cleared style");
                style = S::default();
                continue;
            }

            match self.apply_directive(&style, segment) {
                Ok(next) => style = next,
                Err(err) => {
                    tracing::debug!(target: targets::IMPORT, error = %err, "directive rejected");
                    return (style, Err(err));
                }
            }
        }
        (style, Ok(()))
    }

    /// Apply every directive in `input` to `dst`, discarding partial results
    /// on error.
    pub fn import(&self, dst: S, input: &str) -> Result<S> {
        let (style, result) = self.apply(dst, input);
        result.map(|()| style)
    }

    /// Read a UTF-8 directive file and import it.
    pub fn import_file(&self, dst: S, path: impl AsRef<Path>) -> Result<S> {
        let path = path.as_ref();
        let input = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        tracing::debug!(target: targets::IMPORT, path = %path.display(), "importing directive file");
        self.import(dst, &input)
    }

    fn apply_directive(&self, style: &S, segment: &str) -> Result<S> {
        let (name, args) = segment
            .split_once(':')
            .ok_or_else(|| Error::syntax(segment))?;
        let (name, args) = (name.trim(), args.trim());

        let descriptor = self
            .registry
            .resolve(name)
            .map_err(|e| Error::directive(segment, e.with_args(args)))?;
        let next = descriptor
            .assign(style, args)
            .map_err(|e| Error::directive(segment, e))?;

        tracing::trace!(target: targets::IMPORT, property = name, args, "applied directive");
        Ok(next)
    }
}

/// Apply directives to a [`Style`] using the global registry.
///
/// ```
/// let style = tinct::import(tinct::Style::new(), "width: 22; align: center")?;
/// assert_eq!(style.get_width(), 22);
/// # Ok::<(), tinct::Error>(())
/// ```
pub fn import(dst: Style, input: &str) -> Result<Style> {
    Importer::new(PropertyRegistry::global()).import(dst, input)
}

/// Read a UTF-8 directive file and apply it to a [`Style`].
pub fn import_file(dst: Style, path: impl AsRef<Path>) -> Result<Style> {
    Importer::new(PropertyRegistry::global()).import_file(dst, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DirectiveError;
    use crate::style::Color;

    #[test]
    fn test_empty_segments_are_skipped() {
        let style = import(Style::new(), " ; ;bold: true;; ").unwrap();
        assert_eq!(style, Style::new().bold(true));
    }

    #[test]
    fn test_clear_resets() {
        let style = import(Style::new().italic(true), "bold: true; clear; width: 3").unwrap();
        assert_eq!(style, Style::new().width(3));
    }

    #[test]
    fn test_clear_must_match_exactly() {
        let err = import(Style::new(), "clear all").unwrap_err();
        assert_eq!(err.to_string(), r#"invalid syntax: "clear all""#);
    }

    #[test]
    fn test_partial_result_on_error() {
        let importer = Importer::new(PropertyRegistry::global());
        let (style, result) =
            importer.apply(Style::new(), "foreground: 1; background: nope; bold: true");
        assert_eq!(style, Style::new().foreground(Color::code("1")));
        let err = result.unwrap_err();
        assert!(matches!(
            err.directive_error(),
            Some(DirectiveError::Value(_))
        ));
    }

    #[test]
    fn test_custom_registry() {
        let registry = PropertyRegistry::<Style>::new();
        let importer = Importer::new(&registry);
        let style = importer.import(Style::new(), "height: 4").unwrap();
        assert_eq!(style.get_height(), 4);
        assert_eq!(registry.discovered_len(), 1);
    }
}
