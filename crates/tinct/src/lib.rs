//! Textual import and export for terminal style objects.
//!
//! This crate moves style attributes between a compact, human-editable text
//! form and a [`Style`] value:
//!
//! - **Import**: apply `;`-separated directives such as `bold: true` or
//!   `border: rounded true false` to a style, in order
//! - **Export**: render a style back into the same directive text
//! - **Discovery**: property names are resolved against the style's
//!   capability surface, generated by `#[style_surface]`, so every setter on
//!   the style is addressable without a hand-written table
//!
//! # Example
//!
//! ```
//! use tinct::prelude::*;
//!
//! let style = tinct::import(Style::new(), "bold: true; padding-left: 4; foreground: #FAFAFA")?;
//! assert!(style.get_bold());
//! assert_eq!(style.get_padding_left(), 4);
//!
//! let text = tinct::export(&style, &ExportOptions::default());
//! assert_eq!(text, "bold: true; foreground: #FAFAFA; padding-left: 4;");
//! # Ok::<(), tinct::Error>(())
//! ```
//!
//! # Directive syntax
//!
//! ```text
//! input      := (directive (";" directive)*)?
//! directive  := "clear" | name ":" args
//! args       := "unset" | value (WS value)*
//! ```
//!
//! Directives apply left to right and the last one touching a property wins.
//! `clear` resets the accumulated style to its default.

extern crate self as tinct;

pub mod export;
pub mod import;
pub mod logging;
pub mod meta;
pub mod property;
pub mod style;
pub mod value;

mod error;

pub use error::{DirectiveError, Error, EscapeError, OperationPrefix, Result, ValueError};
pub use export::{export, ExportOptions};
pub use import::{import, import_file, Importer};
pub use tinct_macros::style_surface;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::export::{export, ExportOptions};
    pub use crate::import::{import, import_file, Importer};
    pub use crate::meta::{ArgKind, ArgValue, Surfaced};
    pub use crate::property::{PropertyDescriptor, PropertyRegistry};
    pub use crate::style::{Border, Color, Position, Style};
    pub use crate::{DirectiveError, Error, ValueError};
}

pub use style::{Border, Color, Position, Style};
