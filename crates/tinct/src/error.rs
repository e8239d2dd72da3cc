//! Error types for directive import.
//!
//! Errors form three layers. [`ValueError`] is raised by a single argument
//! parser, [`DirectiveError`] explains why one directive could not be applied,
//! and [`Error`] ties a directive failure to the input segment it came from.

use std::path::PathBuf;

use crate::meta::{ArgKind, ArgMismatch};

/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by import.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A segment that is neither `clear` nor a `name: args` assignment.
    #[error("invalid syntax: {segment:?}")]
    Syntax { segment: String },

    /// A well-formed directive that could not be applied.
    #[error("in {segment:?}: {source}")]
    Directive {
        segment: String,
        #[source]
        source: DirectiveError,
    },

    /// File I/O error.
    #[error("failed to read directives from '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a syntax error.
    pub fn syntax(segment: impl Into<String>) -> Self {
        Self::Syntax {
            segment: segment.into(),
        }
    }

    /// Create a directive error for the given segment.
    pub fn directive(segment: impl Into<String>, source: DirectiveError) -> Self {
        Self::Directive {
            segment: segment.into(),
            source,
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The underlying directive failure, if any.
    pub fn directive_error(&self) -> Option<&DirectiveError> {
        match self {
            Self::Directive { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// An operation prefix that must not appear in property names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationPrefix {
    Set,
    Unset,
    Get,
}

impl OperationPrefix {
    /// All guarded prefixes.
    pub const ALL: [OperationPrefix; 3] = [Self::Set, Self::Unset, Self::Get];

    /// The prefix as written in a directive, including the trailing dash.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Set => "set-",
            Self::Unset => "unset-",
            Self::Get => "get-",
        }
    }

    fn guidance(self, property: &str, args: Option<&str>) -> String {
        let prefix = self.as_str();
        match self {
            Self::Set => {
                let args = args.unwrap_or("...");
                format!("don't use \"{prefix}{property}: {args}\"; use \"{property}: {args}\" instead")
            }
            Self::Unset => format!(
                "don't use \"{prefix}{property}: ...\"; use \"{property}: unset\" instead"
            ),
            Self::Get => format!(
                "don't use \"{prefix}{property}: ...\"; use \"{property}: ...\" instead"
            ),
        }
    }
}

/// Why a single directive could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum DirectiveError {
    /// No operation on the style matches the name.
    #[error("property not supported: {name:?}")]
    UnknownProperty { name: String },

    /// The name starts with `set-`, `unset-` or `get-`.
    #[error("{}", .prefix.guidance(.property, .args.as_deref()))]
    OperationPrefix {
        prefix: OperationPrefix,
        property: String,
        args: Option<String>,
    },

    /// The matching operation does not return a style.
    #[error("method {method:?} exists but does not return a style")]
    NotStyleReturning { method: String },

    /// The matching operation takes a parameter with no argument kind.
    #[error("style has method {method}, but method uses unsupported argument type {ty}")]
    UnsupportedShape { method: String, ty: String },

    /// An argument parser rejected its input.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Fewer arguments than the setter requires.
    #[error("missing value")]
    MissingValue,

    /// Unconsumed text after every argument was parsed.
    #[error("excess values at end: ...{remainder}")]
    ExcessInput { remainder: String },

    /// `unset` used on a property without an unsetter.
    #[error("no unset method defined for {name:?}")]
    Unsettable { name: String },

    /// Parsed arguments did not fit the setter's declared parameters.
    #[error("argument mismatch: {0}")]
    ArgMismatch(#[from] ArgMismatch),
}

impl DirectiveError {
    /// Create an unknown property error.
    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty { name: name.into() }
    }

    /// Attach the directive's argument text to prefix guidance.
    pub fn with_args(self, text: &str) -> Self {
        match self {
            Self::OperationPrefix {
                prefix, property, ..
            } => Self::OperationPrefix {
                prefix,
                property,
                args: Some(text.trim().to_string()),
            },
            other => other,
        }
    }
}

/// Errors raised by argument parsers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// The input at the cursor does not start with a value of the kind.
    #[error("expected {expected} value, found {found:?}")]
    NoValue { expected: ArgKind, found: String },

    /// An integer literal too large to represent.
    #[error("integer out of range: {literal:?}")]
    IntOutOfRange { literal: String },

    /// A numeric position outside `[0, 1]`.
    #[error("position out of range [0, 1]: {literal:?}")]
    PositionOutOfRange { literal: String },

    /// A color token that is neither a palette index nor a hex triplet.
    #[error("color not recognized: {token:?}")]
    ColorNotRecognized { token: String },

    /// A bare word that names no border preset.
    #[error("border not recognized: {token:?}")]
    UnknownBorder { token: String },

    /// A `border(...)` form without eight quoted fields.
    #[error("malformed border, expected border(\"top\", ... 8 quoted fields): {found:?}")]
    NoBorder { found: String },

    /// A quoted border field with a bad escape.
    #[error("invalid border field: {0}")]
    Escape(#[from] EscapeError),
}

/// Errors raised while decoding a quoted string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EscapeError {
    /// The closing quote is missing.
    #[error("unterminated quoted string")]
    Unterminated,

    /// A backslash sequence with no defined meaning.
    #[error("invalid escape sequence {sequence:?}")]
    InvalidEscape { sequence: String },

    /// A `\u` or `\U` escape naming a surrogate or out-of-range value.
    #[error("invalid code point U+{value:X}")]
    InvalidCodePoint { value: u32 },

    /// Byte escapes that do not form valid UTF-8.
    #[error("quoted string is not valid UTF-8")]
    InvalidUtf8,
}
