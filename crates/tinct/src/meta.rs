//! Capability surface metadata.
//!
//! A [`Surface`] is the static description of a style type's operations,
//! emitted by the `#[style_surface]` attribute. Setters, unsetters and getters
//! are stored as type-erased function pointers over [`ArgValue`], so the
//! property registry can bind a textual name to an operation without knowing
//! the concrete parameter types.
//!
//! # Example
//!
//! ```
//! use tinct::meta::{ArgKind, Surfaced};
//! use tinct::Style;
//!
//! let surface = Style::surface();
//! let setter = surface.setter("padding_left").unwrap();
//! assert_eq!(setter.params, &[ArgKind::Int]);
//! assert!(surface.unsetter("padding_left").is_some());
//! ```

use std::fmt;

use crate::style::{Border, Color, Position};

/// The lexical category of a directive argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    Int,
    Bool,
    Position,
    Color,
    Border,
}

impl ArgKind {
    /// Lowercase name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Position => "position",
            Self::Color => "color",
            Self::Border => "border",
        }
    }
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A parsed argument value, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Int(i128),
    Bool(bool),
    Position(Position),
    Color(Color),
    Border(Border),
}

impl ArgValue {
    /// The kind of this value.
    pub fn kind(&self) -> ArgKind {
        match self {
            Self::Int(_) => ArgKind::Int,
            Self::Bool(_) => ArgKind::Bool,
            Self::Position(_) => ArgKind::Position,
            Self::Color(_) => ArgKind::Color,
            Self::Border(_) => ArgKind::Border,
        }
    }

    /// Check whether this is the zero value of its kind.
    ///
    /// Colors are default only when no color is set.
    pub fn is_default(&self) -> bool {
        match self {
            Self::Int(v) => *v == 0,
            Self::Bool(v) => !*v,
            Self::Position(p) => *p == Position::default(),
            Self::Color(c) => c.is_none(),
            Self::Border(b) => *b == Border::default(),
        }
    }
}

/// Canonical directive text, accepted back by the matching parser.
impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Position(p) => write!(f, "{p}"),
            Self::Color(c) => write!(f, "{c}"),
            Self::Border(b) => write!(f, "{b}"),
        }
    }
}

/// Argument values that do not fit a setter's declared parameters.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ArgMismatch {
    #[error("missing argument {index}")]
    Missing { index: usize },

    #[error("too many arguments")]
    Excess,

    #[error("expected {expected} argument, found {found}")]
    Kind { expected: ArgKind, found: ArgKind },

    #[error("{value} does not fit in {ty}")]
    OutOfRange { value: i128, ty: &'static str },
}

/// Conversion from a parsed argument into a parameter type.
pub trait FromArg: Sized {
    fn from_arg(value: ArgValue) -> Result<Self, ArgMismatch>;
}

/// Conversion from a getter's return type into an argument value.
pub trait IntoArg {
    fn into_arg(self) -> ArgValue;
}

macro_rules! int_args {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromArg for $ty {
                fn from_arg(value: ArgValue) -> Result<Self, ArgMismatch> {
                    match value {
                        ArgValue::Int(v) => <$ty>::try_from(v).map_err(|_| ArgMismatch::OutOfRange {
                            value: v,
                            ty: stringify!($ty),
                        }),
                        other => Err(ArgMismatch::Kind {
                            expected: ArgKind::Int,
                            found: other.kind(),
                        }),
                    }
                }
            }

            impl IntoArg for $ty {
                fn into_arg(self) -> ArgValue {
                    // Widening: every supported integer type fits in i128.
                    ArgValue::Int(self as i128)
                }
            }
        )*
    };
}

int_args!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

macro_rules! value_args {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FromArg for $ty {
                fn from_arg(value: ArgValue) -> Result<Self, ArgMismatch> {
                    match value {
                        ArgValue::$variant(v) => Ok(v),
                        other => Err(ArgMismatch::Kind {
                            expected: ArgKind::$variant,
                            found: other.kind(),
                        }),
                    }
                }
            }

            impl IntoArg for $ty {
                fn into_arg(self) -> ArgValue {
                    ArgValue::$variant(self)
                }
            }
        )*
    };
}

value_args!(
    bool => Bool,
    Position => Position,
    Color => Color,
    Border => Border,
);

/// Type-erased setter shim.
pub type SetterFn<S> = fn(S, Vec<ArgValue>) -> Result<S, ArgMismatch>;

/// Type-erased unsetter.
pub type UnsetterFn<S> = fn(S) -> S;

/// Type-erased getter shim.
pub type GetterFn<S> = fn(&S) -> ArgValue;

/// Metadata for a setter operation.
pub struct SetterMeta<S> {
    /// Native (snake_case) operation name.
    pub name: &'static str,
    /// Fixed parameter kinds, in order.
    pub params: &'static [ArgKind],
    /// Kind of the trailing variadic parameter, if any.
    pub variadic: Option<ArgKind>,
    /// Shim invoking the setter.
    pub call: SetterFn<S>,
}

/// Metadata for an unsetter, keyed by the property it clears.
pub struct UnsetterMeta<S> {
    pub name: &'static str,
    pub call: UnsetterFn<S>,
}

/// Metadata for a getter, keyed by the property it reads.
pub struct GetterMeta<S> {
    pub name: &'static str,
    /// Kind of the returned value; `None` for shapes with no argument kind.
    pub kind: Option<ArgKind>,
    /// Shim reading the value; present whenever `kind` is.
    pub read: Option<GetterFn<S>>,
    /// Read-only value computed from other properties.
    pub derived: bool,
}

/// Why a setter-shaped operation cannot back a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The operation returns something other than the style.
    ReturnsNonStyle,
    /// A parameter type has no argument kind.
    UnsupportedParameter { ty: &'static str },
}

/// An operation that looks like a setter but cannot be used as one.
#[derive(Debug, Clone, Copy)]
pub struct RejectedMeta {
    pub name: &'static str,
    pub reason: Rejection,
}

/// The static capability surface of a style type.
pub struct Surface<S: 'static> {
    /// Name of the style type.
    pub type_name: &'static str,
    pub setters: &'static [SetterMeta<S>],
    pub unsetters: &'static [UnsetterMeta<S>],
    pub getters: &'static [GetterMeta<S>],
    pub rejected: &'static [RejectedMeta],
}

impl<S: 'static> Surface<S> {
    /// Find a setter by native name.
    pub fn setter(&self, name: &str) -> Option<&SetterMeta<S>> {
        self.setters.iter().find(|s| s.name == name)
    }

    /// Find the unsetter for a property by native name.
    pub fn unsetter(&self, name: &str) -> Option<&UnsetterMeta<S>> {
        self.unsetters.iter().find(|u| u.name == name)
    }

    /// Find the getter for a property by native name.
    pub fn getter(&self, name: &str) -> Option<&GetterMeta<S>> {
        self.getters.iter().find(|g| g.name == name)
    }

    /// Find a rejected operation by native name.
    pub fn rejected(&self, name: &str) -> Option<&RejectedMeta> {
        self.rejected.iter().find(|r| r.name == name)
    }
}

impl<S: 'static> fmt::Debug for Surface<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Surface")
            .field("type_name", &self.type_name)
            .field("setters", &self.setters.iter().map(|s| s.name).collect::<Vec<_>>())
            .field("unsetters", &self.unsetters.iter().map(|u| u.name).collect::<Vec<_>>())
            .field("getters", &self.getters.iter().map(|g| g.name).collect::<Vec<_>>())
            .field("rejected", &self.rejected)
            .finish()
    }
}

/// A style type with a generated capability surface.
///
/// Implemented by `#[style_surface]`; not intended to be implemented by hand.
pub trait Surfaced: Clone + Default + Sized + 'static {
    /// The type's static surface.
    fn surface() -> &'static Surface<Self>;
}
