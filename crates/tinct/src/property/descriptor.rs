//! Property descriptors.

use std::fmt;
use std::sync::Arc;

use crate::error::DirectiveError;
use crate::meta::{ArgKind, ArgMismatch, ArgValue, SetterMeta, UnsetterMeta};

/// The argument text that invokes a property's unsetter.
pub const UNSET_KEYWORD: &str = "unset";

/// Type-erased setter closure.
pub type DynSetter<S> = Arc<dyn Fn(S, Vec<ArgValue>) -> Result<S, ArgMismatch> + Send + Sync>;

/// Type-erased unsetter closure.
pub type DynUnsetter<S> = Arc<dyn Fn(S) -> S + Send + Sync>;

/// A named, typed property of a style.
///
/// # Example
///
/// ```
/// use tinct::meta::{ArgKind, ArgValue, FromArg};
/// use tinct::property::PropertyDescriptor;
/// use tinct::Style;
///
/// // A hand-written property that sets the same padding on every side.
/// let descriptor = PropertyDescriptor::new("pad", |style: Style, args: Vec<ArgValue>| {
///     let n = args.into_iter().map(usize::from_arg).next().transpose()?.unwrap_or(0);
///     Ok(style.padding(&[n]))
/// })
/// .param(ArgKind::Int);
///
/// let style = descriptor.assign(&Style::new(), "3")?;
/// assert_eq!(style.get_padding_right(), 3);
/// # Ok::<(), tinct::DirectiveError>(())
/// ```
pub struct PropertyDescriptor<S> {
    name: String,
    params: Vec<ArgKind>,
    variadic: Option<ArgKind>,
    setter: DynSetter<S>,
    unsetter: Option<DynUnsetter<S>>,
}

impl<S> PropertyDescriptor<S> {
    /// Create a descriptor with no parameters and no unsetter.
    pub fn new<F>(name: impl Into<String>, setter: F) -> Self
    where
        F: Fn(S, Vec<ArgValue>) -> Result<S, ArgMismatch> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            params: Vec::new(),
            variadic: None,
            setter: Arc::new(setter),
            unsetter: None,
        }
    }

    /// Build a descriptor from generated surface metadata.
    pub fn from_surface(
        name: impl Into<String>,
        setter: &SetterMeta<S>,
        unsetter: Option<&UnsetterMeta<S>>,
    ) -> Self
    where
        S: 'static,
    {
        let mut descriptor = Self::new(name, setter.call).params(setter.params.iter().copied());
        descriptor.variadic = setter.variadic;
        if let Some(unsetter) = unsetter {
            descriptor = descriptor.unsetter(unsetter.call);
        }
        descriptor
    }

    /// Append a fixed parameter.
    pub fn param(mut self, kind: ArgKind) -> Self {
        self.params.push(kind);
        self
    }

    /// Append several fixed parameters.
    pub fn params(mut self, kinds: impl IntoIterator<Item = ArgKind>) -> Self {
        self.params.extend(kinds);
        self
    }

    /// Accept zero or more trailing values of `kind`.
    pub fn variadic(mut self, kind: ArgKind) -> Self {
        self.variadic = Some(kind);
        self
    }

    /// Attach an unsetter.
    pub fn unsetter<F>(mut self, unsetter: F) -> Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        self.unsetter = Some(Arc::new(unsetter));
        self
    }

    /// The kebab-case property name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fixed parameter kinds, in order.
    pub fn arg_kinds(&self) -> &[ArgKind] {
        &self.params
    }

    /// Kind of the trailing variadic parameter, if any.
    pub fn variadic_kind(&self) -> Option<ArgKind> {
        self.variadic
    }

    /// Check if the property accepts `unset`.
    pub fn can_unset(&self) -> bool {
        self.unsetter.is_some()
    }

    /// Parse argument text into values, in parameter order.
    ///
    /// Every fixed parameter must be present. A variadic kind then repeats
    /// until the text is exhausted; any text left over is an error.
    pub fn parse_args(&self, args: &str) -> Result<Vec<ArgValue>, DirectiveError> {
        let args = args.trim();
        let mut pos = 0;
        let mut values = Vec::with_capacity(self.params.len());

        for kind in &self.params {
            if pos >= args.len() {
                return Err(DirectiveError::MissingValue);
            }
            let (next, value) = kind.parse(args, pos)?;
            pos = next;
            values.push(value);
        }

        if let Some(kind) = self.variadic {
            while pos < args.len() {
                let (next, value) = kind.parse(args, pos)?;
                pos = next;
                values.push(value);
            }
        }

        if pos < args.len() {
            return Err(DirectiveError::ExcessInput {
                remainder: args[pos..].to_string(),
            });
        }
        Ok(values)
    }

    /// Apply argument text to `dst`, returning the updated style.
    ///
    /// The text `unset` invokes the unsetter instead of the setter.
    pub fn assign(&self, dst: &S, args: &str) -> Result<S, DirectiveError>
    where
        S: Clone,
    {
        if args.trim() == UNSET_KEYWORD {
            let unset = self
                .unsetter
                .as_ref()
                .ok_or_else(|| DirectiveError::Unsettable {
                    name: self.name.clone(),
                })?;
            return Ok(unset(dst.clone()));
        }

        let values = self.parse_args(args)?;
        Ok((self.setter)(dst.clone(), values)?)
    }
}

impl<S> Clone for PropertyDescriptor<S> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            params: self.params.clone(),
            variadic: self.variadic,
            setter: Arc::clone(&self.setter),
            unsetter: self.unsetter.clone(),
        }
    }
}

impl<S> fmt::Debug for PropertyDescriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("params", &self.params)
            .field("variadic", &self.variadic)
            .field("can_unset", &self.can_unset())
            .finish()
    }
}
