//! Property descriptors and the registry that resolves them.
//!
//! A property binds a kebab-case name such as `padding-left` to a setter,
//! an optional unsetter, and the argument kinds the setter takes. The
//! [`PropertyRegistry`] resolves names from an explicit table first and
//! otherwise discovers them on the style's capability surface.

mod descriptor;
mod naming;
mod registry;

pub use descriptor::{DynSetter, DynUnsetter, PropertyDescriptor, UNSET_KEYWORD};
pub use naming::{is_property_name, kebab_case, snake_case};
pub use registry::PropertyRegistry;
