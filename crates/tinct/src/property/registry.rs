//! Property resolution with a discovery cache.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use static_assertions::assert_impl_all;

use super::descriptor::PropertyDescriptor;
use super::naming::{is_property_name, kebab_case, snake_case};
use crate::error::{DirectiveError, OperationPrefix};
use crate::logging::targets;
use crate::meta::{Rejection, Surfaced};
use crate::style::Style;

/// Resolves property names to descriptors.
///
/// Lookup order is the explicit table filled by [`register`](Self::register),
/// then the discovery cache, then discovery against the style's capability
/// surface. Discovered descriptors are cached and shared; resolving the same
/// name twice, even concurrently, yields the same `Arc`. Failed resolutions
/// are not cached.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use tinct::property::PropertyRegistry;
///
/// let registry = PropertyRegistry::global();
/// let first = registry.resolve("padding-left")?;
/// let second = registry.resolve("padding-left")?;
/// assert!(Arc::ptr_eq(&first, &second));
/// # Ok::<(), tinct::DirectiveError>(())
/// ```
pub struct PropertyRegistry<S: Surfaced> {
    /// Explicitly registered descriptors.
    table: RwLock<HashMap<String, Arc<PropertyDescriptor<S>>>>,
    /// Descriptors found by discovery.
    discovered: RwLock<HashMap<String, Arc<PropertyDescriptor<S>>>>,
}

impl<S: Surfaced> PropertyRegistry<S> {
    /// Create a registry that resolves by discovery only.
    pub fn new() -> Self {
        Self {
            table: RwLock::new(HashMap::new()),
            discovered: RwLock::new(HashMap::new()),
        }
    }

    /// Register a descriptor under its own name.
    ///
    /// Registered descriptors take precedence over discovered ones.
    pub fn register(&self, descriptor: PropertyDescriptor<S>) -> Arc<PropertyDescriptor<S>> {
        let descriptor = Arc::new(descriptor);
        tracing::debug!(
            target: targets::REGISTRY,
            property = descriptor.name(),
            "registered property"
        );
        self.table
            .write()
            .insert(descriptor.name().to_string(), Arc::clone(&descriptor));
        descriptor
    }

    /// Resolve a kebab-case property name.
    #[tracing::instrument(skip(self), target = "tinct::registry", level = "trace")]
    pub fn resolve(&self, name: &str) -> Result<Arc<PropertyDescriptor<S>>, DirectiveError> {
        if let Some(descriptor) = self.table.read().get(name) {
            return Ok(Arc::clone(descriptor));
        }
        if let Some(descriptor) = self.discovered.read().get(name) {
            return Ok(Arc::clone(descriptor));
        }

        let mut discovered = self.discovered.write();
        // Another thread may have discovered it while we waited for the lock.
        if let Some(descriptor) = discovered.get(name) {
            return Ok(Arc::clone(descriptor));
        }

        let descriptor = Arc::new(discover::<S>(name)?);
        tracing::debug!(
            target: targets::REGISTRY,
            property = name,
            params = ?descriptor.arg_kinds(),
            variadic = ?descriptor.variadic_kind(),
            can_unset = descriptor.can_unset(),
            "discovered property"
        );
        discovered.insert(name.to_string(), Arc::clone(&descriptor));
        Ok(descriptor)
    }

    /// Every resolvable property name, sorted.
    pub fn properties(&self) -> Vec<String> {
        let mut names: BTreeSet<String> = S::surface()
            .setters
            .iter()
            .map(|setter| kebab_case(setter.name))
            .collect();
        names.extend(self.table.read().keys().cloned());
        names.into_iter().collect()
    }

    /// Number of descriptors held by the discovery cache.
    pub fn discovered_len(&self) -> usize {
        self.discovered.read().len()
    }
}

impl<S: Surfaced> Default for PropertyRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyRegistry<Style> {
    /// The process-wide registry for [`Style`].
    pub fn global() -> &'static Self {
        static GLOBAL: OnceLock<PropertyRegistry<Style>> = OnceLock::new();
        GLOBAL.get_or_init(PropertyRegistry::new)
    }
}

/// Derive a descriptor from the capability surface.
fn discover<S: Surfaced>(name: &str) -> Result<PropertyDescriptor<S>, DirectiveError> {
    for prefix in OperationPrefix::ALL {
        if let Some(property) = name.strip_prefix(prefix.as_str()) {
            return Err(DirectiveError::OperationPrefix {
                prefix,
                property: property.to_string(),
                args: None,
            });
        }
    }
    if !is_property_name(name) {
        return Err(DirectiveError::unknown_property(name));
    }

    let native = snake_case(name);
    let surface = S::surface();
    if let Some(setter) = surface.setter(&native) {
        return Ok(PropertyDescriptor::from_surface(
            name,
            setter,
            surface.unsetter(&native),
        ));
    }

    match surface.rejected(&native).map(|rejected| rejected.reason) {
        Some(Rejection::ReturnsNonStyle) => Err(DirectiveError::NotStyleReturning { method: native }),
        Some(Rejection::UnsupportedParameter { ty }) => Err(DirectiveError::UnsupportedShape {
            method: native,
            ty: ty.to_string(),
        }),
        None => Err(DirectiveError::unknown_property(name)),
    }
}

assert_impl_all!(Style: Send, Sync);
assert_impl_all!(PropertyRegistry<Style>: Send, Sync);
assert_impl_all!(PropertyDescriptor<Style>: Send, Sync);
