//! In-progress type declarations.
//!
//! A [`Declaration`] is the ordered `name -> declared value` table of a type
//! that has not been finalized yet. It lives only for the duration of type
//! construction and is consumed by [`EnumType::finalize`](crate::EnumType::finalize).
//!
//! Insertion order is member order. Replacing a value through [`Declaration::get_mut`]
//! or [`Declaration::iter_mut`] keeps the member at its original position.

use crate::error::{EnumError, Result};
use crate::names::validate_member_name;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::sync::Arc;

/// Request for the engine to compute a member value at finalization time.
///
/// The value is produced by the [`ValueHook`](crate::ValueHook) passed to
/// finalization; the marker itself carries nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct AutoValue {
    _private: (),
}

impl AutoValue {
    pub const fn new() -> Self {
        AutoValue { _private: () }
    }
}

/// The value bound to a member name in a declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeclaredValue<V> {
    /// "No value supplied". Must be rewritten to [`DeclaredValue::Auto`]
    /// before finalization.
    Placeholder,
    /// Compute the value with the finalization hook.
    Auto(AutoValue),
    /// A concrete value.
    Explicit(V),
}

impl<V> DeclaredValue<V> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, DeclaredValue::Placeholder)
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, DeclaredValue::Auto(_))
    }

    pub fn explicit(&self) -> Option<&V> {
        match self {
            DeclaredValue::Explicit(value) => Some(value),
            _ => None,
        }
    }
}

/// The empty grouping `()` is the placeholder spelling.
impl<V> From<()> for DeclaredValue<V> {
    fn from((): ()) -> Self {
        DeclaredValue::Placeholder
    }
}

impl From<&str> for DeclaredValue<Arc<str>> {
    fn from(value: &str) -> Self {
        DeclaredValue::Explicit(Arc::from(value))
    }
}

impl From<String> for DeclaredValue<Arc<str>> {
    fn from(value: String) -> Self {
        DeclaredValue::Explicit(Arc::from(value))
    }
}

impl From<Arc<str>> for DeclaredValue<Arc<str>> {
    fn from(value: Arc<str>) -> Self {
        DeclaredValue::Explicit(value)
    }
}

impl From<i64> for DeclaredValue<i64> {
    fn from(value: i64) -> Self {
        DeclaredValue::Explicit(value)
    }
}

impl<V> From<AutoValue> for DeclaredValue<V> {
    fn from(marker: AutoValue) -> Self {
        DeclaredValue::Auto(marker)
    }
}

/// Ordered member table of a type under construction.
#[derive(Clone, Debug)]
pub struct Declaration<V> {
    entries: IndexMap<Arc<str>, DeclaredValue<V>>,
}

impl<V> Default for Declaration<V> {
    fn default() -> Self {
        Declaration {
            entries: IndexMap::new(),
        }
    }
}

impl<V> Declaration<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`.
    ///
    /// Fails if the name is not a valid member name or is already bound.
    pub fn insert(
        &mut self,
        name: impl Into<Arc<str>>,
        value: impl Into<DeclaredValue<V>>,
    ) -> Result<()> {
        let name = name.into();
        validate_member_name(&name)?;
        match self.entries.entry(name) {
            Entry::Occupied(entry) => Err(EnumError::DuplicateName {
                name: entry.key().to_string(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(value.into());
                Ok(())
            }
        }
    }

    /// Builder-style [`Declaration::insert`].
    pub fn with(
        mut self,
        name: impl Into<Arc<str>>,
        value: impl Into<DeclaredValue<V>>,
    ) -> Result<Self> {
        self.insert(name, value)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&DeclaredValue<V>> {
        self.entries.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut DeclaredValue<V>> {
        self.entries.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Member names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &DeclaredValue<V>)> {
        self.entries.iter()
    }

    /// Mutable access to the declared values. Names and order are fixed.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&Arc<str>, &mut DeclaredValue<V>)> {
        self.entries.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_placeholders(&self) -> bool {
        self.entries.values().any(DeclaredValue::is_placeholder)
    }

    pub(crate) fn into_entries(self) -> impl Iterator<Item = (Arc<str>, DeclaredValue<V>)> {
        self.entries.into_iter()
    }
}

#[cfg(test)]
#[path = "../tests/declaration_tests.rs"]
mod tests;
