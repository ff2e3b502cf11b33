//! Functional construction: building a type from a name and a member list.

use crate::declaration::{AutoValue, Declaration, DeclaredValue};
use crate::enum_type::EnumType;
use crate::error::Result;
use crate::hook::ValueHook;
use crate::options::BuildOptions;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

/// One entry of a functional member list.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum MemberSpec<V> {
    /// Name only; the value comes from the hook.
    Name(Arc<str>),
    /// Name with an explicit value.
    Pair(Arc<str>, V),
}

impl<V> MemberSpec<V> {
    pub fn name(&self) -> &str {
        match self {
            MemberSpec::Name(name) | MemberSpec::Pair(name, _) => name,
        }
    }
}

impl<V> From<&str> for MemberSpec<V> {
    fn from(name: &str) -> Self {
        MemberSpec::Name(Arc::from(name))
    }
}

impl<V> From<String> for MemberSpec<V> {
    fn from(name: String) -> Self {
        MemberSpec::Name(Arc::from(name))
    }
}

impl<V> From<Arc<str>> for MemberSpec<V> {
    fn from(name: Arc<str>) -> Self {
        MemberSpec::Name(name)
    }
}

impl<V> From<(&str, V)> for MemberSpec<V> {
    fn from((name, value): (&str, V)) -> Self {
        MemberSpec::Pair(Arc::from(name), value)
    }
}

/// Split a `"A B, C"` style member list into names.
///
/// Commas and whitespace both separate; empty pieces are skipped.
pub fn split_names(names: &str) -> impl Iterator<Item = &str> {
    names
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
}

impl<V> EnumType<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Build a type from `specs`, in the order given.
    ///
    /// Name-only specs are auto-valued through `hook`. Repeated names are
    /// rejected by the declaration, exactly as in a declarative definition.
    pub fn functional<I>(
        name: &str,
        specs: I,
        hook: &dyn ValueHook<V>,
        options: &BuildOptions,
    ) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<MemberSpec<V>>,
    {
        let mut declaration = Declaration::new();
        for spec in specs {
            match spec.into() {
                MemberSpec::Name(member) => {
                    declaration.insert(member, AutoValue::new())?;
                }
                MemberSpec::Pair(member, value) => {
                    declaration.insert(member, DeclaredValue::Explicit(value))?;
                }
            }
        }
        Self::finalize(name, declaration, hook, options)
    }
}

#[cfg(test)]
#[path = "../tests/functional_tests.rs"]
mod tests;
