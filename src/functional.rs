//! Deduplicating functional construction.
//!
//! `StrEnum::build("Z", Some(x.iter().chain(y.iter())))` merges the members
//! of `x` and `y` into a new type. Specs are collapsed by their string
//! payload before they reach the engine: a bare `"A"`, `X.A` and `Y.A` all
//! count as one member `A`. The first occurrence decides the position.

use crate::member::StrMember;
use crate::policy::NameAsValue;
use crate::{StrValue, split_names};
use indexmap::IndexSet;
use std::sync::Arc;
use strenum_engine::{BuildOptions, EnumType, MemberSpec, Result};
use tracing::{debug, trace};

/// One entry of a functional member list.
#[derive(Clone, Debug)]
pub enum StrSpec {
    Name(Arc<str>),
    /// A member borrowed from another type; contributes its value.
    Member(StrMember),
}

impl StrSpec {
    pub fn as_str(&self) -> &str {
        match self {
            StrSpec::Name(name) => name,
            StrSpec::Member(member) => member.as_str(),
        }
    }

    fn into_payload(self) -> Arc<str> {
        match self {
            StrSpec::Name(name) => name,
            StrSpec::Member(member) => member.value_arc().clone(),
        }
    }
}

impl From<&str> for StrSpec {
    fn from(name: &str) -> Self {
        StrSpec::Name(Arc::from(name))
    }
}

impl From<String> for StrSpec {
    fn from(name: String) -> Self {
        StrSpec::Name(Arc::from(name))
    }
}

impl From<Arc<str>> for StrSpec {
    fn from(name: Arc<str>) -> Self {
        StrSpec::Name(name)
    }
}

impl From<StrMember> for StrSpec {
    fn from(member: StrMember) -> Self {
        StrSpec::Member(member)
    }
}

impl From<&StrMember> for StrSpec {
    fn from(member: &StrMember) -> Self {
        StrSpec::Member(member.clone())
    }
}

/// Collapse `specs` to their distinct payloads, keeping first-seen order.
pub fn dedup_specs<I>(specs: I) -> IndexSet<Arc<str>>
where
    I: IntoIterator,
    I::Item: Into<StrSpec>,
{
    let mut unique = IndexSet::new();
    let mut dropped = 0usize;
    for spec in specs {
        let (index, inserted) = unique.insert_full(spec.into().into_payload());
        if !inserted {
            trace!(member = %unique[index], "dropping duplicate member spec");
            dropped += 1;
        }
    }
    if dropped > 0 {
        debug!(dropped, kept = unique.len(), "deduplicated member specs");
    }
    unique
}

/// Functional construction with deduplication. `None` and an empty list both
/// reach the engine as an empty member list.
pub(crate) fn build_deduplicated<I>(
    name: &str,
    members: Option<I>,
    options: &BuildOptions,
) -> Result<EnumType<StrValue>>
where
    I: IntoIterator,
    I::Item: Into<StrSpec>,
{
    match members {
        Some(members) => {
            let unique = dedup_specs(members);
            EnumType::functional(name, unique, &NameAsValue, options)
        }
        None => EnumType::functional(
            name,
            std::iter::empty::<MemberSpec<StrValue>>(),
            &NameAsValue,
            options,
        ),
    }
}

/// Functional construction from a `"A B, C"` member string.
pub(crate) fn build_from_names(
    name: &str,
    names: &str,
    options: &BuildOptions,
) -> Result<EnumType<StrValue>> {
    build_deduplicated(name, Some(split_names(names)), options)
}

#[cfg(test)]
#[path = "../tests/functional_tests.rs"]
mod tests;
