//! Finalized enumerated types.
//!
//! [`EnumType::finalize`] turns a [`Declaration`] into an immutable type:
//!
//! 1. Each member value is resolved: explicit values are kept, auto markers
//!    are handed to the [`ValueHook`], placeholders are an error.
//! 2. A value already held by an earlier member makes the new name an alias
//!    of that member ([`DuplicatePolicy::Alias`]) or is collected and reported
//!    ([`DuplicatePolicy::Unique`]).
//! 3. Canonical members keep declaration order.

use crate::declaration::{Declaration, DeclaredValue};
use crate::error::{EnumError, Result};
use crate::hook::ValueHook;
use crate::options::{BuildOptions, DuplicatePolicy};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::{debug, trace};

/// Global counter for assigning unique ids to finalized types.
static NEXT_ENUM_ID: AtomicU32 = AtomicU32::new(1);

/// Identity of a finalized type. Never reused within a process.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnumId(pub u32);

impl EnumId {
    fn fresh() -> Self {
        EnumId(NEXT_ENUM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A single member of a finalized type.
///
/// Cloning is cheap: names are shared and the value is cloned.
#[derive(Clone)]
pub struct Member<V> {
    owner: EnumId,
    owner_name: Arc<str>,
    index: usize,
    name: Arc<str>,
    value: V,
}

impl<V> Member<V> {
    /// The type this member belongs to.
    pub fn owner(&self) -> EnumId {
        self.owner
    }

    pub fn owner_name(&self) -> &str {
        &self.owner_name
    }

    /// Position among the canonical members of the owning type.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    /// Same type, same slot.
    pub fn is(&self, other: &Member<V>) -> bool {
        self.owner == other.owner && self.index == other.index
    }
}

/// `Color.RED`
impl<V> fmt::Display for Member<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owner_name, self.name)
    }
}

/// `<Color.RED: "RED">`
impl<V: fmt::Debug> fmt::Debug for Member<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}.{}: {:?}>", self.owner_name, self.name, self.value)
    }
}

/// A finalized, immutable enumerated type.
pub struct EnumType<V> {
    id: EnumId,
    name: Arc<str>,
    qualname: Arc<str>,
    module: Option<Arc<str>>,
    /// Canonical members in declaration order.
    members: Vec<Member<V>>,
    /// Every bound name, aliases included, to a canonical member index.
    by_name: IndexMap<Arc<str>, usize>,
    /// Value to the first canonical member holding it.
    by_value: FxHashMap<V, usize>,
}

impl<V> EnumType<V>
where
    V: Clone + Eq + Hash + fmt::Debug,
{
    /// Finalize `declaration` into a new type.
    pub fn finalize(
        name: &str,
        declaration: Declaration<V>,
        hook: &dyn ValueHook<V>,
        options: &BuildOptions,
    ) -> Result<Self> {
        let _span = tracing::debug_span!("finalize_enum", name).entered();

        let owner = EnumId::fresh();
        let owner_name: Arc<str> = Arc::from(name);
        let mut members: Vec<Member<V>> = Vec::with_capacity(declaration.len());
        let mut by_name = IndexMap::with_capacity(declaration.len());
        let mut by_value: FxHashMap<V, usize> = FxHashMap::default();
        let mut last_values: Vec<V> = Vec::with_capacity(declaration.len());
        let mut aliases: Vec<(String, String)> = Vec::new();

        for (member_name, declared) in declaration.into_entries() {
            let value = match declared {
                DeclaredValue::Explicit(value) => value,
                DeclaredValue::Auto(_) => {
                    hook.next_value(&member_name, options.start, last_values.len(), &last_values)
                }
                DeclaredValue::Placeholder => {
                    return Err(EnumError::UnresolvedPlaceholder {
                        enum_name: name.to_string(),
                        member: member_name.to_string(),
                    });
                }
            };
            last_values.push(value.clone());

            if let Some(&canonical) = by_value.get(&value) {
                trace!(member = %member_name, canonical = %members[canonical].name, "alias");
                if options.duplicates == DuplicatePolicy::Unique {
                    aliases.push((member_name.to_string(), members[canonical].name.to_string()));
                }
                by_name.insert(member_name, canonical);
                continue;
            }

            let index = members.len();
            trace!(member = %member_name, value = ?value, index, "member");
            by_value.insert(value.clone(), index);
            by_name.insert(member_name.clone(), index);
            members.push(Member {
                owner,
                owner_name: owner_name.clone(),
                index,
                name: member_name,
                value,
            });
        }

        if !aliases.is_empty() {
            return Err(EnumError::DuplicateValues {
                enum_name: name.to_string(),
                aliases,
            });
        }

        debug!(
            id = owner.0,
            members = members.len(),
            aliases = by_name.len() - members.len(),
            "finalized enum"
        );

        Ok(EnumType {
            id: owner,
            qualname: options
                .qualname
                .as_deref()
                .map_or_else(|| owner_name.clone(), Arc::from),
            name: owner_name,
            module: options.module.as_deref().map(Arc::from),
            members,
            by_name,
            by_value,
        })
    }

    /// Member holding `value`, if any.
    pub fn lookup<Q>(&self, value: &Q) -> Option<&Member<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_value.get(value).map(|&index| &self.members[index])
    }

    /// Like [`EnumType::lookup`] but reports a miss as [`EnumError::InvalidValue`].
    pub fn value_of<Q>(&self, value: &Q) -> Result<&Member<V>>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.lookup(value).ok_or_else(|| EnumError::InvalidValue {
            enum_name: self.name.to_string(),
            value: format!("{value:?}"),
        })
    }

    pub fn contains_value<Q>(&self, value: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.by_value.contains_key(value)
    }
}

impl<V> EnumType<V> {
    pub fn id(&self) -> EnumId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn qualname(&self) -> &str {
        &self.qualname
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// Number of canonical members (aliases excluded).
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Canonical members in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Member<V>> {
        self.members.iter()
    }

    /// Every bound name with the member it resolves to, aliases included.
    pub fn iter_with_aliases(&self) -> impl Iterator<Item = (&str, &Member<V>)> {
        self.by_name
            .iter()
            .map(|(name, &index)| (&**name, &self.members[index]))
    }

    /// Canonical member names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(Member::name)
    }

    /// Member bound to `name`, following aliases.
    pub fn get(&self, name: &str) -> Option<&Member<V>> {
        self.by_name.get(name).map(|&index| &self.members[index])
    }

    /// Like [`EnumType::get`] but reports a miss as [`EnumError::UnknownMember`].
    pub fn member(&self, name: &str) -> Result<&Member<V>> {
        self.get(name).ok_or_else(|| EnumError::UnknownMember {
            enum_name: self.name.to_string(),
            name: name.to_string(),
        })
    }

    /// Check if `member` belongs to this type.
    pub fn contains(&self, member: &Member<V>) -> bool {
        member.owner == self.id
    }
}

impl<'a, V> IntoIterator for &'a EnumType<V> {
    type Item = &'a Member<V>;
    type IntoIter = std::slice::Iter<'a, Member<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}

/// `<enum 'Color'>`
impl<V> fmt::Display for EnumType<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<enum '{}'>", self.name)
    }
}

impl<V: fmt::Debug> fmt::Debug for EnumType<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumType")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("members", &self.members)
            .finish()
    }
}

#[cfg(test)]
#[path = "../tests/enum_type_tests.rs"]
mod tests;
