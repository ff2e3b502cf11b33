//! String-valued enumerated types.
//!
//! Both construction paths end in the engine:
//!
//! - [`StrEnum::define`]: declaration → placeholder rewrite → finalize
//! - [`StrEnum::build`]: member list → dedup → functional construction
//!
//! Auto-valued members always get their own name as value ([`NameAsValue`]).

use crate::StrValue;
use crate::functional::{StrSpec, build_deduplicated, build_from_names};
use crate::member::StrMember;
use crate::policy::NameAsValue;
use crate::rewriter::rewrite_placeholders;
use std::fmt;
use std::sync::Arc;
use strenum_engine::{BuildOptions, Declaration, DeclaredValue, EnumId, EnumType, Member, Result};

/// A finalized string-valued enumerated type.
///
/// Cheap to clone; clones share the same type. Equality is type identity.
#[derive(Clone)]
pub struct StrEnum {
    ty: Arc<EnumType<StrValue>>,
}

/// Iterator over the canonical members of a [`StrEnum`].
pub type Members<'a> =
    std::iter::Map<std::slice::Iter<'a, Member<StrValue>>, fn(&Member<StrValue>) -> StrMember>;

fn wrap(member: &Member<StrValue>) -> StrMember {
    StrMember::new(member.clone())
}

impl StrEnum {
    fn from_type(ty: EnumType<StrValue>) -> Self {
        StrEnum { ty: Arc::new(ty) }
    }

    /// Define a type from a declaration. Placeholder members become
    /// auto-valued and resolve to their own name.
    pub fn define(name: &str, declaration: Declaration<StrValue>) -> Result<Self> {
        Self::define_with(name, declaration, &BuildOptions::default())
    }

    pub fn define_with(
        name: &str,
        mut declaration: Declaration<StrValue>,
        options: &BuildOptions,
    ) -> Result<Self> {
        rewrite_placeholders(&mut declaration);
        let ty = EnumType::finalize(name, declaration, &NameAsValue, options)?;
        Ok(Self::from_type(ty))
    }

    /// Define a type from `(name, value)` pairs in declaration order.
    pub fn declare<'a, I>(name: &str, members: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, DeclaredValue<StrValue>)>,
    {
        let mut declaration = Declaration::new();
        for (member, value) in members {
            declaration.insert(member, value)?;
        }
        Self::define(name, declaration)
    }

    /// Build a type from a member list, dropping duplicate entries.
    ///
    /// Entries are names or members of other types:
    ///
    /// ```
    /// # use strenum::StrEnum;
    /// let x = StrEnum::build("X", Some(["A", "B"])).unwrap();
    /// let y = StrEnum::build("Y", Some(["B", "C"])).unwrap();
    /// let z = StrEnum::build("Z", Some(x.iter().chain(y.iter()))).unwrap();
    /// assert_eq!(z.names().collect::<Vec<_>>(), ["A", "B", "C"]);
    /// ```
    pub fn build<I>(name: &str, members: Option<I>) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<StrSpec>,
    {
        Self::build_with(name, members, &BuildOptions::default())
    }

    pub fn build_with<I>(name: &str, members: Option<I>, options: &BuildOptions) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<StrSpec>,
    {
        build_deduplicated(name, members, options).map(Self::from_type)
    }

    /// Build a type from a comma or whitespace separated member string.
    pub fn build_from_str(name: &str, names: &str) -> Result<Self> {
        build_from_names(name, names, &BuildOptions::default()).map(Self::from_type)
    }

    /// A type with no members.
    pub fn empty(name: &str) -> Result<Self> {
        Self::build(name, None::<[&str; 0]>)
    }

    pub fn id(&self) -> EnumId {
        self.ty.id()
    }

    pub fn name(&self) -> &str {
        self.ty.name()
    }

    pub fn qualname(&self) -> &str {
        self.ty.qualname()
    }

    pub fn module(&self) -> Option<&str> {
        self.ty.module()
    }

    pub fn len(&self) -> usize {
        self.ty.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ty.is_empty()
    }

    /// Canonical members in declaration order.
    pub fn iter(&self) -> Members<'_> {
        self.ty.iter().map(wrap as fn(&Member<StrValue>) -> StrMember)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.ty.names()
    }

    /// Every bound name, aliases included, with the member it resolves to.
    pub fn iter_with_aliases(&self) -> impl Iterator<Item = (&str, StrMember)> {
        self.ty
            .iter_with_aliases()
            .map(|(name, member)| (name, wrap(member)))
    }

    /// Member bound to `name`.
    pub fn get(&self, name: &str) -> Option<StrMember> {
        self.ty.get(name).map(wrap)
    }

    pub fn member(&self, name: &str) -> Result<StrMember> {
        self.ty.member(name).map(wrap)
    }

    /// Member whose value is `value`.
    pub fn lookup(&self, value: &str) -> Option<StrMember> {
        self.ty.lookup(value).map(wrap)
    }

    pub fn value_of(&self, value: &str) -> Result<StrMember> {
        self.ty.value_of(value).map(wrap)
    }

    pub fn contains(&self, member: &StrMember) -> bool {
        self.ty.contains(member.as_member())
    }

    pub fn contains_value(&self, value: &str) -> bool {
        self.ty.contains_value(value)
    }

    pub fn as_enum_type(&self) -> &EnumType<StrValue> {
        &self.ty
    }
}

impl<'a> IntoIterator for &'a StrEnum {
    type Item = StrMember;
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for StrEnum {
    fn eq(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

impl Eq for StrEnum {}

impl fmt::Display for StrEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.ty, f)
    }
}

impl fmt::Debug for StrEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.ty, f)
    }
}

#[cfg(test)]
#[path = "../tests/str_enum_tests.rs"]
mod tests;
