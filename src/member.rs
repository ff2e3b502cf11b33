//! String-valued members.
//!
//! A [`StrMember`] is both a member of its [`StrEnum`] and a string. Every
//! string operation (deref, comparison, hashing, ordering, formatting) uses
//! the member value, so `Color.RED` and `"RED"` are interchangeable in maps,
//! sets and `format!`. Membership and identity go through the owning type
//! instead: [`StrMember::is`] and [`StrMember::is_member_of`].

use crate::StrValue;
use crate::str_enum::StrEnum;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;
use strenum_engine::{EnumId, Member};

#[derive(Clone)]
pub struct StrMember(Member<StrValue>);

impl StrMember {
    pub(crate) fn new(member: Member<StrValue>) -> Self {
        StrMember(member)
    }

    pub fn name(&self) -> &str {
        self.0.name()
    }

    pub fn value(&self) -> &str {
        self.0.value()
    }

    pub fn as_str(&self) -> &str {
        self.0.value()
    }

    pub(crate) fn value_arc(&self) -> &Arc<str> {
        self.0.value()
    }

    pub fn owner(&self) -> EnumId {
        self.0.owner()
    }

    pub fn owner_name(&self) -> &str {
        self.0.owner_name()
    }

    pub fn index(&self) -> usize {
        self.0.index()
    }

    /// Same type and same slot, as opposed to `==`, which compares strings.
    pub fn is(&self, other: &StrMember) -> bool {
        self.0.is(&other.0)
    }

    pub fn is_member_of(&self, ty: &StrEnum) -> bool {
        ty.contains(self)
    }

    /// The engine member, whose `Display` is the `Type.NAME` form.
    pub fn as_member(&self) -> &Member<StrValue> {
        &self.0
    }
}

impl Deref for StrMember {
    type Target = str;

    fn deref(&self) -> &str {
        self.as_str()
    }
}

impl AsRef<str> for StrMember {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for StrMember {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

/// Plain string form: `RED`, never `Color.RED`.
impl fmt::Display for StrMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl fmt::Debug for StrMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl PartialEq for StrMember {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for StrMember {}

impl Hash for StrMember {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl PartialOrd for StrMember {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StrMember {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

macro_rules! impl_str_eq {
    ($($ty:ty),*) => {$(
        impl PartialEq<$ty> for StrMember {
            fn eq(&self, other: &$ty) -> bool {
                self.as_str() == AsRef::<str>::as_ref(other)
            }
        }

        impl PartialEq<StrMember> for $ty {
            fn eq(&self, other: &StrMember) -> bool {
                AsRef::<str>::as_ref(self) == other.as_str()
            }
        }
    )*};
}

impl_str_eq!(str, &str, String, Arc<str>);

impl From<StrMember> for String {
    fn from(member: StrMember) -> Self {
        member.as_str().to_string()
    }
}

impl From<&StrMember> for String {
    fn from(member: &StrMember) -> Self {
        member.as_str().to_string()
    }
}

#[cfg(test)]
#[path = "../tests/member_tests.rs"]
mod tests;
