//! String-valued enumerated types.
//!
//! Members of a [`StrEnum`] are strings: they compare, hash and format as
//! their value. Two construction conveniences sit on top of the
//! `strenum-engine` crate:
//!
//! - Placeholder members. A member declared without a value (or with `()`)
//!   is rewritten to an auto-valued member before finalization, and its
//!   value becomes its own name.
//! - Deduplicating functional construction. [`StrEnum::build`] accepts names
//!   and members of other types, drops duplicates and keeps first-seen order.
//!
//! ```
//! use strenum::{StrEnum, str_enum};
//!
//! let primary = str_enum!(Primary { RED, GREEN = (), BLUE }).unwrap();
//! let warm = StrEnum::build("Warm", Some(["RED", "ORANGE", "YELLOW"])).unwrap();
//! let merged = StrEnum::build("Merged", Some(primary.iter().chain(warm.iter()))).unwrap();
//!
//! assert_eq!(
//!     merged.names().collect::<Vec<_>>(),
//!     ["RED", "GREEN", "BLUE", "ORANGE", "YELLOW"]
//! );
//! assert_eq!(format!("{}", merged.member("RED").unwrap()), "RED");
//! ```

// Placeholder rewriting before finalization
pub mod rewriter;
pub use rewriter::rewrite_placeholders;

// Name-as-value hook
pub mod policy;
pub use policy::NameAsValue;

// Member string contract
pub mod member;
pub use member::StrMember;

// Deduplicating functional construction
pub mod functional;
pub use functional::{StrSpec, dedup_specs};

// Finalized types
pub mod str_enum;
pub use str_enum::{Members, StrEnum};

// Declarative macro
mod macros;

// Log subscriber setup
pub mod tracing_config;

pub use strenum_engine::{
    AutoValue, BuildOptions, Declaration, DeclaredValue, DuplicatePolicy, EnumError, EnumId,
    EnumType, InvalidNameReason, Member, MemberSpec, Result, ValueHook, split_names,
};

/// Value type of every string-valued member.
pub type StrValue = std::sync::Arc<str>;

#[doc(hidden)]
pub mod __private {
    pub use once_cell::sync::Lazy;

    /// Member name of a stringified identifier, without the raw `r#` prefix.
    pub fn member_name(ident: &str) -> &str {
        ident.strip_prefix("r#").unwrap_or(ident)
    }
}

#[cfg(test)]
#[path = "../tests/macro_tests.rs"]
mod macro_tests;
