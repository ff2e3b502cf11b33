//! Enumerated-type engine.
//!
//! This crate owns everything that happens when an enumerated type is
//! finalized:
//!
//! - Ordered declarations (`Declaration`, `DeclaredValue`, `AutoValue`)
//! - Member name validation and reserved names
//! - Value hooks for auto-valued members (`ValueHook`, `Sequential`)
//! - Alias / unique handling of duplicate values (`DuplicatePolicy`)
//! - Finalized types and their lookups (`EnumType`, `Member`)
//! - Functional construction from member lists (`MemberSpec`)
//!
//! Layers built on top only prepare inputs for [`EnumType::finalize`] and
//! [`EnumType::functional`]; all errors come from here.

pub mod declaration;
pub use declaration::{AutoValue, Declaration, DeclaredValue};

pub mod enum_type;
pub use enum_type::{EnumId, EnumType, Member};

pub mod error;
pub use error::{EnumError, InvalidNameReason, Result};

pub mod functional;
pub use functional::{MemberSpec, split_names};

pub mod hook;
pub use hook::{Sequential, ValueHook};

pub mod names;

pub mod options;
pub use options::{BuildOptions, DuplicatePolicy};
