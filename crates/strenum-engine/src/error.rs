//! Engine errors.
//!
//! Every failure of type construction or fallible lookup is reported through
//! [`EnumError`]. Layers built on top of the engine propagate these unchanged.

use thiserror::Error;

/// Result alias used throughout the engine.
pub type Result<T, E = EnumError> = std::result::Result<T, E>;

/// Why a member name was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvalidNameReason {
    /// The name is the empty string.
    Empty,
    /// The name starts with a digit.
    LeadingDigit,
    /// The name contains a character that cannot appear in an identifier.
    BadCharacter(char),
}

impl std::fmt::Display for InvalidNameReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidNameReason::Empty => f.write_str("name is empty"),
            InvalidNameReason::LeadingDigit => f.write_str("name starts with a digit"),
            InvalidNameReason::BadCharacter(c) => write!(f, "unexpected character {c:?}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum EnumError {
    /// A declaration tried to bind the same member name twice.
    #[error("attempted to reuse key: {name:?}")]
    DuplicateName { name: String },

    /// The member name is not a valid identifier.
    #[error("invalid enum member name {name:?}: {reason}")]
    InvalidName {
        name: String,
        reason: InvalidNameReason,
    },

    /// The member name is reserved by the engine (`_sunder_`, `__dunder__`, `mro`).
    #[error("{name:?} is reserved for enum internals")]
    ReservedName { name: String },

    /// Two or more members share a value under the `unique` duplicate policy.
    /// `aliases` holds `(alias, canonical)` pairs in declaration order.
    #[error("duplicate values found in <enum '{enum_name}'>: {}", format_aliases(.aliases))]
    DuplicateValues {
        enum_name: String,
        aliases: Vec<(String, String)>,
    },

    /// A placeholder reached finalization without being rewritten to an auto marker.
    #[error("member {member:?} of enum '{enum_name}' still holds a placeholder value")]
    UnresolvedPlaceholder { enum_name: String, member: String },

    /// Name lookup on a finalized type failed.
    #[error("'{enum_name}' has no member named {name:?}")]
    UnknownMember { enum_name: String, name: String },

    /// Value lookup on a finalized type failed.
    #[error("{value} is not a valid {enum_name}")]
    InvalidValue { enum_name: String, value: String },

    /// Build options could not be parsed.
    #[error("invalid build options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

fn format_aliases(aliases: &[(String, String)]) -> String {
    aliases
        .iter()
        .map(|(alias, canonical)| format!("{alias} -> {canonical}"))
        .collect::<Vec<_>>()
        .join(", ")
}
