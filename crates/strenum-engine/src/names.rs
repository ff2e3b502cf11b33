//! Member name validation.

use crate::error::{EnumError, InvalidNameReason, Result};

/// Names that would shadow engine machinery.
const RESERVED_NAMES: &[&str] = &["mro"];

/// Check if `name` is a `_sunder_` name (single leading and trailing underscore).
pub fn is_sunder(name: &str) -> bool {
    let bytes = name.as_bytes();
    bytes.len() > 2
        && bytes[0] == b'_'
        && bytes[bytes.len() - 1] == b'_'
        && bytes[1] != b'_'
        && bytes[bytes.len() - 2] != b'_'
}

/// Check if `name` is a `__dunder__` name.
pub fn is_dunder(name: &str) -> bool {
    name.len() > 4
        && name.starts_with("__")
        && name.ends_with("__")
        && name.as_bytes()[2] != b'_'
        && name.as_bytes()[name.len() - 3] != b'_'
}

/// Check if a character can start a member name.
fn is_identifier_start(ch: char) -> bool {
    ch == '_' || ch.is_alphabetic()
}

/// Check if a character can be part of a member name.
fn is_identifier_part(ch: char) -> bool {
    ch == '_' || ch.is_alphanumeric()
}

/// Validate a member name before it enters a declaration.
///
/// Names follow Unicode identifier rules, so `CAFÉ` is accepted.
pub fn validate_member_name(name: &str) -> Result<()> {
    let invalid = |reason| EnumError::InvalidName {
        name: name.to_string(),
        reason,
    };

    let mut chars = name.chars();
    match chars.next() {
        None => return Err(invalid(InvalidNameReason::Empty)),
        Some(c) if c.is_ascii_digit() => return Err(invalid(InvalidNameReason::LeadingDigit)),
        Some(c) if !is_identifier_start(c) => {
            return Err(invalid(InvalidNameReason::BadCharacter(c)));
        }
        Some(_) => {}
    }
    if let Some(bad) = chars.find(|&c| !is_identifier_part(c)) {
        return Err(invalid(InvalidNameReason::BadCharacter(bad)));
    }

    if is_sunder(name) || is_dunder(name) || RESERVED_NAMES.contains(&name) {
        return Err(EnumError::ReservedName {
            name: name.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/names_tests.rs"]
mod tests;
