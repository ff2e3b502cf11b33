//! Auto-value naming policy.

use crate::StrValue;
use std::sync::Arc;
use strenum_engine::ValueHook;

/// Value hook that gives every auto-valued member its own name.
///
/// `start`, `count` and `last_values` are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct NameAsValue;

impl ValueHook<StrValue> for NameAsValue {
    fn next_value(
        &self,
        name: &str,
        _start: i64,
        _count: usize,
        _last_values: &[StrValue],
    ) -> StrValue {
        Arc::from(name)
    }
}

#[cfg(test)]
#[path = "../tests/policy_tests.rs"]
mod tests;
