//! Value hooks.
//!
//! A [`ValueHook`] computes the value of every member declared with
//! [`DeclaredValue::Auto`](crate::DeclaredValue::Auto). The engine calls it
//! once per auto member, in declaration order, with:
//!
//! - `name`: the member being finalized
//! - `start`: [`BuildOptions::start`](crate::BuildOptions::start)
//! - `count`: number of members finalized before this one
//! - `last_values`: their values, in order

/// Strategy computing the value of an auto-valued member.
pub trait ValueHook<V> {
    fn next_value(&self, name: &str, start: i64, count: usize, last_values: &[V]) -> V;
}

impl<V, F> ValueHook<V> for F
where
    F: Fn(&str, i64, usize, &[V]) -> V,
{
    fn next_value(&self, name: &str, start: i64, count: usize, last_values: &[V]) -> V {
        self(name, start, count, last_values)
    }
}

/// Integer auto-numbering: one past the largest earlier value, or `start`
/// for the first member.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl ValueHook<i64> for Sequential {
    fn next_value(&self, _name: &str, start: i64, _count: usize, last_values: &[i64]) -> i64 {
        last_values
            .iter()
            .max()
            .map_or(start, |last| last.saturating_add(1))
    }
}

#[cfg(test)]
#[path = "../tests/hook_tests.rs"]
mod tests;
