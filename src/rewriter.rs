//! Declaration rewriting.
//!
//! Runs on a [`Declaration`] right before it is finalized and turns every
//! placeholder member into an auto-valued one. Explicit values and members
//! that already carry an auto marker are left alone, and member order does
//! not change.

use strenum_engine::{AutoValue, Declaration, DeclaredValue};
use tracing::{debug, trace};

/// Replace every [`DeclaredValue::Placeholder`] in `declaration` with
/// [`DeclaredValue::Auto`]. Returns the number of members rewritten.
pub fn rewrite_placeholders<V>(declaration: &mut Declaration<V>) -> usize {
    let mut rewritten = 0;
    for (name, value) in declaration.iter_mut() {
        if value.is_placeholder() {
            trace!(member = %name, "placeholder -> auto");
            *value = DeclaredValue::Auto(AutoValue::new());
            rewritten += 1;
        }
    }
    if rewritten > 0 {
        debug!(rewritten, "rewrote placeholder members");
    }
    rewritten
}

#[cfg(test)]
#[path = "../tests/rewriter_tests.rs"]
mod tests;
