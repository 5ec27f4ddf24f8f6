use crate::value::Value;
use std::collections::HashSet;

/// Reduce a raw value sequence to its distinct values.
///
/// Equality is native per kind: numerically equal values of different kinds
/// (`Int32(3)` vs `Float64(3.0)`) stay distinct, and `Null` collapses to a
/// single representative co-equal with any other value. First-occurrence
/// order is preserved so an unsorted pipeline stays deterministic for a
/// given input order.
#[must_use]
pub fn unique(values: Vec<Value>) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(values.len());
    let mut distinct = Vec::new();

    for value in values {
        if seen.insert(value.clone()) {
            distinct.push(value);
        }
    }

    distinct
}

///
/// TESTS
///
