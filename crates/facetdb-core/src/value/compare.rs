use crate::value::Value;
use std::cmp::Ordering;

/// Total comparator over raw field values.
///
/// Ordering rules:
/// 1. `Null` equals `Null` and sorts before every non-null value.
/// 2. Same-kind pairs use the kind's natural ordering (lexicographic text,
///    numeric integers, `total_cmp` floats).
/// 3. Every other pairing compares as `Equal`.
///
/// Rule 3 is load-bearing: a field that unexpectedly contains mixed kinds
/// must still sort without an error, and callers rely on the comparator
/// being a no-op for pairings it does not recognize. The relative order of
/// mixed-kind values is therefore unspecified.
#[must_use]
pub fn value_cmp(left: &Value, right: &Value) -> Ordering {
    match (left, right) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Null, _) => Ordering::Less,
        (_, Value::Null) => Ordering::Greater,
        (Value::Text(a), Value::Text(b)) => a.cmp(b),
        (Value::Int8(a), Value::Int8(b)) => a.cmp(b),
        (Value::Int16(a), Value::Int16(b)) => a.cmp(b),
        (Value::Int32(a), Value::Int32(b)) => a.cmp(b),
        (Value::Int64(a), Value::Int64(b)) => a.cmp(b),
        (Value::Float32(a), Value::Float32(b)) => a.cmp(b),
        (Value::Float64(a), Value::Float64(b)) => a.cmp(b),
        _ => Ordering::Equal,
    }
}
