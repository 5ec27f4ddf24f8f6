use crate::{
    query::SortDirective,
    value::{Value, value_cmp},
};

/// Order the distinct values under the requested directive.
///
/// `Unspecified` performs no sort pass and returns the input order
/// untouched. Descending inverts the comparator operands rather than
/// reversing an ascending result, so pairs the comparator treats as equal
/// keep the same relative behavior in both directions.
#[must_use]
pub fn order(mut values: Vec<Value>, directive: SortDirective) -> Vec<Value> {
    match directive {
        SortDirective::Unspecified => {}
        SortDirective::Asc => values.sort_by(value_cmp),
        SortDirective::Desc => values.sort_by(|left, right| value_cmp(right, left)),
    }

    values
}

///
/// TESTS
///
