//! Core runtime for FacetDB: the raw value model, the type-aware
//! comparator, the unique/order/window pipeline, catalog collaborator
//! traits, and observability.
#![warn(unreachable_pub)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod obs;
pub mod query;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
/// No sinks, counters, or helpers are re-exported here.
///

pub mod prelude {
    pub use crate::{
        catalog::{Catalog, Dataset},
        error::Error,
        model::{DatasetKind, DatasetSchema, FieldModel},
        query::{PageRequest, ResultPage, SortDirective, UniqueValues},
        value::Value,
    };
}
