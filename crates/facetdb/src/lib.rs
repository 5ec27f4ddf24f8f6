//! FacetDB — distinct field-value faceting over cataloged vector datasets.
//!
//! ## Crate layout
//! - `core`: raw value model, type-aware comparator, the
//!   unique → order → window pipeline, catalog collaborator traits, and
//!   observability.
//!
//! The `prelude` module mirrors the runtime surface used by host code.

pub use facetdb_core as core;

pub use facetdb_core::error::Error;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Host Prelude
///

pub mod prelude {
    pub use crate::core::{
        catalog::{AccessError, Catalog, Dataset, MemoryCatalog, MemoryDataset},
        error::{Error, ErrorClass},
        model::{DatasetKind, DatasetSchema, FieldModel},
        obs::{CounterState, MetricsEvent, MetricsSink, metrics_report, metrics_reset_all},
        query::{
            PageRequest, ResultPage, SortDirective, UniqueValues, UniqueValuesRequest,
        },
        value::{Float32, Float64, Value, ValueTag},
    };
}
