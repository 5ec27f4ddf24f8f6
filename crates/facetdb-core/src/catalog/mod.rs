mod memory;

pub use memory::{MemoryCatalog, MemoryDataset};

use crate::{
    model::{DatasetKind, DatasetSchema},
    value::Value,
};
use thiserror::Error as ThisError;

///
/// AccessError
///
/// Storage-layer read failure surfaced by a dataset's value source. The
/// pipeline propagates it unchanged inside `Error::DataAccessFailure`.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{message}")]
pub struct AccessError {
    pub message: String,
}

impl AccessError {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

///
/// Catalog
///
/// Dataset lookup boundary supplied by the host application.
///

pub trait Catalog {
    /// Resolve a dataset handle by name; `None` means not found.
    fn dataset(&self, name: &str) -> Option<&dyn Dataset>;
}

///
/// Dataset
///
/// One cataloged dataset: identity, kind, schema access, and the raw
/// value source feeding the unique reducer.
///

pub trait Dataset {
    /// Stable dataset name as registered in the catalog.
    fn name(&self) -> &str;

    fn kind(&self) -> DatasetKind;

    /// Schema of the dataset, or `None` when the handle resolves but
    /// exposes no usable schema.
    fn schema(&self) -> Option<&DatasetSchema>;

    /// Raw, unfiltered sequence of values for `field`, one per record.
    /// Duplicates and nulls are expected; reduction happens downstream.
    fn field_values(&self, field: &str) -> Result<Vec<Value>, AccessError>;
}
