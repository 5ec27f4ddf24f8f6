mod dataset;
mod field;

pub use dataset::{DatasetKind, DatasetSchema};
pub use field::FieldModel;
