use crate::model::FieldModel;
use serde::{Deserialize, Serialize};
use std::fmt;

///
/// DatasetKind
///
/// Runtime dataset classification. Only vector (tabular feature) datasets
/// are queryable; every other kind is rejected by the executor.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DatasetKind {
    Vector,
    Raster,
}

impl DatasetKind {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vector => "vector",
            Self::Raster => "raster",
        }
    }

    #[must_use]
    pub const fn is_vector(self) -> bool {
        matches!(self, Self::Vector)
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

///
/// DatasetSchema
/// Ordered field list, authoritative for field validation.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct DatasetSchema {
    fields: Vec<FieldModel>,
}

impl DatasetSchema {
    #[must_use]
    pub const fn new(fields: Vec<FieldModel>) -> Self {
        Self { fields }
    }

    /// Look up a field by exact name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldModel> {
        self.fields.iter().find(|field| field.name == name)
    }

    #[must_use]
    pub fn fields(&self) -> &[FieldModel] {
        &self.fields
    }

    pub fn push_field(&mut self, field: FieldModel) {
        self.fields.push(field);
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueTag;

    #[test]
    fn field_lookup_is_exact() {
        let schema = DatasetSchema::new(vec![
            FieldModel::new("name", ValueTag::Text),
            FieldModel::new("population", ValueTag::Int64),
        ]);

        assert!(schema.field("population").is_some());
        assert!(schema.field("Population").is_none());
        assert!(schema.field(" population").is_none());
        assert!(schema.field("missing").is_none());
    }

    #[test]
    fn kind_labels() {
        assert_eq!(DatasetKind::Vector.to_string(), "vector");
        assert_eq!(DatasetKind::Raster.to_string(), "raster");
        assert!(DatasetKind::Vector.is_vector());
        assert!(!DatasetKind::Raster.is_vector());
    }
}
