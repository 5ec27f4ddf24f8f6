use crate::{
    catalog::{AccessError, Catalog, Dataset},
    model::{DatasetKind, DatasetSchema, FieldModel},
    value::{Value, ValueTag},
};
use std::collections::BTreeMap;

///
/// MemoryCatalog
/// In-memory catalog keyed by dataset name.
///

#[derive(Debug, Default)]
pub struct MemoryCatalog {
    datasets: BTreeMap<String, MemoryDataset>,
}

impl MemoryCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dataset under its own name, replacing any previous entry.
    pub fn insert(&mut self, dataset: MemoryDataset) {
        self.datasets.insert(dataset.name.clone(), dataset);
    }

    #[must_use]
    pub fn with_dataset(mut self, dataset: MemoryDataset) -> Self {
        self.insert(dataset);
        self
    }
}

impl Catalog for MemoryCatalog {
    fn dataset(&self, name: &str) -> Option<&dyn Dataset> {
        self.datasets.get(name).map(|dataset| dataset as &dyn Dataset)
    }
}

///
/// MemoryDataset
///
/// Column-per-field in-memory dataset. Supports schema suppression and
/// read-failure injection so every executor error path stays testable
/// without a storage backend.
///

#[derive(Debug)]
pub struct MemoryDataset {
    name: String,
    kind: DatasetKind,
    schema: Option<DatasetSchema>,
    columns: BTreeMap<String, Vec<Value>>,
    read_failure: Option<AccessError>,
}

impl MemoryDataset {
    #[must_use]
    pub fn vector(name: impl Into<String>) -> Self {
        Self::new(name, DatasetKind::Vector)
    }

    #[must_use]
    pub fn raster(name: impl Into<String>) -> Self {
        Self::new(name, DatasetKind::Raster)
    }

    fn new(name: impl Into<String>, kind: DatasetKind) -> Self {
        Self {
            name: name.into(),
            kind,
            schema: Some(DatasetSchema::default()),
            columns: BTreeMap::new(),
            read_failure: None,
        }
    }

    /// Add a column: declares the field on the schema and stores its values.
    #[must_use]
    pub fn with_column(mut self, name: &str, kind: ValueTag, values: Vec<Value>) -> Self {
        if let Some(schema) = self.schema.as_mut() {
            schema.push_field(FieldModel::new(name, kind));
        }
        self.columns.insert(name.to_string(), values);
        self
    }

    /// Drop the schema so the handle resolves but exposes none.
    #[must_use]
    pub fn without_schema(mut self) -> Self {
        self.schema = None;
        self
    }

    /// Make every subsequent value read fail with the given message.
    #[must_use]
    pub fn with_read_failure(mut self, message: &str) -> Self {
        self.read_failure = Some(AccessError::new(message));
        self
    }
}

impl Dataset for MemoryDataset {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> DatasetKind {
        self.kind
    }

    fn schema(&self) -> Option<&DatasetSchema> {
        self.schema.as_ref()
    }

    fn field_values(&self, field: &str) -> Result<Vec<Value>, AccessError> {
        if let Some(failure) = &self.read_failure {
            return Err(failure.clone());
        }

        Ok(self.columns.get(field).cloned().unwrap_or_default())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_resolves_registered_datasets_only() {
        let catalog = MemoryCatalog::new().with_dataset(
            MemoryDataset::vector("roads").with_column("surface", ValueTag::Text, vec![]),
        );

        assert!(catalog.dataset("roads").is_some());
        assert!(catalog.dataset("rivers").is_none());
    }

    #[test]
    fn columns_declare_schema_fields() {
        let dataset = MemoryDataset::vector("roads")
            .with_column("surface", ValueTag::Text, vec![Value::from("asphalt")])
            .with_column("lanes", ValueTag::Int32, vec![Value::from(2i32)]);

        let schema = dataset.schema().expect("schema should be present");
        assert_eq!(schema.fields().len(), 2);
        assert_eq!(schema.field("lanes").map(|f| f.kind), Some(ValueTag::Int32));
    }

    #[test]
    fn read_failure_injection_surfaces_the_message() {
        let dataset = MemoryDataset::vector("roads")
            .with_column("surface", ValueTag::Text, vec![])
            .with_read_failure("io timeout");

        let err = dataset
            .field_values("surface")
            .expect_err("read should fail");
        assert_eq!(err.to_string(), "io timeout");
    }

    #[test]
    fn without_schema_hides_the_schema_but_keeps_the_handle() {
        let dataset = MemoryDataset::vector("roads").without_schema();
        assert!(dataset.schema().is_none());
        assert_eq!(dataset.name(), "roads");
    }
}
