use crate::{
    catalog::Catalog,
    error::Error,
    obs::sink::Span,
    query::{PageRequest, ResultPage, SortDirective, order, unique, window},
};
use serde::{Deserialize, Serialize};
use tracing::debug;

///
/// UniqueValuesRequest
///
/// Caller-facing request shape: identifiers as given, paging bounds as
/// given, and the sort keyword still unparsed.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct UniqueValuesRequest {
    pub dataset: String,
    pub field: String,
    pub start_index: Option<i64>,
    pub max_count: Option<i64>,
    pub sort: Option<String>,
}

///
/// UniqueValues
///
/// Executor for one distinct-values invocation: validate identifiers,
/// resolve the dataset, gate schema and kind, check the field, then run
/// the unique → order → window pipeline over the raw column values.
///
/// Every error is terminal for the invocation; there is no partial
/// result. Paging inputs are the one deliberate exception: they clamp in
/// the windower instead of failing.
///

pub struct UniqueValues<'a> {
    catalog: &'a dyn Catalog,
}

impl<'a> UniqueValues<'a> {
    #[must_use]
    pub const fn new(catalog: &'a dyn Catalog) -> Self {
        Self { catalog }
    }

    /// Run the full pipeline for the caller-facing request shape.
    pub fn execute_request(&self, request: &UniqueValuesRequest) -> Result<ResultPage, Error> {
        self.execute(
            &request.dataset,
            &request.field,
            PageRequest::new(request.start_index, request.max_count),
            SortDirective::from_keyword(request.sort.as_deref()),
        )
    }

    /// Run the full pipeline with already-typed paging and sort inputs.
    pub fn execute(
        &self,
        dataset_name: &str,
        field_name: &str,
        page: PageRequest,
        sort: SortDirective,
    ) -> Result<ResultPage, Error> {
        let mut span = Span::new();
        let result = self.run(dataset_name, field_name, page, sort, &mut span);

        if let Err(err) = &result {
            span.fail(err.class());
            debug!(error = %err.display_with_class(), "unique values failed");
        }

        result
    }

    fn run(
        &self,
        dataset_name: &str,
        field_name: &str,
        page: PageRequest,
        sort: SortDirective,
        span: &mut Span,
    ) -> Result<ResultPage, Error> {
        // Identifier validation is an exact emptiness check (no trimming)
        // and happens before any catalog access.
        if dataset_name.is_empty() {
            return Err(Error::MissingArgument("dataset name"));
        }
        if field_name.is_empty() {
            return Err(Error::MissingArgument("field name"));
        }

        debug!(
            dataset = dataset_name,
            field = field_name,
            "unique values requested"
        );

        let dataset = self
            .catalog
            .dataset(dataset_name)
            .ok_or_else(|| Error::DatasetNotFound(dataset_name.to_string()))?;

        let schema = dataset
            .schema()
            .ok_or_else(|| Error::SchemaUnavailable(dataset_name.to_string()))?;

        if !dataset.kind().is_vector() {
            return Err(Error::UnsupportedDatasetKind {
                dataset: dataset_name.to_string(),
                kind: dataset.kind(),
            });
        }

        if schema.field(field_name).is_none() {
            return Err(Error::FieldNotFound {
                dataset: dataset_name.to_string(),
                field: field_name.to_string(),
            });
        }

        let raw = dataset
            .field_values(field_name)
            .map_err(|source| Error::DataAccessFailure {
                dataset: dataset_name.to_string(),
                source,
            })?;
        let rows_scanned = raw.len() as u64;

        let distinct = unique(raw);
        let unique_values = distinct.len() as u64;

        let ordered = order(distinct, sort);
        let values = window(ordered, &page);

        span.set_counts(rows_scanned, unique_values, values.len() as u64);
        debug!(
            dataset = dataset_name,
            field = field_name,
            rows = rows_scanned,
            unique = unique_values,
            page = values.len(),
            "unique values computed"
        );

        Ok(ResultPage(values))
    }
}

///
/// TESTS
///
