//! End-to-end pipeline scenarios over the in-memory catalog.

use facetdb::prelude::*;

fn parcels_catalog() -> MemoryCatalog {
    MemoryCatalog::new().with_dataset(MemoryDataset::vector("parcels").with_column(
        "zone",
        ValueTag::Int32,
        vec![
            Value::from(5i32),
            Value::from(3i32),
            Value::from(5i32),
            Value::from(1i32),
            Value::Null,
            Value::from(3i32),
        ],
    ))
}

#[test]
fn ascending_first_page() {
    let catalog = parcels_catalog();

    let page = UniqueValues::new(&catalog)
        .execute(
            "parcels",
            "zone",
            PageRequest::new(Some(0), Some(3)),
            SortDirective::Asc,
        )
        .expect("pipeline should succeed");

    assert_eq!(
        page.into_values(),
        vec![Value::Null, Value::from(1i32), Value::from(3i32)]
    );
}

#[test]
fn descending_puts_nulls_last() {
    let catalog = parcels_catalog();

    let page = UniqueValues::new(&catalog)
        .execute("parcels", "zone", PageRequest::all(), SortDirective::Desc)
        .expect("pipeline should succeed");

    assert_eq!(
        page.into_values(),
        vec![
            Value::from(5i32),
            Value::from(3i32),
            Value::from(1i32),
            Value::Null,
        ]
    );
}

#[test]
fn out_of_range_paging_degrades_to_clamped_results() {
    let catalog = parcels_catalog();
    let executor = UniqueValues::new(&catalog);

    // Start beyond the distinct set: empty page, not an error.
    let page = executor
        .execute(
            "parcels",
            "zone",
            PageRequest::new(Some(10), None),
            SortDirective::Asc,
        )
        .expect("pipeline should succeed");
    assert!(page.is_empty());

    // Negative bounds clamp to "from the start" / "no limit".
    let page = executor
        .execute(
            "parcels",
            "zone",
            PageRequest::new(Some(-3), Some(-1)),
            SortDirective::Asc,
        )
        .expect("pipeline should succeed");
    assert_eq!(page.count(), 4);
}

#[test]
fn request_surface_matches_the_five_parameter_shape() {
    let catalog = parcels_catalog();

    let request = UniqueValuesRequest {
        dataset: "parcels".to_string(),
        field: "zone".to_string(),
        start_index: Some(1),
        max_count: Some(2),
        sort: Some("ASC".to_string()),
    };

    let page = UniqueValues::new(&catalog)
        .execute_request(&request)
        .expect("pipeline should succeed");
    assert_eq!(
        page.into_values(),
        vec![Value::from(1i32), Value::from(3i32)]
    );
}

#[test]
fn request_shape_round_trips_through_json() {
    let json = r#"{
        "dataset": "parcels",
        "field": "zone",
        "start_index": 0,
        "max_count": 3,
        "sort": "ASC"
    }"#;

    let request: UniqueValuesRequest = serde_json::from_str(json).expect("request should parse");
    let catalog = parcels_catalog();

    let page = UniqueValues::new(&catalog)
        .execute_request(&request)
        .expect("pipeline should succeed");
    assert_eq!(page.count(), 3);
}

#[test]
fn error_taxonomy_is_terminal_and_named() {
    let catalog = parcels_catalog();
    let executor = UniqueValues::new(&catalog);

    let err = executor
        .execute("", "zone", PageRequest::all(), SortDirective::Asc)
        .expect_err("empty dataset must fail");
    assert_eq!(err.class(), ErrorClass::Invalid);

    let err = executor
        .execute("missing", "zone", PageRequest::all(), SortDirective::Asc)
        .expect_err("unknown dataset must fail");
    assert_eq!(err.to_string(), "unable to locate dataset: missing");

    let err = executor
        .execute("parcels", "owner", PageRequest::all(), SortDirective::Asc)
        .expect_err("unknown field must fail");
    assert_eq!(err.class(), ErrorClass::NotFound);
}

#[test]
fn mixed_kind_column_sorts_without_failing() {
    // A column that unexpectedly carries mixed kinds still completes; the
    // relative order of mixed-kind values is unspecified, but nulls stay
    // first and the page size is exact.
    let catalog = MemoryCatalog::new().with_dataset(MemoryDataset::vector("odd").with_column(
        "mixed",
        ValueTag::Text,
        vec![
            Value::from(3i32),
            Value::from("a"),
            Value::Null,
            Value::from(1.5f64),
        ],
    ));

    let page = UniqueValues::new(&catalog)
        .execute("odd", "mixed", PageRequest::all(), SortDirective::Asc)
        .expect("pipeline should succeed");

    assert_eq!(page.count(), 4);
    assert_eq!(page.values()[0], Value::Null);
}

#[test]
fn version_is_exported() {
    assert!(!facetdb::VERSION.is_empty());
}
