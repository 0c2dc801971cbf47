//! JSON export file tests

use std::fs;
use std::path::PathBuf;

use entity_generator::export::{export_schema_json, write_schema_json};
use entity_generator::{export_schema, ExportOptions};

use crate::common::{sample_catalog, TestContext};

#[test]
fn test_write_schema_json_to_file() {
    let ctx = TestContext::new();
    let catalog = sample_catalog();
    let output = ctx.path("entities.json");

    write_schema_json(&catalog.entities, &output).expect("export should succeed");

    let written = fs::read_to_string(&output).unwrap();
    assert_eq!(written, export_schema_json(&catalog.entities).unwrap());

    let doc: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(doc.as_array().unwrap().len(), 4);
}

#[test]
fn test_write_schema_json_to_missing_directory_fails() {
    let ctx = TestContext::new();
    let output = ctx.path("no/such/dir/entities.json");

    let err = write_schema_json(&sample_catalog().entities, &output).expect_err("write should fail");
    assert!(err.to_string().contains("Failed to write JSON"));
}

#[test]
fn test_export_with_missing_workbook_fails() {
    let result = export_schema(ExportOptions {
        workbook_path: PathBuf::from("missing/schema.xlsx"),
        output_path: None,
    });
    assert!(result.is_err());
}

#[test]
fn test_export_empty_catalog() {
    assert_eq!(export_schema_json(&[]).unwrap(), "[]");
}
