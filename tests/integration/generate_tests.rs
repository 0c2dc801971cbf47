//! Entity file generation tests
//!
//! These tests write generated sources into a temporary project root.

use std::fs;
use std::path::PathBuf;

use entity_generator::codegen::{render_entity, write_entity_file};
use entity_generator::{generate_entities, write_entities, EntityGenError, GenerateOptions};

use crate::common::{entity, exists, material_sheet, material_unit_sheet, sample_catalog, TestContext};

const MATERIAL_PATH: &str = "NET_Core_API/Entity_Model/Entity/Bga/Material/CTab_BgaMaterial.cs";
const MATERIAL_UNIT_PATH: &str =
    "NET_Core_API/Entity_Model/Entity/Bga/Material/CTab_BgaMaterialUnit.cs";
const EMPLOYEE_PATH: &str = "NET_Core_API/Entity_Model/Entity/Hr/Employee/CTab_HrEmployee.cs";
const WAREHOUSE_PATH: &str = "NET_Core_API/Entity_Model/Entity/Bga/Warehouse/CTab_BgaWarehouse.cs";

#[test]
fn test_write_entities_creates_directories_and_files() {
    let ctx = TestContext::new();
    let catalog = sample_catalog();

    let report = write_entities(&ctx.project_root, &catalog.entities).expect("generation should succeed");

    assert_eq!(
        report.written,
        vec![
            ctx.path(MATERIAL_PATH),
            ctx.path(EMPLOYEE_PATH),
            ctx.path(MATERIAL_UNIT_PATH),
            ctx.path(WAREHOUSE_PATH),
        ]
    );
    for path in [MATERIAL_PATH, MATERIAL_UNIT_PATH, EMPLOYEE_PATH, WAREHOUSE_PATH] {
        assert!(exists(&ctx.project_root, path), "{} should exist", path);
    }
    assert!(report.registration_block.contains("#region Bga相關"));
    assert!(report.registration_block.contains("#region Hr相關"));
}

#[test]
fn test_written_file_has_bom_and_rendered_content() {
    let ctx = TestContext::new();
    let model = entity(material_sheet());

    let path = write_entity_file(&ctx.project_root, &model).expect("write should succeed");
    assert_eq!(path, ctx.path(MATERIAL_PATH));

    let bytes = ctx.read_bytes(MATERIAL_PATH);
    assert_eq!(&bytes[..3], b"\xEF\xBB\xBF");
    assert_eq!(ctx.read_source(MATERIAL_PATH), render_entity(&model));
}

#[test]
fn test_existing_file_is_overwritten() {
    let ctx = TestContext::new();
    let target = ctx.path(MATERIAL_PATH);
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "// hand edits that will be lost").unwrap();

    let model = entity(material_sheet());
    write_entity_file(&ctx.project_root, &model).expect("write should succeed");

    let source = ctx.read_source(MATERIAL_PATH);
    assert!(!source.contains("hand edits"));
    assert_eq!(source, render_entity(&model));
}

#[test]
fn test_unwritable_destination_is_reported() {
    let ctx = TestContext::new();
    // A file where the Entity directory should be blocks directory creation
    fs::create_dir_all(ctx.path("NET_Core_API/Entity_Model")).unwrap();
    fs::write(ctx.path("NET_Core_API/Entity_Model/Entity"), "not a directory").unwrap();

    let err = write_entity_file(&ctx.project_root, &entity(material_sheet()))
        .expect_err("write should fail");
    match err {
        EntityGenError::EntityWriteError { path, .. } => {
            assert_eq!(path, ctx.path(MATERIAL_PATH));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_failure_keeps_earlier_files() {
    let ctx = TestContext::new();
    // Block only the Hr folder so the first Bga entity is written before the failure
    fs::create_dir_all(ctx.path("NET_Core_API/Entity_Model/Entity")).unwrap();
    fs::write(ctx.path("NET_Core_API/Entity_Model/Entity/Hr"), "blocked").unwrap();

    let catalog = sample_catalog();
    let result = write_entities(&ctx.project_root, &catalog.entities);

    let err = result.expect_err("generation should stop at the blocked folder");
    assert!(
        err.to_string().contains("CTab_HrEmployee.cs"),
        "error should name the file: {}",
        err
    );
    assert!(exists(&ctx.project_root, MATERIAL_PATH));
    assert!(!exists(&ctx.project_root, MATERIAL_UNIT_PATH));
}

#[test]
fn test_detail_and_master_share_module_directory() {
    let ctx = TestContext::new();
    let entities = vec![entity(material_sheet()), entity(material_unit_sheet())];
    write_entities(&ctx.project_root, &entities).unwrap();

    let dir = ctx.path("NET_Core_API/Entity_Model/Entity/Bga/Material");
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, vec!["CTab_BgaMaterial.cs", "CTab_BgaMaterialUnit.cs"]);
}

#[test]
fn test_generate_with_missing_workbook_fails() {
    let ctx = TestContext::new();
    let result = generate_entities(GenerateOptions {
        workbook_path: PathBuf::from("missing/schema.xlsx"),
        project_root: ctx.project_root.clone(),
    });

    let err = result.expect_err("missing workbook should fail");
    assert!(
        err.to_string().contains("Workbook not found"),
        "unexpected error: {}",
        err
    );
    assert!(!exists(&ctx.project_root, "NET_Core_API"));
}
