//! Unit tests for JSON schema export

use serde_json::Value;

use entity_generator::export::export_schema_json;
use entity_generator::model::{audit_role, derive, AuditGroup};

use crate::common::{entity, material_sheet, material_unit_sheet, sample_catalog};

fn export(entities: &[entity_generator::model::EntityModel]) -> Value {
    let json = export_schema_json(entities).expect("export should succeed");
    serde_json::from_str(&json).expect("export should be valid JSON")
}

fn str_field<'a>(value: &'a Value, key: &str) -> &'a str {
    value[key]
        .as_str()
        .unwrap_or_else(|| panic!("{} should be a string in {}", key, value))
}

fn field_names(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("expected an array of fields")
        .iter()
        .map(|f| str_field(f, "name").to_string())
        .collect()
}

#[test]
fn test_export_is_array_in_catalog_order() {
    let catalog = sample_catalog();
    let doc = export(&catalog.entities);
    let classes: Vec<_> = doc
        .as_array()
        .unwrap()
        .iter()
        .map(|e| str_field(e, "className").to_string())
        .collect();
    assert_eq!(
        classes,
        vec![
            "CTab_BgaMaterial",
            "CTab_HrEmployee",
            "CTab_BgaMaterialUnit",
            "CTab_BgaWarehouse",
        ]
    );
}

#[test]
fn test_export_uses_camel_case_and_includes_derived_views() {
    let doc = export(&[entity(material_sheet())]);
    let material = &doc[0];

    assert_eq!(str_field(material, "sheetName"), "Bga_Material(料件項目)");
    assert_eq!(str_field(material, "folderName"), "Bga");
    assert_eq!(str_field(material, "moduleName"), "Material");
    assert_eq!(str_field(material, "description"), "料件項目");
    assert_eq!(str_field(material, "prefix"), "Mat");
    assert_eq!(material["isDetail"], Value::Bool(false));
    assert_eq!(str_field(material, "tableName"), "Bga_Material");
    assert_eq!(str_field(material, "fileName"), "CTab_BgaMaterial.cs");
    assert_eq!(
        str_field(material, "filePath"),
        "NET_Core_API/Entity_Model/Entity/Bga/Material/CTab_BgaMaterial.cs"
    );
    assert_eq!(
        str_field(material, "namespacePath"),
        "Entity_Model.Entity.Bga.Material"
    );
    assert_eq!(
        str_field(&material["primaryKeyField"], "name"),
        "PK_Material"
    );
    assert_eq!(
        field_names(&material["creatorFields"]),
        vec!["Mat_CreateId", "Mat_CreateDate"]
    );
    assert_eq!(
        field_names(&material["editorFields"]),
        vec!["Mat_EditId", "Mat_EditDate"]
    );
}

#[test]
fn test_export_omits_absent_values() {
    let doc = export(&[entity(material_sheet())]);
    let material = doc[0].as_object().unwrap();
    assert!(!material.contains_key("detailName"));
    assert!(!material.contains_key("foreignKeyField"));

    let name_field = doc[0]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "Mat_Name")
        .unwrap()
        .as_object()
        .unwrap();
    assert!(!name_field.contains_key("commentExtra"));
    assert!(!name_field.contains_key("example"));
    assert!(!name_field.contains_key("remark"));
    assert_eq!(name_field["length"], "100");
}

#[test]
fn test_export_field_shape() {
    let doc = export(&[entity(material_sheet())]);
    let status = doc[0]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .find(|f| f["name"] == "Mat_Status")
        .unwrap();

    assert_eq!(status["declaredType"], "nvarchar(1)");
    assert_eq!(status["comment"], "狀態");
    assert_eq!(status["commentExtra"], "Y:啟用 N:停用");
    assert_eq!(status["isPrimaryKey"], false);
    assert_eq!(status["isRequired"], true);
    assert_eq!(status["resolvedType"], "string");
    assert_eq!(status["storageDescriptor"], "\"character(1)\"");
    assert_eq!(status["isNullable"], false);

    let key = &doc[0]["primaryKeyField"];
    assert_eq!(key["resolvedType"], "long");
    assert_eq!(key["storageDescriptor"], "PropertyConfig.TableID");
}

#[test]
fn test_export_keeps_non_ascii_unescaped() {
    let json = export_schema_json(&[entity(material_sheet())]).unwrap();
    assert!(json.contains("料件項目"));
    assert!(!json.contains("\\u"));
}

#[test]
fn test_export_detail_entity() {
    let doc = export(&[entity(material_unit_sheet())]);
    let unit = &doc[0];
    assert_eq!(unit["isDetail"], true);
    assert_eq!(str_field(unit, "detailName"), "Unit");
    assert_eq!(str_field(unit, "className"), "CTab_BgaMaterialUnit");
    assert_eq!(str_field(&unit["foreignKeyField"], "name"), "FK_Material");
}

#[test]
fn test_derived_views_round_trip_from_stored_fields() {
    let catalog = sample_catalog();
    let doc = export(&catalog.entities);

    for exported in doc.as_array().unwrap() {
        let folder = str_field(exported, "folderName");
        let module = str_field(exported, "moduleName");
        let detail = exported["detailName"].as_str();

        assert_eq!(
            str_field(exported, "className"),
            derive::class_name(folder, module, detail)
        );
        assert_eq!(
            str_field(exported, "tableName"),
            derive::table_name(folder, module, detail)
        );
        assert_eq!(
            str_field(exported, "namespacePath"),
            derive::namespace_path(folder, module)
        );
        assert_eq!(
            str_field(exported, "filePath"),
            derive::file_path(folder, module, detail)
        );
        assert_eq!(exported["isDetail"], derive::is_detail(detail));

        // Regroup the raw field list and compare with the exported groups
        let fields = exported["fields"].as_array().unwrap();
        let key = fields
            .iter()
            .find(|f| f["isPrimaryKey"] == true)
            .map(|f| str_field(f, "name"));
        assert_eq!(exported["primaryKeyField"]["name"].as_str(), key);

        let regroup = |group: Option<AuditGroup>| -> Vec<String> {
            fields
                .iter()
                .map(|f| str_field(f, "name"))
                .filter(|name| Some(*name) != key)
                .filter(|name| audit_role(name).map(|(g, _)| g) == group)
                .map(str::to_string)
                .collect()
        };
        assert_eq!(field_names(&exported["businessFields"]), regroup(None));
        assert_eq!(
            field_names(&exported["creatorFields"]),
            regroup(Some(AuditGroup::Creator))
        );
        assert_eq!(
            field_names(&exported["editorFields"]),
            regroup(Some(AuditGroup::Editor))
        );
    }
}
