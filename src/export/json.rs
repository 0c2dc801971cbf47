//! Serialize entity models, derived views included
//!
//! Keys are camelCase, `None` values are left out, and non-ASCII text is
//! written as-is.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::EntityGenError;
use crate::model::{EntityModel, FieldDescriptor};

/// JSON shape of one entity: stored parts followed by every derived view
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityDocument<'a> {
    pub sheet_name: &'a str,
    pub folder_name: &'a str,
    pub module_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail_name: Option<&'a str>,
    pub description: &'a str,
    pub prefix: &'a str,
    pub is_detail: bool,
    pub class_name: String,
    pub table_name: String,
    pub file_name: String,
    pub file_path: String,
    pub namespace_path: String,
    pub fields: &'a [FieldDescriptor],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key_field: Option<&'a FieldDescriptor>,
    pub business_fields: Vec<&'a FieldDescriptor>,
    pub creator_fields: Vec<&'a FieldDescriptor>,
    pub editor_fields: Vec<&'a FieldDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key_field: Option<&'a FieldDescriptor>,
}

impl<'a> From<&'a EntityModel> for EntityDocument<'a> {
    fn from(entity: &'a EntityModel) -> Self {
        Self {
            sheet_name: &entity.sheet_name,
            folder_name: &entity.folder_name,
            module_name: &entity.module_name,
            detail_name: entity.detail_name.as_deref(),
            description: &entity.description,
            prefix: &entity.prefix,
            is_detail: entity.is_detail(),
            class_name: entity.class_name(),
            table_name: entity.table_name(),
            file_name: entity.file_name(),
            file_path: entity.file_path(),
            namespace_path: entity.namespace_path(),
            fields: &entity.fields,
            primary_key_field: entity.primary_key_field(),
            business_fields: entity.business_fields(),
            creator_fields: entity.creator_fields(),
            editor_fields: entity.editor_fields(),
            foreign_key_field: entity.foreign_key_field(),
        }
    }
}

/// Serialize entities as a pretty-printed JSON array, in input order
pub fn export_schema_json(entities: &[EntityModel]) -> Result<String, EntityGenError> {
    let documents: Vec<EntityDocument<'_>> = entities.iter().map(EntityDocument::from).collect();
    Ok(serde_json::to_string_pretty(&documents)?)
}

/// Serialize entities and write the JSON to `path`
pub fn write_schema_json(entities: &[EntityModel], path: &Path) -> Result<(), EntityGenError> {
    let json = export_schema_json(entities)?;
    write_json(&json, path)
}

/// Write already rendered JSON text to `path`
pub fn write_json(json: &str, path: &Path) -> Result<(), EntityGenError> {
    fs::write(path, json).map_err(|e| EntityGenError::JsonWriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
