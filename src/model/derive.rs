//! Derived naming and field grouping
//!
//! Everything here is a pure function of an entity's stored parts. Nothing is
//! cached, so a view can never disagree with the fields it was computed from.

use super::{AuditGroup, FieldDescriptor};

/// Prefix shared by all generated entity classes
pub const CLASS_PREFIX: &str = "CTab_";

/// Output directory for entity sources, relative to the project root
pub const ENTITY_BASE_DIR: &str = "NET_Core_API/Entity_Model/Entity";

/// Root namespace of generated entities
pub const NAMESPACE_ROOT: &str = "Entity_Model.Entity";

pub const SOURCE_EXTENSION: &str = "cs";

/// Name prefixes that mark a detail table's link to its master
pub const FOREIGN_KEY_PREFIXES: [&str; 3] = ["FK_", "Fk_", "CFK_"];

/// A detail name only counts when it is non-empty
pub fn is_detail(detail: Option<&str>) -> bool {
    detail.is_some_and(|d| !d.is_empty())
}

/// `CTab_{Folder}{Module}{Detail}`
pub fn class_name(folder: &str, module: &str, detail: Option<&str>) -> String {
    format!(
        "{}{}{}{}",
        CLASS_PREFIX,
        folder,
        module,
        detail.unwrap_or_default()
    )
}

/// Class name of the master table a detail table belongs to
pub fn parent_class_name(folder: &str, module: &str) -> String {
    class_name(folder, module, None)
}

/// `{Folder}_{Module}` or `{Folder}_{Module}_{Detail}`
pub fn table_name(folder: &str, module: &str, detail: Option<&str>) -> String {
    match detail.filter(|d| !d.is_empty()) {
        Some(detail) => format!("{}_{}_{}", folder, module, detail),
        None => format!("{}_{}", folder, module),
    }
}

pub fn namespace_path(folder: &str, module: &str) -> String {
    format!("{}.{}.{}", NAMESPACE_ROOT, folder, module)
}

pub fn file_name(folder: &str, module: &str, detail: Option<&str>) -> String {
    format!(
        "{}.{}",
        class_name(folder, module, detail),
        SOURCE_EXTENSION
    )
}

/// Source file location relative to the project root, `/`-separated
pub fn file_path(folder: &str, module: &str, detail: Option<&str>) -> String {
    format!(
        "{}/{}/{}/{}",
        ENTITY_BASE_DIR,
        folder,
        module,
        file_name(folder, module, detail)
    )
}

/// First key-flagged field. Further flagged rows are treated as ordinary columns.
pub fn primary_key_field(fields: &[FieldDescriptor]) -> Option<&FieldDescriptor> {
    fields.iter().find(|f| f.is_primary_key)
}

/// Fields that are neither the primary key nor audit columns, in row order
pub fn business_fields(fields: &[FieldDescriptor]) -> Vec<&FieldDescriptor> {
    let key = primary_key_field(fields);
    fields
        .iter()
        .filter(|f| !is_same_field(key, f) && !f.is_audit())
        .collect()
}

pub fn creator_fields(fields: &[FieldDescriptor]) -> Vec<&FieldDescriptor> {
    audit_fields(fields, AuditGroup::Creator)
}

pub fn editor_fields(fields: &[FieldDescriptor]) -> Vec<&FieldDescriptor> {
    audit_fields(fields, AuditGroup::Editor)
}

/// First field linking a detail table to its master; always `None` for masters
pub fn foreign_key_field(fields: &[FieldDescriptor], is_detail: bool) -> Option<&FieldDescriptor> {
    if !is_detail {
        return None;
    }
    fields.iter().find(|f| {
        FOREIGN_KEY_PREFIXES
            .iter()
            .any(|prefix| f.name.starts_with(prefix))
    })
}

fn audit_fields(fields: &[FieldDescriptor], group: AuditGroup) -> Vec<&FieldDescriptor> {
    let key = primary_key_field(fields);
    fields
        .iter()
        .filter(|f| !is_same_field(key, f))
        .filter(|f| matches!(f.audit_role(), Some((g, _)) if g == group))
        .collect()
}

fn is_same_field(key: Option<&FieldDescriptor>, field: &FieldDescriptor) -> bool {
    key.is_some_and(|k| std::ptr::eq(k, field))
}
