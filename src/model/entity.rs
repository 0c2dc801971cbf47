//! Entity model: one generated class per worksheet

use super::{derive, FieldDescriptor};

/// A table definition ready for code generation.
///
/// Only the parsed parts are stored. Names, paths and field groups are
/// computed on demand through [`derive`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityModel {
    /// Worksheet title the entity was read from
    pub sheet_name: String,
    pub folder_name: String,
    pub module_name: String,
    /// Present only for detail tables
    pub detail_name: Option<String>,
    pub description: String,
    /// Common column-name prefix, for display only
    pub prefix: String,
    /// Columns in worksheet row order
    pub fields: Vec<FieldDescriptor>,
}

impl EntityModel {
    pub fn is_detail(&self) -> bool {
        derive::is_detail(self.detail_name.as_deref())
    }

    pub fn class_name(&self) -> String {
        derive::class_name(
            &self.folder_name,
            &self.module_name,
            self.detail_name.as_deref(),
        )
    }

    pub fn table_name(&self) -> String {
        derive::table_name(
            &self.folder_name,
            &self.module_name,
            self.detail_name.as_deref(),
        )
    }

    pub fn namespace_path(&self) -> String {
        derive::namespace_path(&self.folder_name, &self.module_name)
    }

    pub fn file_name(&self) -> String {
        derive::file_name(
            &self.folder_name,
            &self.module_name,
            self.detail_name.as_deref(),
        )
    }

    /// Source path relative to the project root
    pub fn file_path(&self) -> String {
        derive::file_path(
            &self.folder_name,
            &self.module_name,
            self.detail_name.as_deref(),
        )
    }

    pub fn parent_class_name(&self) -> String {
        derive::parent_class_name(&self.folder_name, &self.module_name)
    }

    pub fn primary_key_field(&self) -> Option<&FieldDescriptor> {
        derive::primary_key_field(&self.fields)
    }

    pub fn business_fields(&self) -> Vec<&FieldDescriptor> {
        derive::business_fields(&self.fields)
    }

    pub fn creator_fields(&self) -> Vec<&FieldDescriptor> {
        derive::creator_fields(&self.fields)
    }

    pub fn editor_fields(&self) -> Vec<&FieldDescriptor> {
        derive::editor_fields(&self.fields)
    }

    pub fn foreign_key_field(&self) -> Option<&FieldDescriptor> {
        derive::foreign_key_field(&self.fields, self.is_detail())
    }
}
