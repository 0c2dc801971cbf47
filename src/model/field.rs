//! Field descriptors and the types they resolve to

use std::fmt;

use serde::{Serialize, Serializer};

use crate::util::escape_csharp_string;

/// C# property type of a generated field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClrType {
    Long,
    Int,
    Decimal,
    Bool,
    Guid,
    String,
}

impl ClrType {
    /// Keyword used in the generated property declaration
    pub fn as_str(&self) -> &'static str {
        match self {
            ClrType::Long => "long",
            ClrType::Int => "int",
            ClrType::Decimal => "decimal",
            ClrType::Bool => "bool",
            ClrType::Guid => "Guid",
            ClrType::String => "string",
        }
    }
}

impl fmt::Display for ClrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ClrType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Value of the `TypeName` argument in `[Column(..., TypeName = ...)]`.
///
/// Business columns carry a quoted SQL type literal. Keys and audit columns
/// point at the shared `PropertyConfig` constants of the target project.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StorageDescriptor {
    /// SQL type literal, rendered in double quotes
    Literal(String),
    TableId,
    TableCode,
    TableTime,
    TableIp,
}

impl StorageDescriptor {
    pub fn literal(sql_type: impl Into<String>) -> Self {
        StorageDescriptor::Literal(sql_type.into())
    }
}

impl fmt::Display for StorageDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageDescriptor::Literal(sql_type) => {
                write!(f, "\"{}\"", escape_csharp_string(sql_type))
            }
            StorageDescriptor::TableId => f.write_str("PropertyConfig.TableID"),
            StorageDescriptor::TableCode => f.write_str("PropertyConfig.TableCode"),
            StorageDescriptor::TableTime => f.write_str("PropertyConfig.TableTime"),
            StorageDescriptor::TableIp => f.write_str("PropertyConfig.TableIP"),
        }
    }
}

impl Serialize for StorageDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Which audit group a column belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditGroup {
    Creator,
    Editor,
}

/// The four audit column shapes shared by both groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditKind {
    Id,
    Code,
    Date,
    Ip,
}

/// Name suffixes of audit columns. Matching is exact and case-sensitive.
const AUDIT_SUFFIXES: [(&str, AuditGroup, AuditKind); 8] = [
    ("_CreateId", AuditGroup::Creator, AuditKind::Id),
    ("_CreateCode", AuditGroup::Creator, AuditKind::Code),
    ("_CreateDate", AuditGroup::Creator, AuditKind::Date),
    ("_CreateIp", AuditGroup::Creator, AuditKind::Ip),
    ("_EditId", AuditGroup::Editor, AuditKind::Id),
    ("_EditCode", AuditGroup::Editor, AuditKind::Code),
    ("_EditDate", AuditGroup::Editor, AuditKind::Date),
    ("_EditIp", AuditGroup::Editor, AuditKind::Ip),
];

/// Classify a column name as a creator/editor audit column
pub fn audit_role(field_name: &str) -> Option<(AuditGroup, AuditKind)> {
    AUDIT_SUFFIXES
        .iter()
        .find(|(suffix, _, _)| field_name.ends_with(suffix))
        .map(|&(_, group, kind)| (group, kind))
}

/// A resolved schema column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub name: String,
    pub declared_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    pub comment: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_extra: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub is_primary_key: bool,
    pub is_required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remark: Option<String>,
    pub resolved_type: ClrType,
    pub storage_descriptor: StorageDescriptor,
    pub is_nullable: bool,
}

impl FieldDescriptor {
    pub fn audit_role(&self) -> Option<(AuditGroup, AuditKind)> {
        audit_role(&self.name)
    }

    pub fn is_audit(&self) -> bool {
        self.audit_role().is_some()
    }

    /// Text for the `[Comment(...)]` attribute: `說明` or `說明：「補充」`
    pub fn comment_text(&self) -> String {
        match self.comment_extra.as_deref().filter(|s| !s.is_empty()) {
            Some(extra) => format!("{}：「{}」", self.comment, extra),
            None => self.comment.clone(),
        }
    }
}
