//! SQL Server type to C# type mapping
//!
//! Declared types come straight from the worksheet and are matched loosely:
//! case-insensitive substring checks, first match wins. The order of
//! [`SqlTypeFamily::classify`] matters because `bigint` also contains `int`.
//!
//! `datetime` columns are stored as `bigint` ticks, never as native dates.

use std::sync::LazyLock;

use regex::Regex;

use crate::parser::RawField;
use crate::util::contains_ci;

use super::{AuditGroup, AuditKind, ClrType, FieldDescriptor, StorageDescriptor};

static CHAR_LENGTH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)char\(\s*(\d+)\s*\)").unwrap());

static DECIMAL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)decimal\(\s*(\d+)\s*,\s*(\d+)\s*\)").unwrap());

const DEFAULT_CHAR_LENGTH: &str = "50";
const DEFAULT_DECIMAL: &str = "decimal(18,2)";

/// Coarse family of a declared SQL type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SqlTypeFamily {
    BigInt,
    Int,
    DateTime,
    Decimal,
    Bit,
    UniqueIdentifier,
    Text,
    Other,
}

impl SqlTypeFamily {
    fn classify(declared: &str) -> Self {
        if contains_ci(declared, "bigint") {
            SqlTypeFamily::BigInt
        } else if contains_ci(declared, "int") {
            SqlTypeFamily::Int
        } else if contains_ci(declared, "datetime") {
            SqlTypeFamily::DateTime
        } else if contains_ci(declared, "decimal") {
            SqlTypeFamily::Decimal
        } else if contains_ci(declared, "bit") {
            SqlTypeFamily::Bit
        } else if contains_ci(declared, "uniqueidentifier") {
            SqlTypeFamily::UniqueIdentifier
        } else if contains_ci(declared, "nvarchar")
            || contains_ci(declared, "varchar")
            || contains_ci(declared, "char")
        {
            SqlTypeFamily::Text
        } else {
            SqlTypeFamily::Other
        }
    }

    fn clr_type(self) -> ClrType {
        match self {
            SqlTypeFamily::BigInt | SqlTypeFamily::DateTime => ClrType::Long,
            SqlTypeFamily::Int => ClrType::Int,
            SqlTypeFamily::Decimal => ClrType::Decimal,
            SqlTypeFamily::Bit => ClrType::Bool,
            SqlTypeFamily::UniqueIdentifier => ClrType::Guid,
            SqlTypeFamily::Text | SqlTypeFamily::Other => ClrType::String,
        }
    }
}

/// Resolve a worksheet row into a typed field descriptor.
///
/// Pure: the result depends only on the row itself.
pub fn resolve_field(raw: RawField) -> FieldDescriptor {
    let family = SqlTypeFamily::classify(&raw.declared_type);

    let mut resolved_type = family.clr_type();
    let mut storage_descriptor = if raw.is_primary_key {
        key_descriptor(family, &raw.declared_type)
    } else {
        column_descriptor(family, &raw.declared_type)
    };
    let mut is_nullable = !raw.is_required;

    // Audit columns have a fixed shape no matter how the sheet declares them
    if let Some((group, kind)) = super::audit_role(&raw.name) {
        let (clr, descriptor) = audit_shape(kind);
        resolved_type = clr;
        storage_descriptor = descriptor;
        is_nullable = group == AuditGroup::Editor;
    }

    FieldDescriptor {
        name: raw.name,
        declared_type: raw.declared_type,
        length: raw.length,
        comment: raw.comment,
        comment_extra: raw.comment_extra,
        example: raw.example,
        is_primary_key: raw.is_primary_key,
        is_required: raw.is_required,
        remark: raw.remark,
        resolved_type,
        storage_descriptor,
        is_nullable,
    }
}

fn key_descriptor(family: SqlTypeFamily, declared: &str) -> StorageDescriptor {
    match family {
        SqlTypeFamily::BigInt | SqlTypeFamily::UniqueIdentifier => StorageDescriptor::TableId,
        SqlTypeFamily::Text if contains_ci(declared, "nvarchar") => {
            StorageDescriptor::Literal(format!("nvarchar({})", char_length(declared)))
        }
        // Keys of any other type are declared like ordinary columns
        _ => column_descriptor(family, declared),
    }
}

fn column_descriptor(family: SqlTypeFamily, declared: &str) -> StorageDescriptor {
    match family {
        SqlTypeFamily::BigInt | SqlTypeFamily::DateTime => StorageDescriptor::literal("bigint"),
        SqlTypeFamily::Int => StorageDescriptor::literal("int"),
        SqlTypeFamily::Decimal => StorageDescriptor::Literal(decimal_type(declared)),
        SqlTypeFamily::Bit => StorageDescriptor::literal("bit"),
        SqlTypeFamily::UniqueIdentifier => StorageDescriptor::literal("uniqueidentifier"),
        SqlTypeFamily::Text => {
            let length = char_length(declared);
            // Single-character status codes
            if length == "1" && contains_ci(declared, "nvarchar") {
                StorageDescriptor::literal("character(1)")
            } else {
                StorageDescriptor::Literal(format!("nvarchar({})", length))
            }
        }
        SqlTypeFamily::Other => StorageDescriptor::literal(declared),
    }
}

fn audit_shape(kind: AuditKind) -> (ClrType, StorageDescriptor) {
    match kind {
        AuditKind::Id => (ClrType::Long, StorageDescriptor::TableId),
        AuditKind::Code => (ClrType::String, StorageDescriptor::TableCode),
        AuditKind::Date => (ClrType::Long, StorageDescriptor::TableTime),
        AuditKind::Ip => (ClrType::String, StorageDescriptor::TableIp),
    }
}

fn char_length(declared: &str) -> &str {
    CHAR_LENGTH_RE
        .captures(declared)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .unwrap_or(DEFAULT_CHAR_LENGTH)
}

fn decimal_type(declared: &str) -> String {
    match DECIMAL_RE.captures(declared) {
        Some(caps) => format!("decimal({},{})", &caps[1], &caps[2]),
        None => DEFAULT_DECIMAL.to_string(),
    }
}
