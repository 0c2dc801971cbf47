//! Entity model building

mod builder;
pub mod derive;
mod entity;
mod field;
mod type_mapper;

pub use builder::{build_catalog, build_entity, Diagnostic, DiagnosticKind, EntityCatalog};
pub use entity::EntityModel;
pub use field::{audit_role, AuditGroup, AuditKind, ClrType, FieldDescriptor, StorageDescriptor};
pub use type_mapper::resolve_field;
