//! JSON export of entity models

mod json;

pub use json::{export_schema_json, write_json, write_schema_json, EntityDocument};
