//! Worksheet parsing: titles and field definition rows

mod field_rows;
mod sheet_name;

pub use field_rows::{parse_field_rows, RawField};
pub use sheet_name::{parse_sheet_name, SheetName, SheetNameMatch};
