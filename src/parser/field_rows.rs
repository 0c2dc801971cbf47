//! Field definition rows
//!
//! Each worksheet describes one table, one column per row, with a fixed
//! positional layout:
//!
//! | Column Name | Column TypeName | 資料長度 | Comment | Comment補充說明 | Example | PK | Required | 備註 |
//! |------------:|----------------:|--------:|--------:|----------------:|--------:|---:|---------:|-----:|
//! |      1      |        2        |    3    |    4    |        5        |    6    |  7 |     8    |   9  |
//!
//! Row 1 is the header. Header text is never inspected.

use crate::workbook::Worksheet;

const COL_NAME: usize = 1;
const COL_TYPE: usize = 2;
const COL_LENGTH: usize = 3;
const COL_COMMENT: usize = 4;
const COL_COMMENT_EXTRA: usize = 5;
const COL_EXAMPLE: usize = 6;
const COL_PRIMARY_KEY: usize = 7;
const COL_REQUIRED: usize = 8;
const COL_REMARK: usize = 9;

/// First data row (1-based); row 1 holds the headers
const FIRST_DATA_ROW: usize = 2;

/// A field row as written in the worksheet, before type resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawField {
    pub name: String,
    /// SQL Server type as typed by the author, e.g. `nvarchar(50)`
    pub declared_type: String,
    pub length: Option<String>,
    pub comment: String,
    pub comment_extra: Option<String>,
    pub example: Option<String>,
    pub is_primary_key: bool,
    pub is_required: bool,
    pub remark: Option<String>,
}

/// Extract field rows from a worksheet, in row order.
///
/// Rows without a column name are skipped; scanning continues to the last
/// used row of the sheet.
pub fn parse_field_rows(sheet: &Worksheet) -> Vec<RawField> {
    (FIRST_DATA_ROW..=sheet.row_count())
        .filter_map(|row| parse_field_row(sheet, row))
        .collect()
}

fn parse_field_row(sheet: &Worksheet, row: usize) -> Option<RawField> {
    let name = sheet.cell(row, COL_NAME)?;
    if name.trim().is_empty() {
        return None;
    }

    let text = |col: usize| sheet.cell(row, col).map(str::to_string);

    Some(RawField {
        name: name.to_string(),
        declared_type: text(COL_TYPE).unwrap_or_default(),
        length: text(COL_LENGTH),
        comment: text(COL_COMMENT).unwrap_or_default(),
        comment_extra: text(COL_COMMENT_EXTRA),
        example: text(COL_EXAMPLE),
        is_primary_key: is_flag_set(sheet.cell(row, COL_PRIMARY_KEY)),
        is_required: is_flag_set(sheet.cell(row, COL_REQUIRED)),
        remark: text(COL_REMARK),
    })
}

/// Flags are set only by the literal `1`
fn is_flag_set(value: Option<&str>) -> bool {
    value == Some("1")
}
