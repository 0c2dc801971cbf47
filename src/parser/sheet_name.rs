//! Worksheet title parsing
//!
//! Titles follow the convention `{Folder}_{Module}({Description})`, for
//! example `Bga_Material(料件項目)`. A module part containing further
//! underscores (`Bga_Order_Line(訂單明細)`) names a detail table.
//!
//! Excel truncates tab titles at 31 characters, which often cuts off the
//! closing parenthesis. Those titles are still accepted through a fallback
//! pattern that takes the rest of the title as the description.

use std::sync::LazyLock;

use regex::Regex;

/// `{Folder}_{Module}({Description})`
static SHEET_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^_]+)_(.+?)\((.+?)\)$").unwrap());

/// `{Folder}_{Module}({Description` with the closing parenthesis lost
static TRUNCATED_SHEET_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^_]+)_(.+?)\((.+)$").unwrap());

/// Tokens recovered from a worksheet title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetName {
    pub folder_name: String,
    pub module_name: String,
    /// Present only for detail tables
    pub detail_name: Option<String>,
    pub description: String,
}

/// Outcome of matching a worksheet title against the naming convention
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetNameMatch {
    /// Title is well-formed
    Primary(SheetName),
    /// Title lost its closing parenthesis; description is whatever remained
    Fallback(SheetName),
    /// Title does not follow the convention; the worksheet is skipped
    Unmatched,
}

/// Parse a worksheet title into folder, module, detail and description
pub fn parse_sheet_name(title: &str) -> SheetNameMatch {
    if let Some(caps) = SHEET_NAME_RE.captures(title) {
        return SheetNameMatch::Primary(sheet_name_from_parts(&caps[1], &caps[2], &caps[3]));
    }

    if let Some(caps) = TRUNCATED_SHEET_NAME_RE.captures(title) {
        return SheetNameMatch::Fallback(sheet_name_from_parts(&caps[1], &caps[2], &caps[3]));
    }

    SheetNameMatch::Unmatched
}

fn sheet_name_from_parts(folder: &str, module_part: &str, description: &str) -> SheetName {
    let (module_name, detail_name) = split_module_part(module_part);
    SheetName {
        folder_name: folder.to_string(),
        module_name,
        detail_name,
        description: description.to_string(),
    }
}

/// Split `Order_Line_Item` into module `Order` and detail `LineItem`.
fn split_module_part(module_part: &str) -> (String, Option<String>) {
    match module_part.split_once('_') {
        Some((module, rest)) => (module.to_string(), Some(rest.replace('_', ""))),
        None => (module_part.to_string(), None),
    }
}
