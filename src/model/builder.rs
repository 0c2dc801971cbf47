//! Build entity models from worksheets
//!
//! Anomalies in sheet titles never abort a batch. They are recorded as
//! [`Diagnostic`] values and handed back with the entities so the caller
//! decides how to report them.

use std::fmt;

use crate::parser::{parse_field_rows, parse_sheet_name, SheetName, SheetNameMatch};
use crate::util::prefix_before_underscore;
use crate::workbook::Worksheet;

use super::{resolve_field, EntityModel, FieldDescriptor};

const UNKNOWN_PREFIX: &str = "Unknown";

/// What went wrong (or was recovered) while reading a worksheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Closing parenthesis was missing; the fallback pattern was used
    TruncatedSheetName,
    /// Title does not follow the naming convention; worksheet skipped
    UnparseableSheetName,
}

/// A non-fatal event tied to one worksheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub sheet_name: String,
    pub kind: DiagnosticKind,
}

impl Diagnostic {
    /// True when the worksheet produced no entity
    pub fn is_skip(&self) -> bool {
        self.kind == DiagnosticKind::UnparseableSheetName
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            DiagnosticKind::TruncatedSheetName => write!(
                f,
                "Sheet name is missing its closing parenthesis, using fallback: {}",
                self.sheet_name
            ),
            DiagnosticKind::UnparseableSheetName => {
                write!(f, "Skipping sheet with unparseable name: {}", self.sheet_name)
            }
        }
    }
}

/// Entities built from a batch of worksheets, in worksheet order
#[derive(Debug, Clone, Default)]
pub struct EntityCatalog {
    pub entities: Vec<EntityModel>,
    pub diagnostics: Vec<Diagnostic>,
}

impl EntityCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build one worksheet into the catalog. Returns the entity if one was produced.
    pub fn add_worksheet(&mut self, sheet: &Worksheet) -> Option<&EntityModel> {
        let entity = build_entity(sheet, &mut self.diagnostics)?;
        self.entities.push(entity);
        self.entities.last()
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

/// Build a catalog from in-memory worksheets
pub fn build_catalog<'a, I>(sheets: I) -> EntityCatalog
where
    I: IntoIterator<Item = &'a Worksheet>,
{
    let mut catalog = EntityCatalog::new();
    for sheet in sheets {
        catalog.add_worksheet(sheet);
    }
    catalog
}

/// Build a single entity. Returns `None` only when the sheet title is unparseable.
pub fn build_entity(sheet: &Worksheet, diagnostics: &mut Vec<Diagnostic>) -> Option<EntityModel> {
    let name = match parse_sheet_name(&sheet.name) {
        SheetNameMatch::Primary(name) => name,
        SheetNameMatch::Fallback(name) => {
            diagnostics.push(Diagnostic {
                sheet_name: sheet.name.clone(),
                kind: DiagnosticKind::TruncatedSheetName,
            });
            name
        }
        SheetNameMatch::Unmatched => {
            diagnostics.push(Diagnostic {
                sheet_name: sheet.name.clone(),
                kind: DiagnosticKind::UnparseableSheetName,
            });
            return None;
        }
    };

    let fields: Vec<FieldDescriptor> = parse_field_rows(sheet)
        .into_iter()
        .map(resolve_field)
        .collect();

    let SheetName {
        folder_name,
        module_name,
        detail_name,
        description,
    } = name;

    Some(EntityModel {
        sheet_name: sheet.name.clone(),
        folder_name,
        module_name,
        detail_name,
        description,
        prefix: extract_prefix(&fields),
        fields,
    })
}

/// Column-name prefix: taken from the first non-key column with an
/// underscore, then from a `PK_` key name, else `Unknown`.
fn extract_prefix(fields: &[FieldDescriptor]) -> String {
    if let Some(prefix) = fields
        .iter()
        .filter(|f| !f.is_primary_key)
        .find_map(|f| prefix_before_underscore(&f.name))
    {
        return prefix.to_string();
    }

    fields
        .iter()
        .find(|f| f.is_primary_key)
        .and_then(|f| f.name.strip_prefix("PK_"))
        .unwrap_or(UNKNOWN_PREFIX)
        .to_string()
}
