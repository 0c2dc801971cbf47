//! Lazy worksheet reader backed by calamine

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};

use crate::error::EntityGenError;

use super::{Cell, Worksheet};

/// An opened workbook that yields its worksheets one at a time, in tab order.
///
/// Each worksheet's cells are only loaded when the iterator reaches it.
pub struct Workbook {
    path: PathBuf,
    sheets: Sheets<BufReader<File>>,
    pending: std::vec::IntoIter<String>,
}

impl Workbook {
    /// Open a workbook file (xlsx, xlsm, xls or ods)
    pub fn open(path: &Path) -> Result<Self, EntityGenError> {
        if !path.exists() {
            return Err(EntityGenError::WorkbookNotFound {
                path: path.to_path_buf(),
            });
        }

        let sheets = open_workbook_auto(path).map_err(|e| EntityGenError::WorkbookOpenError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let pending = sheets.sheet_names().into_iter();

        Ok(Self {
            path: path.to_path_buf(),
            sheets,
            pending,
        })
    }
}

impl Iterator for Workbook {
    type Item = Result<Worksheet, EntityGenError>;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.pending.next()?;
        let result = self
            .sheets
            .worksheet_range(&name)
            .map(|range| worksheet_from_range(&name, &range))
            .map_err(|e| EntityGenError::WorksheetReadError {
                path: self.path.clone(),
                sheet: name,
                source: e,
            });
        Some(result)
    }
}

/// Convert a calamine range into a grid anchored at A1.
///
/// calamine ranges start at the first used cell, so leading empty rows and
/// columns are padded back in to keep positional column indexes stable.
fn worksheet_from_range(name: &str, range: &Range<Data>) -> Worksheet {
    let Some((last_row, last_col)) = range.end() else {
        return Worksheet::new(name, Vec::new());
    };

    let rows = (0..=last_row)
        .map(|row| {
            (0..=last_col)
                .map(|col| cell_text(range.get_value((row, col))))
                .collect()
        })
        .collect();

    Worksheet::new(name, rows)
}

fn cell_text(value: Option<&Data>) -> Cell {
    match value {
        None | Some(Data::Empty) => None,
        Some(Data::String(s)) => Some(s.clone()),
        Some(other) => Some(other.to_string()),
    }
}
