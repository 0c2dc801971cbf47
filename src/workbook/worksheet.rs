//! In-memory worksheet grid

/// A single cell value in its display form. Empty cells are `None`.
pub type Cell = Option<String>;

/// One worksheet: its title and the cell grid anchored at A1
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    /// Worksheet title as shown on the tab
    pub name: String,
    /// Rows in sheet order. Row 0 here is spreadsheet row 1.
    pub rows: Vec<Vec<Cell>>,
}

impl Worksheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Build a worksheet from string literals, treating `""` as an empty cell.
    ///
    /// Mostly useful for tests and benchmarks.
    pub fn from_strings(name: impl Into<String>, rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|value| (!value.is_empty()).then(|| value.to_string()))
                    .collect()
            })
            .collect();
        Self::new(name, rows)
    }

    /// Number of rows up to the sheet's last used row
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell value at a 1-based (row, column) position, as in spreadsheet notation
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        if row == 0 || column == 0 {
            return None;
        }
        self.rows
            .get(row - 1)
            .and_then(|r| r.get(column - 1))
            .and_then(|c| c.as_deref())
    }
}
