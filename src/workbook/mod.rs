//! Workbook access
//!
//! The rest of the crate only sees [`Worksheet`] values: a title plus a grid
//! of optional string cells. Reading the spreadsheet file itself is delegated
//! to calamine.

mod reader;
mod worksheet;

pub use reader::Workbook;
pub use worksheet::{Cell, Worksheet};
