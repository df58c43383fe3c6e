//! menucsv - food-menu spreadsheet to pipe-delimited CSV
//!
//! Converts the first sheet of a food-menu `.xlsx` workbook into a
//! pipe-delimited CSV export. Each record is annotated with the sheet name,
//! the 4-digit year read from header cell E3, and the menu group (PLATTER
//! or DRINKS) carried over from the most recent marker cell.
//!
//! # Example
//!
//! ```no_run
//! use menucsv::excel::open_menu_sheet;
//! use menucsv::header;
//! use std::path::Path;
//!
//! let sheet = open_menu_sheet(Path::new("food_menu.xlsx"))?;
//! let year = header::extract_year(&sheet.range)?;
//!
//! println!("Sheet: {}", sheet.name);
//! println!("Year: {}", year);
//! # Ok::<(), menucsv::error::MenuError>(())
//! ```

pub mod classify;
pub mod cli;
pub mod error;
pub mod excel;
pub mod export;
pub mod header;
pub mod input;

// Re-export commonly used types
pub use classify::MenuGroup;
pub use error::{MenuError, MenuResult};
