//! Excel import module
//!
//! Thin calamine wrapper that opens the workbook and hands the first
//! worksheet to the conversion pipeline.

mod reader;

pub use reader::{open_menu_sheet, MenuSheet};
