//! Workbook reading via calamine

use crate::error::{MenuError, MenuResult};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;
use tracing::info;

/// The first worksheet of the menu workbook: its name doubles as the
/// month-lookup key and the first field of every exported record.
pub struct MenuSheet {
    pub name: String,
    pub range: Range<Data>,
}

/// Open the workbook and load its first sheet. Only the first sheet is
/// ever read.
pub fn open_menu_sheet(path: &Path) -> MenuResult<MenuSheet> {
    info!("Opening file '{}'", path.display());

    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| MenuError::Spreadsheet(format!("Failed to open Excel file: {e}")))?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| MenuError::Spreadsheet("No worksheets found in file".to_string()))?;

    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| MenuError::Spreadsheet(format!("Unable to read worksheet '{name}': {e}")))?;

    Ok(MenuSheet { name, range })
}
