//! Input path resolution and content-type validation

use crate::error::{MenuError, MenuResult};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default input filename when no path argument is given.
pub const DEFAULT_INPUT: &str = "food_menu.xlsx";

/// Leading bytes of an Open XML spreadsheet (a ZIP container).
const XLSX_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// Resolve the input spreadsheet path and validate its content type.
///
/// Falls back to [`DEFAULT_INPUT`] when the argument is absent or blank.
/// The content-type check reads the file's leading bytes and requires the
/// fixed ZIP signature carried by `.xlsx` containers; the extension itself
/// is not trusted.
pub fn resolve(arg: Option<PathBuf>) -> MenuResult<PathBuf> {
    let path = match arg {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => PathBuf::from(DEFAULT_INPUT),
    };

    if !path.exists() {
        return Err(MenuError::FileNotFound(path));
    }

    if !has_xlsx_signature(&path)? {
        return Err(MenuError::InvalidFormat(path));
    }

    info!("Validated input file '{}'", path.display());
    Ok(path)
}

fn has_xlsx_signature(path: &Path) -> MenuResult<bool> {
    let mut file = File::open(path)?;
    let mut magic = [0u8; 4];
    match file.read_exact(&mut magic) {
        Ok(()) => Ok(magic == XLSX_SIGNATURE),
        // Shorter than the signature: cannot be a ZIP container.
        Err(e) if e.kind() == std::io::ErrorKind::UnexpectedEof => Ok(false),
        Err(e) => Err(e.into()),
    }
}
