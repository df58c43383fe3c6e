//! Header extraction: month code from the sheet name, year from cell E3

use crate::error::{MenuError, MenuResult};
use calamine::{Data, Range};

/// Workbook coordinate of the year header cell: E3, zero-indexed.
const YEAR_CELL: (u32, u32) = (2, 4);

/// Map a sheet name to its two-digit month code.
///
/// Matching is case-insensitive against English month names and their
/// three-letter abbreviations. Unrecognized names map to "00" rather than
/// failing; the output filename just loses its month component.
pub fn month_code(sheet_name: &str) -> &'static str {
    match sheet_name.to_uppercase().as_str() {
        "JAN" | "JANUARY" => "01",
        "FEB" | "FEBRUARY" => "02",
        "MAR" | "MARCH" => "03",
        "APR" | "APRIL" => "04",
        "MAY" => "05",
        "JUN" | "JUNE" => "06",
        "JUL" | "JULY" => "07",
        "AUG" | "AUGUST" => "08",
        "SEP" | "SEPTEMBER" => "09",
        "OCT" | "OCTOBER" => "10",
        "NOV" | "NOVEMBER" => "11",
        "DEC" | "DECEMBER" => "12",
        _ => "00",
    }
}

/// Read and validate the 4-digit year from the fixed header cell.
///
/// The cell must hold a numeric value; its truncated integer must stringify
/// to exactly four digits. Anything else aborts the run.
pub fn extract_year(range: &Range<Data>) -> MenuResult<i32> {
    let year = match range.get_value(YEAR_CELL) {
        Some(Data::Float(f)) => *f as i32,
        Some(Data::Int(i)) => *i as i32,
        _ => return Err(MenuError::MissingYear),
    };

    if !year_is_valid(year) {
        return Err(MenuError::InvalidYear(year.to_string()));
    }

    Ok(year)
}

/// A year is valid when its decimal form is exactly four digits. No
/// sane-range bound beyond that: 9999 passes.
fn year_is_valid(year: i32) -> bool {
    let digits = year.to_string();
    digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit())
}
