//! Row classification: menu-group markers, footnote rows, cell text

use calamine::Data;

/// Marker cell value that starts a PLATTER run.
pub const PLATTER: &str = "PLATTER";
/// Marker cell value that starts a DRINKS run.
pub const DRINKS: &str = "DRINKS";

/// Menu-group classification carried across the row scan.
///
/// A marker cell sets the group for its own row and every row after it,
/// until the next marker. Rows before the first marker have no group and
/// are never exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuGroup {
    Platter,
    Drinks,
}

impl MenuGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuGroup::Platter => PLATTER,
            MenuGroup::Drinks => DRINKS,
        }
    }
}

/// Outcome of scanning a single row.
#[derive(Debug, Default, PartialEq)]
pub struct RowScan {
    /// Text values of the row's non-empty cells, in column order.
    pub values: Vec<String>,
    /// Set when any cell contains '*', marking a footnote row.
    pub footer: bool,
}

impl RowScan {
    /// A row is exportable when it yielded at least one cell value and is
    /// not a footnote row. The caller additionally requires an active menu
    /// group before emitting.
    pub fn exportable(&self) -> bool {
        !self.values.is_empty() && !self.footer
    }
}

/// Scan one row's cells, returning the updated carried group and the row's
/// collected values.
///
/// A footnote marker ('*' anywhere in a cell) suppresses emission for its
/// own row only; it never mutates the carried group, so the rows that
/// follow still inherit the previous marker.
pub fn scan_row(group: Option<MenuGroup>, cells: &[Data]) -> (Option<MenuGroup>, RowScan) {
    let mut group = group;
    let mut scan = RowScan::default();

    for cell in cells {
        let Some(text) = cell_text(cell) else {
            continue;
        };

        if text == PLATTER {
            group = Some(MenuGroup::Platter);
        } else if text == DRINKS {
            group = Some(MenuGroup::Drinks);
        } else if text.contains('*') {
            scan.footer = true;
        }

        scan.values.push(text);
    }

    (group, scan)
}

/// Text form of a cell, or `None` for cell kinds that are not exported.
///
/// Numeric cells keep the decimal form of the underlying double value, so
/// an integer-valued cell exports as "5.0", not "5". Empty, boolean, error
/// and date cells are skipped entirely.
pub fn cell_text(cell: &Data) -> Option<String> {
    match cell {
        Data::String(s) => Some(s.clone()),
        Data::Float(f) => Some(format_numeric(*f)),
        Data::Int(i) => Some(format!("{i}.0")),
        _ => None,
    }
}

fn format_numeric(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_cell_text_integer_valued_float_keeps_fraction() {
        assert_eq!(cell_text(&Data::Float(5.0)), Some("5.0".to_string()));
        assert_eq!(cell_text(&Data::Int(5)), Some("5.0".to_string()));
    }

    #[test]
    fn test_cell_text_fractional_float() {
        assert_eq!(cell_text(&Data::Float(9.5)), Some("9.5".to_string()));
    }

    #[test]
    fn test_cell_text_skips_untyped_cells() {
        assert_eq!(cell_text(&Data::Empty), None);
        assert_eq!(cell_text(&Data::Bool(true)), None);
    }

    #[test]
    fn test_marker_sets_group_for_own_row() {
        let (group, scan) = scan_row(None, &[text(PLATTER)]);
        assert_eq!(group, Some(MenuGroup::Platter));
        assert_eq!(scan.values, vec![PLATTER.to_string()]);
        assert!(scan.exportable());
    }

    #[test]
    fn test_group_carries_into_following_rows() {
        let (group, _) = scan_row(None, &[text(PLATTER)]);
        let (group, scan) = scan_row(group, &[text("Burger"), Data::Float(9.5)]);

        assert_eq!(group, Some(MenuGroup::Platter));
        assert_eq!(scan.values, vec!["Burger".to_string(), "9.5".to_string()]);
        assert!(scan.exportable());
    }

    #[test]
    fn test_next_marker_replaces_group() {
        let (group, _) = scan_row(None, &[text(PLATTER)]);
        let (group, _) = scan_row(group, &[text(DRINKS)]);
        assert_eq!(group, Some(MenuGroup::Drinks));
    }

    #[test]
    fn test_footer_row_is_suppressed_but_keeps_group() {
        let (group, _) = scan_row(None, &[text(DRINKS)]);
        let (group, scan) = scan_row(group, &[text("* refills not included")]);

        assert!(scan.footer);
        assert!(!scan.exportable());
        // Carried group survives the footnote row.
        assert_eq!(group, Some(MenuGroup::Drinks));

        let (group, scan) = scan_row(group, &[text("Cola"), Data::Float(2.0)]);
        assert_eq!(group, Some(MenuGroup::Drinks));
        assert!(scan.exportable());
        assert_eq!(scan.values, vec!["Cola".to_string(), "2.0".to_string()]);
    }

    #[test]
    fn test_empty_row_yields_nothing() {
        let (group, scan) = scan_row(Some(MenuGroup::Platter), &[Data::Empty, Data::Empty]);
        assert_eq!(group, Some(MenuGroup::Platter));
        assert!(scan.values.is_empty());
        assert!(!scan.exportable());
    }

    #[test]
    fn test_rows_before_first_marker_have_no_group() {
        let (group, scan) = scan_row(None, &[text("Our Menu")]);
        assert_eq!(group, None);
        // Exportable on its own, but the caller requires a group.
        assert!(scan.exportable());
    }

    #[test]
    fn test_marker_must_match_exactly() {
        let (group, _) = scan_row(None, &[text("platter")]);
        assert_eq!(group, None);

        let (group, _) = scan_row(None, &[text("PLATTERS")]);
        assert_eq!(group, None);
    }
}
