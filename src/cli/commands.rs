use crate::classify::{scan_row, MenuGroup};
use crate::error::MenuResult;
use crate::excel;
use crate::export::{output_filename, CsvExporter};
use crate::header;
use crate::input;
use colored::Colorize;
use std::path::PathBuf;
use tracing::{debug, info};

/// Execute the convert command: resolve the input, read the header, fold
/// over the rows carrying the menu group, and write the pipe-delimited
/// export.
pub fn convert(file: Option<PathBuf>, verbose: bool) -> MenuResult<()> {
    let path = input::resolve(file)?;
    let sheet = excel::open_menu_sheet(&path)?;

    let month = header::month_code(&sheet.name);
    let year = header::extract_year(&sheet.range)?;

    info!("Preparing to read your file");

    let out_path = output_filename(year, month);
    let mut exporter = CsvExporter::create(&out_path)?;

    let first_row = sheet.range.start().map(|(row, _)| row).unwrap_or(0);
    let mut group: Option<MenuGroup> = None;

    for (offset, cells) in sheet.range.rows().enumerate() {
        let row_number = first_row as usize + offset + 1;
        if verbose {
            info!("Reading row {}", row_number);
        } else {
            debug!("Reading row {}", row_number);
        }

        let (next_group, scan) = scan_row(group, cells);
        if scan.exportable() {
            if let Some(g) = next_group {
                exporter.write_record(&sheet.name, year, g.as_str(), &scan.values)?;
            }
        }
        group = next_group;
    }

    let count = exporter.finish()?;
    info!("Successfully created a CSV file");
    println!(
        "{} {} record(s) written to {}",
        "✅".green(),
        count,
        out_path.display().to_string().bold()
    );

    Ok(())
}
