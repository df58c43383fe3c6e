//! Record emission: pipe-delimited CSV output

use crate::error::MenuResult;
use csv::WriterBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Fixed stem of the generated export file.
const OUTPUT_STEM: &str = "FOOD_MENU";

/// Field delimiter of the export format.
const DELIMITER: u8 = b'|';

/// Derive the export filename from the header year and month code, e.g.
/// `202401FOOD_MENU.csv`. A second run with the same year and month
/// overwrites the prior output.
pub fn output_filename(year: i32, month_code: &str) -> PathBuf {
    PathBuf::from(format!("{year}{month_code}{OUTPUT_STEM}.csv"))
}

/// Pipe-delimited CSV writer with a running record count.
///
/// Fields are quoted per standard CSV rules when they contain the
/// delimiter, a quote character, or a newline.
pub struct CsvExporter {
    writer: csv::Writer<File>,
    records_written: u64,
}

impl CsvExporter {
    /// Create the export file, truncating any previous run's output.
    pub fn create(path: &Path) -> MenuResult<Self> {
        let writer = WriterBuilder::new()
            .delimiter(DELIMITER)
            .flexible(true)
            .from_path(path)?;
        Ok(Self {
            writer,
            records_written: 0,
        })
    }

    /// Write one record: sheet name, year, group, then the row's cell
    /// values in column order.
    pub fn write_record(
        &mut self,
        sheet_name: &str,
        year: i32,
        group: &str,
        values: &[String],
    ) -> MenuResult<()> {
        let year = year.to_string();
        let fields = [sheet_name, year.as_str(), group]
            .into_iter()
            .chain(values.iter().map(String::as_str));
        self.writer.write_record(fields)?;
        self.records_written += 1;
        Ok(())
    }

    /// Flush buffered output and return the emitted-record count.
    pub fn finish(mut self) -> MenuResult<u64> {
        self.writer.flush()?;
        Ok(self.records_written)
    }
}
