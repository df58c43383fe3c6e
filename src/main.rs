use clap::Parser;
use menucsv::cli;
use std::path::PathBuf;
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "menucsv")]
#[command(about = "Convert a food-menu spreadsheet (.xlsx) to a pipe-delimited CSV export")]
#[command(long_about = "menucsv - one-shot spreadsheet to CSV conversion

Reads the first sheet of a food-menu workbook, classifies each row as
PLATTER or DRINKS from marker cells, and writes the qualifying rows to
{year}{month}FOOD_MENU.csv in the current directory. The year comes from
header cell E3 and the month from the sheet name.

EXIT CODES:
  0  success
  1  I/O, spreadsheet, or CSV write failure
  2  input file not found
  3  input is not an Open XML spreadsheet
  4  year cell E3 is missing or non-numeric
  5  year cell E3 is not a 4-digit year

EXAMPLES:
  menucsv                    # convert ./food_menu.xlsx
  menucsv menus/march.xlsx   # convert a specific workbook")]
#[command(version)]
struct Cli {
    /// Input spreadsheet path (defaults to food_menu.xlsx)
    file: Option<PathBuf>,

    /// Log per-row progress while reading
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cli::convert(cli.file, cli.verbose) {
        error!("{}", e);
        process::exit(e.exit_code());
    }
}
