use std::path::PathBuf;
use thiserror::Error;

pub type MenuResult<T> = Result<T, MenuError>;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Input file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("'{0}' is not an Open XML spreadsheet (.xlsx)")]
    InvalidFormat(PathBuf),

    #[error("No defined year value in cell 'E3'. Kindly check the source file.")]
    MissingYear,

    #[error("'{0}' is not a 4-digit year. Kindly check cell 'E3' of the source file.")]
    InvalidYear(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MenuError {
    /// Process exit code for this failure kind. Distinct codes let callers
    /// tell failures apart without parsing the log output.
    pub fn exit_code(&self) -> i32 {
        match self {
            MenuError::FileNotFound(_) => 2,
            MenuError::InvalidFormat(_) => 3,
            MenuError::MissingYear => 4,
            MenuError::InvalidYear(_) => 5,
            MenuError::Spreadsheet(_) | MenuError::Csv(_) | MenuError::Io(_) => 1,
        }
    }
}
