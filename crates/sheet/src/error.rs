use thiserror::Error;

/// Errors that can occur while reading workbooks
#[derive(Error, Debug)]
pub enum SheetError {
    #[error("Sheet already exists: {name}")]
    SheetAlreadyExists { name: String },

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::XlsxError),
}

pub type Result<T> = std::result::Result<T, SheetError>;
