use crate::book::Book;
use crate::cell::CellValue;
use crate::error::Result;
use crate::sheet::Sheet;
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            // Excel stores dates as days since 1899-12-30
            CellValue::Float(dt.as_f64())
        }
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(_) => CellValue::Null,
    }
}

/// Lay a calamine range out on an A1-anchored grid.
///
/// calamine trims leading empty rows and columns, so the range's start offset
/// is re-applied as null padding to keep row and column numbers absolute.
fn range_to_grid(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((first_row, first_col)) = range.start() else {
        return Vec::new();
    };

    let mut data: Vec<Vec<CellValue>> = vec![Vec::new(); first_row as usize];
    for row in range.rows() {
        let mut cells = vec![CellValue::Null; first_col as usize];
        cells.extend(row.iter().map(data_to_cell_value));
        data.push(cells);
    }
    data
}

impl Book {
    /// Load a book from an Excel file (all sheets, computed values)
    ///
    /// The file handle is released before this returns, on success or error.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened or any sheet cannot be read.
    pub fn from_xlsx<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut workbook: Xlsx<BufReader<File>> = open_workbook(path)?;

        let name = path
            .file_stem()
            .map_or_else(|| "Book1".to_string(), |s| s.to_string_lossy().into_owned());
        let mut book = Book::with_name(&name);

        let sheet_names: Vec<String> = workbook.sheet_names();
        for sheet_name in sheet_names {
            let range = workbook.worksheet_range(&sheet_name)?;
            let mut sheet = Sheet::with_name(&sheet_name);
            sheet.set_data(range_to_grid(&range));
            book.add_sheet(&sheet_name, sheet)?;
        }

        Ok(book)
    }
}
