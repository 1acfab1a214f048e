//! Workbook reading for romdata
//!
//! Loads spreadsheet workbooks with formulas resolved to their last computed
//! values and exposes them as named sheets of fixed-width rows.
//!
//! # Examples
//!
//! ## Scanning a row range
//!
//! ```
//! use romdata_sheet::{CellValue, RowRange, Sheet};
//!
//! let sheet = Sheet::from_data(vec![
//!     vec![CellValue::from("Phase"), CellValue::from("Low")],
//!     vec![CellValue::from("Build"), CellValue::from(10)],
//! ]);
//!
//! let rows: Vec<_> = sheet.iter_rows(RowRange::new(2, 10)).collect();
//! assert_eq!(rows.len(), 9);
//! assert_eq!(rows[0].get(1).int_or(0), 10);
//! assert!(rows[1].get(0).is_null());
//! ```
//!
//! ## Working with books
//!
//! ```
//! use romdata_sheet::{Book, Sheet};
//!
//! let mut book = Book::new();
//! book.add_sheet("Points", Sheet::new()).unwrap();
//!
//! assert!(book.get_sheet("Points").is_some());
//! assert!(book.get_sheet("Fees & costs").is_none());
//! ```
//!
//! ## Loading from Excel
//!
//! ```no_run
//! use romdata_sheet::Book;
//!
//! let book = Book::from_xlsx("ROM.xlsx").unwrap();
//! for name in book.sheet_names() {
//!     println!("{name}");
//! }
//! ```

mod book;
mod cell;
mod error;
mod sheet;
mod xlsx;

/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet and row iteration types.
pub use sheet::{Row, RowRange, Rows, Sheet};
