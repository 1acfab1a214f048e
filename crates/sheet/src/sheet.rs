use crate::cell::CellValue;

static NULL: CellValue = CellValue::Null;

/// An inclusive, 1-based range of worksheet rows (row 1 is the first row).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRange {
    start: u32,
    end: u32,
}

impl RowRange {
    /// Create a range covering rows `start..=end`.
    ///
    /// Usable in constants; an invalid range fails at compile time there.
    ///
    /// # Panics
    ///
    /// Panics if `start` is zero or greater than `end`.
    #[must_use]
    pub const fn new(start: u32, end: u32) -> Self {
        assert!(start >= 1 && start <= end, "invalid row range");
        RowRange { start, end }
    }

    /// First row of the range (1-based)
    #[must_use]
    pub fn start(&self) -> u32 {
        self.start
    }

    /// Last row of the range (1-based, inclusive)
    #[must_use]
    pub fn end(&self) -> u32 {
        self.end
    }

    /// Number of rows covered
    #[must_use]
    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// A valid range always covers at least one row
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// A sheet representing a 2D grid of computed cells (row-major storage)
///
/// Cells are addressed absolutely: `data[0][0]` is A1, whatever part of the
/// grid the source file actually used.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
    width: usize,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            data: Vec::new(),
            width: 0,
        }
    }

    /// Create a sheet from a 2D vector of values, starting at A1
    #[must_use]
    pub fn from_data<T: Into<CellValue>>(data: Vec<Vec<T>>) -> Self {
        let mut sheet = Sheet::new();
        sheet.set_data(
            data.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        );
        sheet
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Replace the grid. The sheet width becomes the widest row.
    pub fn set_data(&mut self, data: Vec<Vec<CellValue>>) {
        self.width = data.iter().map(Vec::len).max().unwrap_or(0);
        self.data = data;
    }

    /// Get the number of used rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of used columns
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.width
    }

    /// Check if the sheet holds no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a cell by 0-based position. Cells outside the used grid are null.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &CellValue {
        self.data
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&NULL)
    }

    /// Iterate the rows of `range` lazily.
    ///
    /// Rows past the end of the used grid are still produced (as all-null
    /// rows) so callers always see exactly `range.len()` rows.
    pub fn iter_rows(&self, range: RowRange) -> Rows<'_> {
        Rows {
            sheet: self,
            next: range.start(),
            end: range.end(),
        }
    }
}

/// Lazy iterator over a [`RowRange`] of a [`Sheet`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    sheet: &'a Sheet,
    next: u32,
    end: u32,
}

impl<'a> Iterator for Rows<'a> {
    type Item = Row<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.end {
            return None;
        }
        let number = self.next;
        self.next += 1;
        let cells = self
            .sheet
            .data
            .get(number as usize - 1)
            .map_or(&[][..], Vec::as_slice);
        Some(Row {
            number,
            cells,
            width: self.sheet.width,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.end {
            0
        } else {
            (self.end - self.next) as usize + 1
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Rows<'_> {}

/// One fixed-width worksheet row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    number: u32,
    cells: &'a [CellValue],
    width: usize,
}

impl<'a> Row<'a> {
    /// 1-based row number within the sheet
    #[must_use]
    pub fn number(&self) -> u32 {
        self.number
    }

    /// Width of the row (the sheet's used width)
    #[must_use]
    pub fn len(&self) -> usize {
        self.width
    }

    /// Check if the row has no columns at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// Get a cell by 0-based column index. Missing cells are null.
    #[must_use]
    pub fn get(&self, col: usize) -> &'a CellValue {
        self.cells.get(col).unwrap_or(&NULL)
    }
}
