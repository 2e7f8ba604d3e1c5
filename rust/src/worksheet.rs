//! In-memory view of a styled spreadsheet.
//!
//! Reading the workbook file is left to the caller; this module only holds
//! what the decoders look at: values, positions, the merged-continuation flag,
//! the bottom border style and the fill color of each cell.

use pyo3::prelude::*;

use crate::error::FormatError;

/// One cell of a worksheet.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    #[pyo3(get)]
    pub row: u32,
    #[pyo3(get)]
    pub column: u32,
    #[pyo3(get)]
    pub value: Option<String>,
    /// True when the cell is a continuation of a merged range (not its anchor)
    #[pyo3(get)]
    pub merged: bool,
    #[pyo3(get)]
    pub bottom_border: Option<String>,
    #[pyo3(get)]
    pub fill_color: Option<String>,
}

impl Cell {
    pub fn new(row: u32, column: u32, value: Option<&str>) -> Self {
        Self {
            row,
            column,
            value: value.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn with_border(mut self, style: &str) -> Self {
        self.bottom_border = Some(style.to_string());
        self
    }

    pub fn with_fill(mut self, color: &str) -> Self {
        self.fill_color = Some(color.to_string());
        self
    }

    pub fn into_merged(mut self) -> Self {
        self.merged = true;
        self.value = None;
        self
    }

    /// Trimmed value, `None` for blank cells.
    pub fn text(&self) -> Option<&str> {
        non_blank(self.value.as_deref())
    }

    pub fn is_blank(&self) -> bool {
        self.text().is_none()
    }

    /// Integer value of the cell.
    pub fn integer(&self) -> Result<u32, FormatError> {
        parse_integer(self.value.as_deref()).ok_or_else(|| FormatError::InvalidInteger {
            row: self.row,
            column: self.column,
            value: self.value.clone(),
        })
    }
}

#[pymethods]
impl Cell {
    #[new]
    #[pyo3(signature = (row, column, value=None, merged=false, bottom_border=None, fill_color=None))]
    fn py_new(
        row: u32,
        column: u32,
        value: Option<String>,
        merged: bool,
        bottom_border: Option<String>,
        fill_color: Option<String>,
    ) -> Self {
        Self {
            row,
            column,
            value,
            merged,
            bottom_border,
            fill_color,
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "Cell(row={}, column={}, value={:?}, merged={})",
            self.row, self.column, self.value, self.merged
        )
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

/// Parse an integer cell value.
///
/// Spreadsheet readers frequently hand whole numbers back as floats, so an
/// integral decimal rendering such as `"3.0"` is accepted too.
pub(crate) fn parse_integer(value: Option<&str>) -> Option<u32> {
    let text = non_blank(value)?;
    if let Ok(n) = text.parse::<u32>() {
        return Some(n);
    }
    let float = text.parse::<f64>().ok()?;
    if float.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&float) {
        Some(float as u32)
    } else {
        None
    }
}

/// Rectangular, 1-indexed cell matrix.
#[derive(Clone, Debug, Default)]
pub struct Worksheet {
    rows: Vec<Vec<Cell>>,
    max_column: u32,
}

impl Worksheet {
    /// Build a worksheet from rows of cells.
    ///
    /// Ragged rows are padded with blank cells so every row has the same
    /// width; cell coordinates are taken from the position in `rows`.
    pub fn new(rows: Vec<Vec<Cell>>) -> Self {
        let max_column = rows.iter().map(Vec::len).max().unwrap_or(0);
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row_idx, mut row)| {
                row.resize_with(max_column, Cell::default);
                for (col_idx, cell) in row.iter_mut().enumerate() {
                    cell.row = row_idx as u32 + 1;
                    cell.column = col_idx as u32 + 1;
                }
                row
            })
            .collect();
        Self {
            rows,
            max_column: max_column as u32,
        }
    }

    pub fn max_row(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn max_column(&self) -> u32 {
        self.max_column
    }

    /// Cell at 1-based `(row, column)`.
    pub fn cell(&self, row: u32, column: u32) -> Option<&Cell> {
        let row = self.rows.get((row as usize).checked_sub(1)?)?;
        row.get((column as usize).checked_sub(1)?)
    }

    /// Value of the cell at `(row, column)`, `None` when blank or outside the sheet.
    pub fn text(&self, row: u32, column: u32) -> Option<&str> {
        self.cell(row, column).and_then(Cell::text)
    }

    /// Integer value of the cell at `(row, column)`.
    pub fn integer(&self, row: u32, column: u32) -> Result<u32, FormatError> {
        match self.cell(row, column) {
            Some(cell) => cell.integer(),
            None => Err(FormatError::InvalidInteger {
                row,
                column,
                value: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer(Some("3")), Some(3));
        assert_eq!(parse_integer(Some(" 12 ")), Some(12));
        assert_eq!(parse_integer(Some("2.0")), Some(2));
        assert_eq!(parse_integer(Some("2.5")), None);
        assert_eq!(parse_integer(Some("-1")), None);
        assert_eq!(parse_integer(Some("first")), None);
        assert_eq!(parse_integer(Some("  ")), None);
        assert_eq!(parse_integer(None), None);
    }

    #[test]
    fn test_worksheet_is_one_indexed_and_padded() {
        let sheet = Worksheet::new(vec![
            vec![Cell::new(0, 0, Some("a")), Cell::new(0, 0, Some("b"))],
            vec![Cell::new(0, 0, Some("7"))],
        ]);
        assert_eq!(sheet.max_row(), 2);
        assert_eq!(sheet.max_column(), 2);
        assert_eq!(sheet.text(1, 2), Some("b"));
        assert_eq!(sheet.text(2, 2), None);
        assert_eq!(sheet.cell(2, 2).map(|c| (c.row, c.column)), Some((2, 2)));
        assert_eq!(sheet.integer(2, 1), Ok(7));
        assert!(sheet.cell(0, 1).is_none());
        assert!(sheet.cell(3, 1).is_none());
    }

    #[test]
    fn test_integer_error_carries_position() {
        let sheet = Worksheet::new(vec![vec![Cell::new(0, 0, Some("x"))]]);
        assert_eq!(
            sheet.integer(1, 1),
            Err(FormatError::InvalidInteger {
                row: 1,
                column: 1,
                value: Some("x".to_string()),
            })
        );
        assert!(matches!(
            sheet.integer(5, 5),
            Err(FormatError::InvalidInteger { value: None, .. })
        ));
    }

    #[test]
    fn test_blank_cells() {
        assert!(Cell::new(1, 1, Some("   ")).is_blank());
        assert!(Cell::new(1, 1, None).is_blank());
        assert_eq!(Cell::new(1, 1, Some(" Math ")).text(), Some("Math"));
        let merged = Cell::new(1, 1, Some("x")).into_merged();
        assert!(merged.merged && merged.is_blank());
    }
}
