//! Layout constants of the timetable and substitution sheets.

use pyo3::prelude::*;

/// Geometry of the weekly timetable sheet.
///
/// Row and column numbers are 1-based sheet coordinates; widths and heights
/// are counts.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScheduleLayout {
    /// Leading columns (weekday and period number) skipped before the groups
    #[pyo3(get, set)]
    pub sidebar_width: usize,
    /// Trailing sheet columns dropped, and leading columns dropped from every group chunk
    #[pyo3(get, set)]
    pub junk_width: usize,
    /// Columns per group chunk, including the junk columns
    #[pyo3(get, set)]
    pub group_width: usize,
    /// Rows trimmed from the top of every column
    #[pyo3(get, set)]
    pub header_rows: usize,
    /// Rows trimmed from the bottom of every column
    #[pyo3(get, set)]
    pub footer_rows: usize,
    /// Rows occupied by one period within a single week parity
    #[pyo3(get, set)]
    pub period_height: usize,
    #[pyo3(get, set)]
    pub weekday_column: u32,
    #[pyo3(get, set)]
    pub number_column: u32,
    #[pyo3(get, set)]
    pub group_row: u32,
    #[pyo3(get, set)]
    pub subgroup_row: u32,
    /// Bottom border style closing a day
    #[pyo3(get, set)]
    pub weekday_border: String,
    /// Fill color of rows belonging to the odd week
    #[pyo3(get, set)]
    pub odd_color: String,
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for ScheduleLayout {
    fn default() -> Self {
        Self {
            sidebar_width: 2,
            junk_width: 1,
            group_width: 5,
            header_rows: 3,
            footer_rows: 1,
            period_height: 2,
            weekday_column: 1,
            number_column: 2,
            group_row: 2,
            subgroup_row: 3,
            weekday_border: "medium".to_string(),
            odd_color: "FFD9D9D9".to_string(),
            verbosity: 0,
        }
    }
}

#[pymethods]
impl ScheduleLayout {
    #[new]
    #[pyo3(signature = (
        sidebar_width=None,
        junk_width=None,
        group_width=None,
        header_rows=None,
        footer_rows=None,
        period_height=None,
        weekday_column=None,
        number_column=None,
        group_row=None,
        subgroup_row=None,
        weekday_border=None,
        odd_color=None,
        verbosity=None
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        sidebar_width: Option<usize>,
        junk_width: Option<usize>,
        group_width: Option<usize>,
        header_rows: Option<usize>,
        footer_rows: Option<usize>,
        period_height: Option<usize>,
        weekday_column: Option<u32>,
        number_column: Option<u32>,
        group_row: Option<u32>,
        subgroup_row: Option<u32>,
        weekday_border: Option<String>,
        odd_color: Option<String>,
        verbosity: Option<u8>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            sidebar_width: sidebar_width.unwrap_or(defaults.sidebar_width),
            junk_width: junk_width.unwrap_or(defaults.junk_width),
            group_width: group_width.unwrap_or(defaults.group_width),
            header_rows: header_rows.unwrap_or(defaults.header_rows),
            footer_rows: footer_rows.unwrap_or(defaults.footer_rows),
            period_height: period_height.unwrap_or(defaults.period_height),
            weekday_column: weekday_column.unwrap_or(defaults.weekday_column),
            number_column: number_column.unwrap_or(defaults.number_column),
            group_row: group_row.unwrap_or(defaults.group_row),
            subgroup_row: subgroup_row.unwrap_or(defaults.subgroup_row),
            weekday_border: weekday_border.unwrap_or(defaults.weekday_border),
            odd_color: odd_color.unwrap_or(defaults.odd_color),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleLayout(sidebar_width={}, group_width={}, period_height={}, weekday_border={:?}, odd_color={:?})",
            self.sidebar_width,
            self.group_width,
            self.period_height,
            self.weekday_border,
            self.odd_color
        )
    }
}

/// Geometry of the substitutions sheet.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubstitutionsLayout {
    /// Rows skipped before the first substitution
    #[pyo3(get, set)]
    pub header_rows: usize,
    /// Cells per row: group, number, then two runs of (subgroup, subject, lecturer, room)
    #[pyo3(get, set)]
    pub width: usize,
    #[pyo3(get, set)]
    pub verbosity: u8,
}

impl Default for SubstitutionsLayout {
    fn default() -> Self {
        Self {
            header_rows: 1,
            width: 10,
            verbosity: 0,
        }
    }
}

#[pymethods]
impl SubstitutionsLayout {
    #[new]
    #[pyo3(signature = (header_rows=None, width=None, verbosity=None))]
    fn new(header_rows: Option<usize>, width: Option<usize>, verbosity: Option<u8>) -> Self {
        let defaults = Self::default();
        Self {
            header_rows: header_rows.unwrap_or(defaults.header_rows),
            width: width.unwrap_or(defaults.width),
            verbosity: verbosity.unwrap_or(defaults.verbosity),
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "SubstitutionsLayout(header_rows={}, width={})",
            self.header_rows, self.width
        )
    }
}
