//! Substitutions sheet decoder.
//!
//! Each row reads: group, period number, then the replaced period and its
//! replacement as two runs of (subgroup, subject, lecturer, room). Both
//! periods take the row's period number; a blank subgroup means the whole group.

use crate::config::SubstitutionsLayout;
use crate::error::FormatError;
use crate::models::{Period, Substitution, NO_SUBGROUP};
use crate::worksheet::{non_blank, parse_integer};
use crate::{log_debug, log_detail};

const GROUP_COLUMN: usize = 0;
const NUMBER_COLUMN: usize = 1;
const REPLACED_COLUMNS: usize = 2;
const REPLACEMENT_COLUMNS: usize = 6;

/// Lazily decodes one `Substitution` per non-blank row.
pub struct SubstitutionsParser<'a> {
    rows: std::iter::Skip<std::iter::Enumerate<std::slice::Iter<'a, Vec<Option<String>>>>>,
    layout: &'a SubstitutionsLayout,
}

/// Decode the rows of a substitutions sheet.
pub fn parse_substitutions<'a>(
    rows: &'a [Vec<Option<String>>],
    layout: &'a SubstitutionsLayout,
) -> SubstitutionsParser<'a> {
    SubstitutionsParser {
        rows: rows.iter().enumerate().skip(layout.header_rows),
        layout,
    }
}

/// Values of one row, trimmed, blank cells as `None`.
struct RowValues<'r> {
    /// 1-based sheet row
    row: u32,
    cells: Vec<Option<&'r str>>,
}

impl<'r> RowValues<'r> {
    fn new(row: u32, values: &'r [Option<String>], width: usize) -> Self {
        let cells = (0..width)
            .map(|index| values.get(index).and_then(|v| non_blank(v.as_deref())))
            .collect();
        Self { row, cells }
    }

    fn is_blank(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    fn get(&self, index: usize) -> Option<&'r str> {
        self.cells.get(index).copied().flatten()
    }

    fn required(&self, index: usize, what: &str) -> Result<&'r str, FormatError> {
        self.get(index).ok_or_else(|| FormatError::IncompleteRow {
            row: self.row,
            reason: format!("{} is blank", what),
        })
    }

    fn integer(&self, index: usize) -> Result<u32, FormatError> {
        parse_integer(self.get(index)).ok_or_else(|| FormatError::InvalidInteger {
            row: self.row,
            column: index as u32 + 1,
            value: self.get(index).map(str::to_string),
        })
    }

    /// Period described by the four cells starting at `first`.
    fn period(&self, first: usize, number: u32) -> Result<Period, FormatError> {
        let subgroup = match self.get(first) {
            Some(_) => self.integer(first)?,
            None => NO_SUBGROUP,
        };
        Ok(Period::new(
            number,
            subgroup,
            self.get(first + 1),
            self.get(first + 2),
            self.get(first + 3),
        ))
    }

    fn substitution(&self) -> Result<Substitution, FormatError> {
        let group = self.required(GROUP_COLUMN, "group")?;
        self.required(NUMBER_COLUMN, "period number")?;
        let number = self.integer(NUMBER_COLUMN)?;

        Ok(Substitution::new(
            group.to_string(),
            self.period(REPLACED_COLUMNS, number)?,
            self.period(REPLACEMENT_COLUMNS, number)?,
        ))
    }
}

impl Iterator for SubstitutionsParser<'_> {
    type Item = Result<Substitution, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        for (index, values) in self.rows.by_ref() {
            let row = RowValues::new(index as u32 + 1, values, self.layout.width);
            if row.is_blank() {
                log_detail!(self.layout.verbosity, "Skipping blank row {}", row.row);
                continue;
            }

            let result = row.substitution();
            if let Ok(substitution) = &result {
                log_debug!(self.layout.verbosity, "Row {}: {:?}", row.row, substitution);
            }
            return Some(result);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| if v.is_empty() { None } else { Some(v.to_string()) })
            .collect()
    }

    fn parse(rows: &[Vec<Option<String>>]) -> Vec<Result<Substitution, FormatError>> {
        let layout = SubstitutionsLayout::default();
        parse_substitutions(rows, &layout).collect()
    }

    fn header() -> Vec<Option<String>> {
        row(&["Группа", "Пара", "", "Предмет", "", "", "", "Замена", "", ""])
    }

    #[test]
    fn test_decodes_replacement() {
        let rows = vec![
            header(),
            row(&["101", "1", "", "Math", "Smith", "12", "", "PE", "Jones", "Gym"]),
        ];
        let parsed = parse(&rows);
        assert_eq!(
            parsed,
            vec![Ok(Substitution::new(
                "101".to_string(),
                Period::new(1, 0, Some("Math"), Some("Smith"), Some("12")),
                Period::new(1, 0, Some("PE"), Some("Jones"), Some("Gym")),
            ))]
        );
    }

    #[test]
    fn test_subgroups_and_cancellations() {
        let rows = vec![
            header(),
            row(&["102", "3.0", "2", "History", "Brown", "5", "1", "", "", ""]),
        ];
        let substitution = parse(&rows).remove(0).unwrap();
        assert_eq!(substitution.period.slot(), (3, 2));
        assert_eq!(substitution.substitution.slot(), (3, 1));
        assert!(substitution.substitution.is_empty());
        assert_eq!(substitution.number(), 3);
        assert_eq!(substitution.subgroup(), 1);
    }

    #[test]
    fn test_skips_blank_rows() {
        let rows = vec![
            header(),
            row(&["", "", "", "", "", "", "", "", "", ""]),
            row(&["101", "2", "", "", "", "", "", "Art", "Green", "3"]),
            vec![None; 10],
            row(&["  ", "", "", "", "", "", "", "", "", ""]),
            Vec::new(),
        ];
        let parsed = parse(&rows);
        assert_eq!(parsed.len(), 1);
        let substitution = parsed[0].as_ref().unwrap();
        assert!(substitution.period.is_empty());
        assert_eq!(substitution.substitution.subject.as_deref(), Some("Art"));
    }

    #[test]
    fn test_short_rows_are_padded() {
        let rows = vec![header(), row(&["101", "4", "", "Math", "Smith", "12"])];
        let substitution = parse(&rows).remove(0).unwrap();
        assert_eq!(substitution.substitution, Period::empty(4, 0));
    }

    #[test]
    fn test_cells_past_width_are_ignored() {
        let rows = vec![
            header(),
            row(&["", "", "", "", "", "", "", "", "", "", "note"]),
        ];
        assert!(parse(&rows).is_empty());
    }

    #[test]
    fn test_invalid_period_number() {
        let rows = vec![
            header(),
            row(&["101", "first", "", "Math", "Smith", "12", "", "", "", ""]),
        ];
        assert_eq!(
            parse(&rows),
            vec![Err(FormatError::InvalidInteger {
                row: 2,
                column: 2,
                value: Some("first".to_string()),
            })]
        );
    }

    #[test]
    fn test_invalid_subgroup() {
        let rows = vec![
            header(),
            row(&["101", "1", "", "Math", "Smith", "12", "b", "PE", "Jones", "Gym"]),
        ];
        assert!(matches!(
            parse(&rows)[0],
            Err(FormatError::InvalidInteger { row: 2, column: 7, .. })
        ));
    }

    #[test]
    fn test_partially_blank_row() {
        let rows = vec![
            header(),
            row(&["", "1", "", "Math", "Smith", "12", "", "", "", ""]),
            row(&["101", "", "", "Math", "Smith", "12", "", "", "", ""]),
            row(&["101", "2", "", "Math", "Smith", "12", "", "", "", ""]),
        ];
        let parsed = parse(&rows);
        assert_eq!(parsed.len(), 3);
        assert!(matches!(parsed[0], Err(FormatError::IncompleteRow { row: 2, .. })));
        assert!(matches!(parsed[1], Err(FormatError::IncompleteRow { row: 3, .. })));
        assert!(parsed[2].is_ok());
    }

    #[test]
    fn test_header_rows_are_skipped() {
        let rows = vec![row(&["101", "x"])];
        assert!(parse(&rows).is_empty());
        let layout = SubstitutionsLayout {
            header_rows: 0,
            ..SubstitutionsLayout::default()
        };
        assert_eq!(parse_substitutions(&rows, &layout).count(), 1);
    }
}
