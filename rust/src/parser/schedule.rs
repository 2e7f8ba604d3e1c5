//! Weekly timetable grid decoder.
//!
//! The sheet encodes its structure geometrically:
//! - every group owns a fixed-width run of columns after the sidebar,
//! - the fill color of the group's first column tells odd-week rows from even-week rows,
//! - a day ends on a cell whose bottom border has the day-boundary style,
//! - every period spans `period_height` rows of one parity.
//!
//! A period record is a `period_height`-tall slice of the group's four columns.
//! Columns 0-1 describe the first subgroup and columns 2-3 the second: the
//! first column of a pair holds subject and lecturer, the second one the room.
//! When the subject cell spans both subgroups, the second column's first row is
//! a merged continuation and the record is one shared period with its room in
//! the last column.

use crate::config::ScheduleLayout;
use crate::error::FormatError;
use crate::models::{Day, GroupSchedule, Period, WeekVariant, NO_SUBGROUP};
use crate::weekday::Weekday;
use crate::worksheet::{Cell, Worksheet};
use crate::{log_debug, log_detail, log_summary};

/// `(column, row)` inside a period record flagged when the subject spans both subgroups.
const SHARED_MARKER: (usize, usize) = (1, 0);
/// Room column of a shared period.
const SHARED_ROOM_COLUMN: usize = 3;
/// `(subject/lecturer column, room column)` of each subgroup.
const SUBGROUP_PAIRS: [(usize, usize); 2] = [(0, 1), (2, 3)];

/// Lazily decodes one `GroupSchedule` per group chunk of a timetable sheet.
pub struct ScheduleParser<'a> {
    sheet: &'a Worksheet,
    layout: &'a ScheduleLayout,
    groups: std::vec::IntoIter<Vec<u32>>,
}

/// Decode the timetable `sheet` laid out as described by `layout`.
pub fn parse_schedule<'a>(sheet: &'a Worksheet, layout: &'a ScheduleLayout) -> ScheduleParser<'a> {
    ScheduleParser::new(sheet, layout)
}

/// Sheet columns of every group, junk columns excluded.
///
/// Only complete chunks of `group_width` columns are kept.
fn group_columns(max_column: u32, layout: &ScheduleLayout) -> Vec<Vec<u32>> {
    let first = layout.sidebar_width as u32 + 1;
    let last = max_column.saturating_sub(layout.junk_width as u32);
    if layout.group_width == 0 || first > last {
        return Vec::new();
    }

    let columns: Vec<u32> = (first..=last).collect();
    columns
        .chunks_exact(layout.group_width)
        .map(|chunk| chunk[layout.junk_width.min(chunk.len())..].to_vec())
        .filter(|chunk| !chunk.is_empty())
        .collect()
}

/// Cut a column into days, closing a day on every boundary border.
///
/// Cells after the last boundary belong to no day.
fn split_days<'c>(column: &[&'c Cell], boundary: &str) -> Vec<Vec<&'c Cell>> {
    let mut days = Vec::new();
    let mut current = Vec::new();

    for &cell in column {
        current.push(cell);
        if cell.bottom_border.as_deref() == Some(boundary) {
            days.push(std::mem::take(&mut current));
        }
    }

    days
}

/// Rows of one period across the columns of a group.
struct PeriodRecord<'r, 'c> {
    columns: Vec<&'r [&'c Cell]>,
}

impl<'r, 'c> PeriodRecord<'r, 'c> {
    fn cell(&self, column: usize, row: usize) -> Option<&'c Cell> {
        self.columns.get(column).and_then(|cells| cells.get(row)).copied()
    }

    fn text(&self, column: usize, row: usize) -> Option<&'c str> {
        self.cell(column, row).and_then(Cell::text)
    }

    fn is_shared(&self) -> bool {
        let (column, row) = SHARED_MARKER;
        self.cell(column, row).is_some_and(|cell| cell.merged)
    }
}

impl<'a> ScheduleParser<'a> {
    pub fn new(sheet: &'a Worksheet, layout: &'a ScheduleLayout) -> Self {
        let groups = group_columns(sheet.max_column(), layout);
        log_detail!(
            layout.verbosity,
            "Timetable sheet: {} rows, {} columns, {} groups",
            sheet.max_row(),
            sheet.max_column(),
            groups.len()
        );
        Self {
            sheet,
            layout,
            groups: groups.into_iter(),
        }
    }

    /// Cells of a column with header and footer rows trimmed.
    fn body(&self, column: u32) -> Vec<&'a Cell> {
        let first = self.layout.header_rows as u32 + 1;
        let last = self
            .sheet
            .max_row()
            .saturating_sub(self.layout.footer_rows as u32);
        (first..=last)
            .filter_map(|row| self.sheet.cell(row, column))
            .collect()
    }

    fn parse_group(&self, columns: &[u32]) -> Result<GroupSchedule, FormatError> {
        let first_column = columns[0];
        let group = self
            .sheet
            .text(self.layout.group_row, first_column)
            .ok_or(FormatError::MissingValue {
                row: self.layout.group_row,
                column: first_column,
                what: "group name",
            })?
            .to_string();

        let body: Vec<Vec<&Cell>> = columns.iter().map(|&column| self.body(column)).collect();
        let reference = &body[0];
        let is_odd_row = |index: usize| {
            reference
                .get(index)
                .is_some_and(|cell| cell.fill_color.as_deref() == Some(self.layout.odd_color.as_str()))
        };

        let mut weeks = Vec::with_capacity(2);
        for odd in [true, false] {
            let rows: Vec<Vec<&Cell>> = body
                .iter()
                .map(|column| {
                    column
                        .iter()
                        .enumerate()
                        .filter(|&(index, _)| is_odd_row(index) == odd)
                        .map(|(_, &cell)| cell)
                        .collect()
                })
                .collect();
            // Odd-colored rows form the odd academic week, which has parity false.
            weeks.push(WeekVariant::new(!odd, self.parse_days(&group, &rows)?));
        }

        log_summary!(
            self.layout.verbosity,
            "Decoded group {:?} from columns {:?}",
            group,
            columns
        );
        Ok(GroupSchedule::new(group, weeks))
    }

    fn parse_days(&self, group: &str, columns: &[Vec<&'a Cell>]) -> Result<Vec<Day>, FormatError> {
        let split: Vec<Vec<Vec<&Cell>>> = columns
            .iter()
            .map(|column| split_days(column, &self.layout.weekday_border))
            .collect();
        let count = split.iter().map(Vec::len).min().unwrap_or(0);

        (0..count)
            .map(|index| {
                let slab: Vec<&[&Cell]> = split.iter().map(|days| days[index].as_slice()).collect();
                let day = self.parse_day(&slab)?;
                log_detail!(
                    self.layout.verbosity,
                    "  {}: {:?} with {} periods",
                    group,
                    day.weekday,
                    day.periods.len()
                );
                Ok(day)
            })
            .collect()
    }

    /// Decode one day slab. Every column of the slab holds at least one cell.
    fn parse_day(&self, slab: &[&[&'a Cell]]) -> Result<Day, FormatError> {
        let first_row = slab[0][0].row;
        let weekday = Weekday::from_name(
            self.sheet
                .text(first_row, self.layout.weekday_column)
                .unwrap_or_default(),
        )?;

        let height = self.layout.period_height;
        if height == 0 {
            return Ok(Day::new(weekday, Vec::new()));
        }

        let chunked: Vec<Vec<&[&Cell]>> = slab
            .iter()
            .map(|cells| cells.chunks_exact(height).collect())
            .collect();
        let count = chunked.iter().map(Vec::len).min().unwrap_or(0);

        let mut periods = Vec::new();
        for index in 0..count {
            let record = PeriodRecord {
                columns: chunked.iter().map(|chunks| chunks[index]).collect(),
            };
            periods.extend(self.parse_period(&record)?);
        }

        Ok(Day::new(weekday, periods))
    }

    fn period_number(&self, cell: &Cell) -> Result<u32, FormatError> {
        self.sheet.integer(cell.row, self.layout.number_column)
    }

    fn parse_period(&self, record: &PeriodRecord<'_, 'a>) -> Result<Vec<Period>, FormatError> {
        let mut periods = Vec::with_capacity(SUBGROUP_PAIRS.len());

        if record.is_shared() {
            let Some(anchor) = record.cell(0, 0) else {
                return Ok(periods);
            };
            periods.push(Period::new(
                self.period_number(anchor)?,
                NO_SUBGROUP,
                record.text(0, 0),
                record.text(0, 1),
                record.text(SHARED_ROOM_COLUMN, 0),
            ));
        } else {
            for (first, second) in SUBGROUP_PAIRS {
                let Some(subject) = record.cell(first, 0).filter(|cell| !cell.is_blank()) else {
                    continue;
                };
                periods.push(Period::new(
                    self.period_number(subject)?,
                    self.sheet.integer(self.layout.subgroup_row, subject.column)?,
                    subject.text(),
                    record.text(first, 1),
                    record.text(second, 0),
                ));
            }
        }

        for period in &periods {
            log_debug!(self.layout.verbosity, "    {:?}", period);
        }
        Ok(periods)
    }
}

impl Iterator for ScheduleParser<'_> {
    type Item = Result<GroupSchedule, FormatError>;

    fn next(&mut self) -> Option<Self::Item> {
        let columns = self.groups.next()?;
        Some(self.parse_group(&columns))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.groups.size_hint()
    }
}
