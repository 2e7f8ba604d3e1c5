//! Rust implementation of the schedule parser core.
//!
//! Decodes weekly class timetables and their substitutions from styled
//! spreadsheet grids, and reconciles them into the periods a group has on a
//! given date.

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use chrono::NaiveDate;
use pyo3::prelude::*;

pub mod bells;
mod config;
pub mod error;
pub mod logging;
mod models;
pub mod parser;
pub mod reconcile;
pub mod week;
mod weekday;
mod worksheet;

pub use bells::{BellsSchedule, BellsVariant};
pub use config::{ScheduleLayout, SubstitutionsLayout};
pub use error::{BellsError, EmptyPeriodError, FormatError, NotFound};
pub use models::{
    Day, GroupSchedule, GroupSchedules, Period, Substitution, Substitutions, WeekVariant,
    NO_SUBGROUP, ROOM_SUFFIX,
};
pub use parser::{parse_schedule, parse_substitutions, ScheduleParser, SubstitutionsParser};
pub use reconcile::schedule_with_substitutions;
pub use week::{academic_week, is_even_week};
pub use weekday::Weekday;
pub use worksheet::{Cell, Worksheet};

/// Decode every group of a timetable sheet.
///
/// # Arguments
/// * `cells` - Rows of styled cells, top to bottom
/// * `layout` - Sheet geometry (template defaults when omitted)
///
/// # Returns
/// * GroupSchedules listing every group in sheet order
///
/// # Raises
/// * ValueError if a period number, subgroup marker, weekday or group name cannot be read
#[pyfunction]
#[pyo3(name = "parse_schedule", signature = (cells, layout=None))]
fn py_parse_schedule(cells: Vec<Vec<Cell>>, layout: Option<ScheduleLayout>) -> PyResult<GroupSchedules> {
    let sheet = Worksheet::new(cells);
    let layout = layout.unwrap_or_default();

    parse_schedule(&sheet, &layout)
        .collect::<Result<GroupSchedules, FormatError>>()
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// Decode every substitution of a substitutions sheet.
///
/// # Arguments
/// * `rows` - Cell values of each row; `None` for empty cells
/// * `layout` - Header size and row width (template defaults when omitted)
///
/// # Raises
/// * ValueError if a row is partially blank or holds a non-integer number
#[pyfunction]
#[pyo3(name = "parse_substitutions", signature = (rows, layout=None))]
fn py_parse_substitutions(
    rows: Vec<Vec<Option<String>>>,
    layout: Option<SubstitutionsLayout>,
) -> PyResult<Substitutions> {
    let layout = layout.unwrap_or_default();

    parse_substitutions(&rows, &layout)
        .collect::<Result<Substitutions, FormatError>>()
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// 1-based academic week of `date`, counted from the week of September 1.
#[pyfunction]
#[pyo3(name = "get_week_number")]
fn py_get_week_number(date: NaiveDate) -> u32 {
    academic_week(date)
}

/// Periods `group` has on `date` once substitutions are applied.
///
/// # Raises
/// * ValueError if the group, the week parity or the weekday has no schedule
#[pyfunction]
#[pyo3(name = "get_schedule_with_substitutions", signature = (schedules, substitutions, group, date, verbosity=0))]
fn py_get_schedule_with_substitutions(
    schedules: &GroupSchedules,
    substitutions: &Substitutions,
    group: &str,
    date: NaiveDate,
    verbosity: u8,
) -> PyResult<Vec<Period>> {
    schedule_with_substitutions(schedules, substitutions, group, date, verbosity)
        .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
}

/// The schedule_parser.rust Python module.
#[pymodule]
fn rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Sheet input
    m.add_class::<Cell>()?;

    // Data model
    m.add_class::<Weekday>()?;
    m.add_class::<Period>()?;
    m.add_class::<Day>()?;
    m.add_class::<WeekVariant>()?;
    m.add_class::<GroupSchedule>()?;
    m.add_class::<GroupSchedules>()?;
    m.add_class::<Substitution>()?;
    m.add_class::<Substitutions>()?;
    m.add_class::<BellsVariant>()?;
    m.add_class::<BellsSchedule>()?;

    // Config types
    m.add_class::<ScheduleLayout>()?;
    m.add_class::<SubstitutionsLayout>()?;

    // Algorithms
    m.add_function(wrap_pyfunction!(py_parse_schedule, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_substitutions, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_week_number, m)?)?;
    m.add_function(wrap_pyfunction!(py_get_schedule_with_substitutions, m)?)?;

    Ok(())
}
