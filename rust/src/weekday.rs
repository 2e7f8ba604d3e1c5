//! Weekday enumeration and the localized names found in the sheets.

use chrono::{Datelike, NaiveDate};
use pyo3::prelude::*;

use crate::error::FormatError;

/// Day of the week, numbered the ISO way (Monday = 1).
#[pyclass(eq, eq_int)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Weekday {
    /// Parse a weekday name as written in the timetable header column.
    pub fn from_name(name: &str) -> Result<Self, FormatError> {
        match name.trim().to_lowercase().as_str() {
            "понедельник" => Ok(Self::Monday),
            "вторник" => Ok(Self::Tuesday),
            "среда" => Ok(Self::Wednesday),
            "четверг" => Ok(Self::Thursday),
            "пятница" => Ok(Self::Friday),
            "суббота" => Ok(Self::Saturday),
            "воскресенье" => Ok(Self::Sunday),
            _ => Err(FormatError::UnknownWeekday(name.to_string())),
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        match date.weekday() {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }

    /// 1-based ISO number.
    #[inline]
    pub fn number(self) -> u8 {
        self as u8
    }
}

#[pymethods]
impl Weekday {
    #[staticmethod]
    #[pyo3(name = "from_string")]
    fn py_from_string(string: &str) -> PyResult<Self> {
        Self::from_name(string).map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    #[getter]
    fn value(&self) -> u8 {
        self.number()
    }
}
