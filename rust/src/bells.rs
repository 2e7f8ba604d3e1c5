//! Bell timetables used to print periods with their times.

use chrono::NaiveDate;
use pyo3::prelude::*;

use crate::error::{BellsError, NotFound};
use crate::models::Period;
use crate::weekday::Weekday;

/// Bell times of one kind of day; `bells[n]` is the label of period `n`.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BellsVariant {
    #[pyo3(get)]
    pub bells: Vec<String>,
}

impl BellsVariant {
    pub fn new(bells: Vec<String>) -> Self {
        Self { bells }
    }

    pub fn bell(&self, number: u32) -> Result<&str, NotFound> {
        self.bells
            .get(number as usize)
            .map(String::as_str)
            .ok_or(NotFound::Bell(number))
    }

    /// `"{bell} | {readable period}"`.
    pub fn format_period(&self, period: &Period) -> Result<String, BellsError> {
        let readable = period.readable()?;
        Ok(format!("{} | {}", self.bell(period.number)?, readable))
    }
}

#[pymethods]
impl BellsVariant {
    #[new]
    fn py_new(bells: Vec<String>) -> Self {
        Self::new(bells)
    }

    #[pyo3(name = "format_period")]
    fn py_format_period(&self, period: &Period) -> PyResult<String> {
        self.format_period(period)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("BellsVariant(bells={})", self.bells.len())
    }
}

/// Which bells variant a weekday follows.
///
/// Monday and Wednesday have their own bells, the other working days share
/// a third one; there are no classes on Sunday.
fn variant_index(weekday: Weekday) -> Option<usize> {
    match weekday {
        Weekday::Monday => Some(0),
        Weekday::Wednesday => Some(1),
        Weekday::Tuesday | Weekday::Thursday | Weekday::Friday | Weekday::Saturday => Some(2),
        Weekday::Sunday => None,
    }
}

/// All bells variants of an institution.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BellsSchedule {
    #[pyo3(get)]
    pub variants: Vec<BellsVariant>,
}

impl BellsSchedule {
    pub fn new(variants: Vec<BellsVariant>) -> Self {
        Self { variants }
    }

    pub fn variant(&self, weekday: Weekday) -> Result<&BellsVariant, NotFound> {
        variant_index(weekday)
            .and_then(|index| self.variants.get(index))
            .ok_or(NotFound::BellsVariant(weekday))
    }

    /// Format reconciled periods of `date` one per line.
    pub fn format_day(&self, date: NaiveDate, periods: &[Period]) -> Result<Vec<String>, BellsError> {
        let variant = self.variant(Weekday::from_date(date))?;
        periods.iter().map(|p| variant.format_period(p)).collect()
    }
}

#[pymethods]
impl BellsSchedule {
    #[new]
    fn py_new(variants: Vec<BellsVariant>) -> Self {
        Self::new(variants)
    }

    #[pyo3(name = "get_variant_by_weekday")]
    fn py_variant(&self, weekday: Weekday) -> PyResult<BellsVariant> {
        self.variant(weekday)
            .cloned()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    #[pyo3(name = "format_day")]
    fn py_format_day(&self, date: NaiveDate, periods: Vec<Period>) -> PyResult<Vec<String>> {
        self.format_day(date, &periods)
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("BellsSchedule(variants={})", self.variants.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EmptyPeriodError;

    fn variant(first: &str) -> BellsVariant {
        BellsVariant::new(vec![
            String::new(),
            format!("{}-09:30", first),
            "09:40-11:10".to_string(),
        ])
    }

    fn schedule() -> BellsSchedule {
        BellsSchedule::new(vec![variant("08:30"), variant("08:45"), variant("08:00")])
    }

    fn math(number: u32) -> Period {
        Period::new(number, 0, Some("Math"), Some("Smith"), Some("12"))
    }

    #[test]
    fn test_variant_by_weekday() {
        let schedule = schedule();
        assert_eq!(schedule.variant(Weekday::Monday), Ok(&schedule.variants[0]));
        assert_eq!(schedule.variant(Weekday::Wednesday), Ok(&schedule.variants[1]));
        for weekday in [Weekday::Tuesday, Weekday::Thursday, Weekday::Friday, Weekday::Saturday] {
            assert_eq!(schedule.variant(weekday), Ok(&schedule.variants[2]));
        }
        assert_eq!(
            schedule.variant(Weekday::Sunday),
            Err(NotFound::BellsVariant(Weekday::Sunday))
        );
        assert_eq!(
            BellsSchedule::default().variant(Weekday::Monday),
            Err(NotFound::BellsVariant(Weekday::Monday))
        );
    }

    #[test]
    fn test_format_period() {
        let variant = variant("08:30");
        assert_eq!(variant.format_period(&math(1)).unwrap(), "08:30-09:30 | 1. Math | 12к.");
        assert_eq!(
            variant.format_period(&math(5)),
            Err(BellsError::NotFound(NotFound::Bell(5)))
        );
        assert_eq!(
            variant.format_period(&Period::empty(1, 0)),
            Err(BellsError::EmptyPeriod(EmptyPeriodError))
        );
    }

    #[test]
    fn test_format_day() {
        // 2025-09-03 is a Wednesday
        let date = NaiveDate::from_ymd_opt(2025, 9, 3).unwrap();
        let lines = schedule().format_day(date, &[math(1), math(2)]).unwrap();
        assert_eq!(
            lines,
            vec!["08:45-09:30 | 1. Math | 12к.", "09:40-11:10 | 2. Math | 12к."]
        );
    }
}
