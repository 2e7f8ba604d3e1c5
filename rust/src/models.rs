//! Core data types for parsed timetables and substitutions.
//!
//! The hierarchy is `GroupSchedules -> GroupSchedule -> WeekVariant -> Day -> Period`.
//! Everything here is produced once by a decode pass and never mutated afterwards.

use pyo3::prelude::*;
use rustc_hash::FxHashMap;

use crate::error::{EmptyPeriodError, NotFound};
use crate::weekday::Weekday;
use crate::worksheet::non_blank;

/// Subgroup value of a period shared by the whole group.
pub const NO_SUBGROUP: u32 = 0;

/// Suffix appended to purely numeric room names.
pub const ROOM_SUFFIX: &str = "к.";

/// One class slot: a period number, optionally restricted to a subgroup.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Period {
    #[pyo3(get)]
    pub number: u32,
    #[pyo3(get)]
    pub subgroup: u32,
    #[pyo3(get)]
    pub subject: Option<String>,
    #[pyo3(get)]
    pub lecturer: Option<String>,
    #[pyo3(get)]
    pub room: Option<String>,
}

impl Period {
    /// Create a period; blank strings are stored as absent.
    pub fn new(
        number: u32,
        subgroup: u32,
        subject: Option<&str>,
        lecturer: Option<&str>,
        room: Option<&str>,
    ) -> Self {
        Self {
            number,
            subgroup,
            subject: non_blank(subject).map(str::to_string),
            lecturer: non_blank(lecturer).map(str::to_string),
            room: non_blank(room).map(str::to_string),
        }
    }

    /// A free slot.
    pub fn empty(number: u32, subgroup: u32) -> Self {
        Self::new(number, subgroup, None, None, None)
    }

    /// A period is a free slot unless subject, lecturer and room are all filled in.
    pub fn is_empty(&self) -> bool {
        !(self.subject.is_some() && self.lecturer.is_some() && self.room.is_some())
    }

    /// Same `(number, subgroup)` slot, regardless of content.
    #[inline]
    pub fn is_same(&self, other: &Period) -> bool {
        self.number == other.number && self.subgroup == other.subgroup
    }

    #[inline]
    pub fn slot(&self) -> (u32, u32) {
        (self.number, self.subgroup)
    }

    pub fn formatted_room(&self) -> Option<String> {
        let room = self.room.as_deref()?;
        if room.chars().all(|c| c.is_ascii_digit()) {
            Some(format!("{}{}", room, ROOM_SUFFIX))
        } else {
            Some(room.to_string())
        }
    }

    /// Human-readable line, e.g. `"2. (1) Math | 12к."`.
    pub fn readable(&self) -> Result<String, EmptyPeriodError> {
        if self.is_empty() {
            return Err(EmptyPeriodError);
        }
        let (Some(subject), Some(room)) = (self.subject.as_deref(), self.formatted_room()) else {
            return Err(EmptyPeriodError);
        };

        let mut head = format!("{}.", self.number);
        if self.subgroup != NO_SUBGROUP {
            head.push_str(&format!(" ({})", self.subgroup));
        }
        head.push(' ');
        head.push_str(subject);

        Ok(format!("{} | {}", head, room))
    }
}

#[pymethods]
impl Period {
    #[new]
    #[pyo3(signature = (number, subgroup=0, subject=None, lecturer=None, room=None))]
    fn py_new(
        number: u32,
        subgroup: u32,
        subject: Option<String>,
        lecturer: Option<String>,
        room: Option<String>,
    ) -> Self {
        Self::new(
            number,
            subgroup,
            subject.as_deref(),
            lecturer.as_deref(),
            room.as_deref(),
        )
    }

    #[getter(is_empty)]
    fn py_is_empty(&self) -> bool {
        self.is_empty()
    }

    #[getter(formatted_room)]
    fn py_formatted_room(&self) -> Option<String> {
        self.formatted_room()
    }

    #[getter(readable)]
    fn py_readable(&self) -> PyResult<String> {
        self.readable()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    #[pyo3(name = "is_same")]
    fn py_is_same(&self, period: &Period) -> bool {
        self.is_same(period)
    }

    fn __eq__(&self, other: &Period) -> bool {
        self == other
    }

    fn __repr__(&self) -> String {
        format!(
            "Period(number={}, subgroup={}, subject={:?}, lecturer={:?}, room={:?})",
            self.number, self.subgroup, self.subject, self.lecturer, self.room
        )
    }
}

/// Ordered periods of one weekday.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Day {
    #[pyo3(get)]
    pub weekday: Weekday,
    #[pyo3(get)]
    pub periods: Vec<Period>,
}

impl Day {
    pub fn new(weekday: Weekday, periods: Vec<Period>) -> Self {
        Self { weekday, periods }
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

#[pymethods]
impl Day {
    #[new]
    fn py_new(weekday: Weekday, periods: Vec<Period>) -> Self {
        Self::new(weekday, periods)
    }

    #[getter(is_empty)]
    fn py_is_empty(&self) -> bool {
        self.is_empty()
    }

    fn __repr__(&self) -> String {
        format!("Day(weekday={:?}, periods={})", self.weekday, self.periods.len())
    }
}

/// One of the two alternating weekly patterns.
///
/// `parity` is true for even academic weeks.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WeekVariant {
    #[pyo3(get)]
    pub parity: bool,
    #[pyo3(get)]
    pub days: Vec<Day>,
}

impl WeekVariant {
    pub fn new(parity: bool, days: Vec<Day>) -> Self {
        Self { parity, days }
    }

    pub fn day(&self, weekday: Weekday) -> Result<&Day, NotFound> {
        self.days
            .iter()
            .find(|day| day.weekday == weekday)
            .ok_or(NotFound::Weekday(weekday))
    }
}

#[pymethods]
impl WeekVariant {
    #[new]
    fn py_new(parity: bool, days: Vec<Day>) -> Self {
        Self::new(parity, days)
    }

    #[pyo3(name = "get_day_schedule_by_weekday")]
    fn py_day(&self, weekday: Weekday) -> PyResult<Day> {
        self.day(weekday)
            .cloned()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("WeekVariant(parity={}, days={})", self.parity, self.days.len())
    }
}

/// Both week variants of a single group.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupSchedule {
    #[pyo3(get)]
    pub group: String,
    #[pyo3(get)]
    pub weeks: Vec<WeekVariant>,
}

impl GroupSchedule {
    pub fn new(group: String, weeks: Vec<WeekVariant>) -> Self {
        Self { group, weeks }
    }

    pub fn week(&self, parity: bool) -> Result<&WeekVariant, NotFound> {
        self.weeks
            .iter()
            .find(|week| week.parity == parity)
            .ok_or(NotFound::Parity(parity))
    }
}

#[pymethods]
impl GroupSchedule {
    #[new]
    fn py_new(group: String, weeks: Vec<WeekVariant>) -> Self {
        Self::new(group, weeks)
    }

    #[pyo3(name = "get_week_schedule_by_parity")]
    fn py_week(&self, parity: bool) -> PyResult<WeekVariant> {
        self.week(parity)
            .cloned()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __repr__(&self) -> String {
        format!("GroupSchedule(group={:?}, weeks={})", self.group, self.weeks.len())
    }
}

/// Every group of a timetable sheet, in sheet order.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupSchedules {
    schedules: Vec<GroupSchedule>,
    /// group name -> position of its first schedule; built once in `new`
    index: FxHashMap<String, usize>,
}

impl GroupSchedules {
    pub fn new(schedules: Vec<GroupSchedule>) -> Self {
        let mut index = FxHashMap::with_capacity_and_hasher(schedules.len(), Default::default());
        for (position, schedule) in schedules.iter().enumerate() {
            index.entry(schedule.group.clone()).or_insert(position);
        }
        Self { schedules, index }
    }

    pub fn get(&self, group: &str) -> Result<&GroupSchedule, NotFound> {
        self.index
            .get(group)
            .and_then(|&position| self.schedules.get(position))
            .ok_or_else(|| NotFound::Group(group.to_string()))
    }

    /// Schedules in sheet order.
    pub fn schedules(&self) -> &[GroupSchedule] {
        &self.schedules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GroupSchedule> {
        self.schedules.iter()
    }

    pub fn into_inner(self) -> Vec<GroupSchedule> {
        self.schedules
    }

    pub fn len(&self) -> usize {
        self.schedules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.schedules.is_empty()
    }
}

impl<'a> IntoIterator for &'a GroupSchedules {
    type Item = &'a GroupSchedule;
    type IntoIter = std::slice::Iter<'a, GroupSchedule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<GroupSchedule> for GroupSchedules {
    fn from_iter<I: IntoIterator<Item = GroupSchedule>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[pymethods]
impl GroupSchedules {
    #[new]
    fn py_new(schedules: Vec<GroupSchedule>) -> Self {
        Self::new(schedules)
    }

    #[getter(schedules)]
    fn py_schedules(&self) -> Vec<GroupSchedule> {
        self.schedules.clone()
    }

    #[pyo3(name = "get_group_schedule")]
    fn py_get(&self, group: &str) -> PyResult<GroupSchedule> {
        self.get(group)
            .cloned()
            .map_err(|e| pyo3::exceptions::PyValueError::new_err(e.to_string()))
    }

    fn __len__(&self) -> usize {
        self.len()
    }

    fn __repr__(&self) -> String {
        format!("GroupSchedules(groups={})", self.schedules.len())
    }
}

/// A date-independent override of one slot for one group.
///
/// `period` and `substitution` always share the period number; the
/// replacement carries the effective subgroup.
#[pyclass]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Substitution {
    #[pyo3(get)]
    pub group: String,
    /// Slot being replaced
    #[pyo3(get)]
    pub period: Period,
    /// What takes its place
    #[pyo3(get)]
    pub substitution: Period,
}

impl Substitution {
    pub fn new(group: String, period: Period, substitution: Period) -> Self {
        Self {
            group,
            period,
            substitution,
        }
    }
}

#[pymethods]
impl Substitution {
    #[new]
    fn py_new(group: String, period: Period, substitution: Period) -> Self {
        Self::new(group, period, substitution)
    }

    #[getter]
    pub fn number(&self) -> u32 {
        self.substitution.number
    }

    #[getter]
    pub fn subgroup(&self) -> u32 {
        self.substitution.subgroup
    }

    fn __repr__(&self) -> String {
        format!(
            "Substitution(group={:?}, period={:?}, substitution={:?})",
            self.group, self.period, self.substitution
        )
    }
}

/// All rows of a substitutions sheet, in sheet order.
#[pyclass]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Substitutions {
    #[pyo3(get)]
    pub substitutions: Vec<Substitution>,
}

impl Substitutions {
    pub fn new(substitutions: Vec<Substitution>) -> Self {
        Self { substitutions }
    }

    pub fn for_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Substitution> + 'a {
        self.substitutions.iter().filter(move |s| s.group == group)
    }
}

impl FromIterator<Substitution> for Substitutions {
    fn from_iter<I: IntoIterator<Item = Substitution>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[pymethods]
impl Substitutions {
    #[new]
    fn py_new(substitutions: Vec<Substitution>) -> Self {
        Self::new(substitutions)
    }

    #[pyo3(name = "get_substitutions_by_group")]
    fn py_for_group(&self, group: &str) -> Vec<Substitution> {
        self.for_group(group).cloned().collect()
    }

    fn __len__(&self) -> usize {
        self.substitutions.len()
    }

    fn __repr__(&self) -> String {
        format!("Substitutions(count={})", self.substitutions.len())
    }
}
