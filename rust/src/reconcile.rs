//! Effective schedule of a group on a date: base timetable plus substitutions.

use chrono::NaiveDate;

use crate::error::NotFound;
use crate::models::{GroupSchedules, Period, Substitutions};
use crate::week::{academic_week, is_even_week};
use crate::weekday::Weekday;
use crate::{log_debug, log_detail, log_summary};

/// Periods `group` actually has on `date`, ordered by `(number, subgroup)`.
///
/// A substitution replaces the first period in the same slot as its
/// `period`. Without such a period the replacement is appended, unless it is
/// empty: cancelling a class that was never scheduled changes nothing.
/// Free slots are dropped from the result.
pub fn schedule_with_substitutions(
    schedules: &GroupSchedules,
    substitutions: &Substitutions,
    group: &str,
    date: NaiveDate,
    verbosity: u8,
) -> Result<Vec<Period>, NotFound> {
    let parity = is_even_week(date);
    let weekday = Weekday::from_date(date);
    let day = schedules.get(group)?.week(parity)?.day(weekday)?;

    log_detail!(
        verbosity,
        "{} on {}: academic week {}, parity {}, {:?} with {} periods",
        group,
        date,
        academic_week(date),
        parity,
        weekday,
        day.periods.len()
    );

    let mut periods = day.periods.clone();

    for substitution in substitutions.for_group(group) {
        match periods.iter().position(|p| p.is_same(&substitution.period)) {
            Some(index) => {
                log_summary!(
                    verbosity,
                    "Replacing {:?} with {:?}",
                    periods[index],
                    substitution.substitution
                );
                periods[index] = substitution.substitution.clone();
            }
            None if !substitution.substitution.is_empty() => {
                log_summary!(verbosity, "Adding {:?}", substitution.substitution);
                periods.push(substitution.substitution.clone());
            }
            None => {
                log_debug!(
                    verbosity,
                    "Ignoring empty substitution for free slot {:?}",
                    substitution.period.slot()
                );
            }
        }
    }

    periods.sort_by_key(Period::slot);
    periods.retain(|period| !period.is_empty());

    Ok(periods)
}
