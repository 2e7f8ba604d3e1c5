//! Decoders turning spreadsheet grids into schedules and substitutions.
//!
//! Both decoders are single-pass iterators: nothing is decoded until the
//! caller pulls the next item, and every item is either a decoded value or the
//! `FormatError` that stopped it.

mod schedule;
mod substitutions;

pub use schedule::{parse_schedule, ScheduleParser};
pub use substitutions::{parse_substitutions, SubstitutionsParser};
