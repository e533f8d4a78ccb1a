//! Court and time assignment
//!
//! Takes the flat match list the pairing step produced and walks it in
//! generation order, handing out courts in rotation and start times in
//! blocks of one slot per court sweep. This is sequential bin-packing
//! on purpose: no conflict detection and no load balancing beyond the
//! court cycle.

use chrono::{Duration, NaiveDate, NaiveTime};
use garde::Validate;
use serde::{Deserialize, Serialize};

use crate::{constants, template::MatchTemplate};

type ValidationResult = garde::Result;

/// Validates that a minute count falls within specified bounds
///
/// # Arguments
///
/// * `field` - Name of the field being validated (for error messages)
/// * `val` - The minute count to validate
///
/// # Returns
///
/// `Ok(())` if the count is in bounds, `Err` with a descriptive
/// message if not
fn validate_minutes<const MIN: u32, const MAX: u32>(
    field: &'static str,
    val: &u32,
) -> ValidationResult {
    if (MIN..=MAX).contains(val) {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "{field} is outside of the bounds [{MIN},{MAX}]",
        )))
    }
}

/// Validates the length of a single match
fn validate_match_duration(val: &u32) -> ValidationResult {
    validate_minutes::<
        { crate::constants::matches::MIN_DURATION_MINUTES },
        { crate::constants::matches::MAX_DURATION_MINUTES },
    >("duration_minutes", val)
}

/// Validates the gap between consecutive matches
fn validate_break(val: &u32) -> ValidationResult {
    validate_minutes::<
        { crate::constants::schedule::MIN_BREAK_MINUTES },
        { crate::constants::schedule::MAX_BREAK_MINUTES },
    >("break_minutes", val)
}

/// Scheduling settings for one generation run
///
/// Validation is the caller's gate: run [`Validate::validate`] on
/// values arriving from outside before generating. The engine itself
/// treats out-of-range values as degenerate rather than panicking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ScheduleOptions {
    /// First slot of the day
    #[garde(skip)]
    pub start_time: NaiveTime,
    /// End of the playable window, exclusive
    #[garde(skip)]
    pub end_time: NaiveTime,
    /// Length of each match in minutes
    #[garde(custom(|v, _| validate_match_duration(v)))]
    pub duration_minutes: u32,
    /// Gap between consecutive slots in minutes
    #[garde(custom(|v, _| validate_break(v)))]
    pub break_minutes: u32,
    /// Selectable court ids, in rotation order
    #[garde(skip)]
    pub courts: Vec<String>,
    /// Calendar day every scheduled match lands on
    #[garde(skip)]
    pub date: NaiveDate,
}

impl ScheduleOptions {
    /// Standard club-day settings for `date`
    ///
    /// A 09:00 to 17:00 window, 90 minute matches with a 15 minute
    /// break, and no courts selected yet.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            start_time: parse_window_time(constants::schedule::DEFAULT_START_TIME),
            end_time: parse_window_time(constants::schedule::DEFAULT_END_TIME),
            duration_minutes: constants::matches::DEFAULT_DURATION_MINUTES,
            break_minutes: constants::schedule::DEFAULT_BREAK_MINUTES,
            courts: Vec::new(),
            date,
        }
    }

    /// Enumerates the start times available inside the window
    ///
    /// Slots step by `duration_minutes + break_minutes` from
    /// `start_time` and stop strictly before `end_time`. A window that
    /// never opens, a zero step, and a step that would cross midnight
    /// all end the sequence rather than wrapping around.
    pub fn time_slots(&self) -> Vec<NaiveTime> {
        let step_minutes = i64::from(self.duration_minutes) + i64::from(self.break_minutes);
        if step_minutes == 0 {
            return Vec::new();
        }
        let step = Duration::minutes(step_minutes);

        let mut slots = Vec::new();
        let mut current = self.start_time;
        while current < self.end_time {
            slots.push(current);
            let (next, wrapped_seconds) = current.overflowing_add_signed(step);
            if wrapped_seconds != 0 {
                break;
            }
            current = next;
        }
        slots
    }
}

/// Parses an `"HH:MM"` wall-clock token, falling back to midnight
pub fn parse_window_time(token: &str) -> NaiveTime {
    NaiveTime::parse_from_str(token, "%H:%M").unwrap_or(NaiveTime::MIN)
}

/// Assigns a court, date and start time to every match in order
///
/// Match `i` plays at `time_slots[i / courts.len()]`, falling back to
/// `fallback_start` once the slots run out, on court
/// `courts[i % courts.len()]`. With no courts to assign, matches pass
/// through untouched. Ids and every other field are left alone.
///
/// # Arguments
///
/// * `matches` - Matches in generation order
/// * `time_slots` - Available start times, usually from
///   [`ScheduleOptions::time_slots`]
/// * `courts` - Court ids in rotation order
/// * `date` - Calendar day assigned to every match
/// * `fallback_start` - Start time used once `time_slots` is exhausted
pub fn assign_courts_and_times(
    matches: &mut [MatchTemplate],
    time_slots: &[NaiveTime],
    courts: &[String],
    date: NaiveDate,
    fallback_start: NaiveTime,
) {
    if courts.is_empty() {
        return;
    }

    for (index, template) in matches.iter_mut().enumerate() {
        let slot = time_slots
            .get(index / courts.len())
            .copied()
            .unwrap_or(fallback_start);

        template.court_id = Some(courts[index % courts.len()].clone());
        template.date = Some(date);
        template.time = Some(slot.format("%H:%M").to_string());
    }
}
