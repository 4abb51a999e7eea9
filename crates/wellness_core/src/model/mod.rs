//! Domain model for the wellness companion stores.
//!
//! # Responsibility
//! - Define canonical records for profiles, activities, focus blocks and
//!   meetings.
//! - Keep closed enums for every choice the UI offers (diet, goals, status).
//!
//! # Invariants
//! - Every record is scoped to exactly one `UserId`.
//! - Time values are integer nanoseconds (`Timestamp`, `TimeOfDay`).
//! - Optional fields are `Option<_>`, never sentinel values.

pub mod activity;
pub mod focus_block;
pub mod identity;
pub mod meeting;
pub mod profile;
pub mod validation;

/// Unix epoch nanoseconds.
pub type Timestamp = i64;

/// Nanoseconds since local midnight.
pub type TimeOfDay = i64;

const NANOS_PER_MINUTE: i64 = 60 * 1_000_000_000;

/// Converts an `HH:MM` wall-clock pair into `TimeOfDay` nanoseconds.
///
/// Returns `None` unless `hours < 24` and `minutes < 60`.
pub fn time_of_day(hours: u32, minutes: u32) -> Option<TimeOfDay> {
    if hours >= 24 || minutes >= 60 {
        return None;
    }
    Some((i64::from(hours) * 60 + i64::from(minutes)) * NANOS_PER_MINUTE)
}

#[cfg(test)]
mod tests {
    use super::time_of_day;

    #[test]
    fn time_of_day_counts_nanos_since_midnight() {
        assert_eq!(time_of_day(0, 0), Some(0));
        assert_eq!(time_of_day(0, 1), Some(60_000_000_000));
        assert_eq!(time_of_day(7, 0), Some(7 * 60 * 60_000_000_000));
        assert_eq!(time_of_day(23, 59), Some((23 * 60 + 59) * 60_000_000_000));
    }

    #[test]
    fn time_of_day_rejects_out_of_range_clock_values() {
        assert_eq!(time_of_day(24, 0), None);
        assert_eq!(time_of_day(7, 60), None);
        assert_eq!(time_of_day(u32::MAX, u32::MAX), None);
    }
}
