//! Current-week derivation and day-key helpers.
//!
//! All calendar math happens on UTC civil-date boundaries, not wall-clock
//! time, so that timezone and daylight-saving shifts never move a week or
//! day boundary.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::Timestamp;

/// Derives the training week number from a date of birth and a reference
/// date, both given as ISO `YYYY-MM-DD` strings.
///
/// Returns `None` when either input fails to parse, `Some(0)` when the
/// reference date precedes the date of birth, and otherwise
/// `days_since_birth / 7 + 1`. Day boundaries are strict: day 7 since birth
/// already reports week 2.
pub fn week_number_from_dob(dob: &str, reference: &str) -> Option<u32> {
    let dob: Date = dob.parse().ok()?;
    let reference: Date = reference.parse().ok()?;
    Some(week_number_from_dates(dob, reference))
}

/// Same derivation for already-parsed civil dates.
pub fn week_number_from_dates(dob: Date, reference: Date) -> u32 {
    if reference < dob {
        return 0;
    }
    // Civil-date difference counts whole days; leap days are just days.
    let days = dob.until(reference).map_or(0, |span| span.get_days());
    days as u32 / 7 + 1
}

/// The canonical `YYYY-MM-DD` day key for an instant, UTC-normalized.
pub fn day_key(now: Timestamp) -> String {
    now.to_zoned(TimeZone::UTC).date().to_string()
}

/// The day key of the calendar day before `day_key`, if the key parses.
pub fn previous_day_key(day_key: &str) -> Option<String> {
    let date: Date = day_key.parse().ok()?;
    date.yesterday().ok().map(|d| d.to_string())
}
