//! Wall-clock rendering of stored timestamps.

use std::fmt;

use jiff::{Timestamp, tz::TimeZone};

/// Renders a `Timestamp` in the system timezone.
///
/// Journal entries and practice times are stored as UTC instants and keyed
/// by UTC day; this wrapper exists for the presentation boundary only,
/// where the owner's wall clock is the natural frame of reference. The
/// output is `YYYY-MM-DD HH:MM:SS` followed by the timezone abbreviation.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for LocalDateTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}
