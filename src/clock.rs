//! Injectable time source.
//!
//! Trend and month-boundary calculations compare "this month" against "last
//! month", so they need a notion of today. The engine itself only ever takes
//! an explicit reference date; a [Clock] is consulted once, at the
//! [ReportService](crate::ReportService) boundary, which keeps every
//! computation deterministic and testable.

use time::{Date, OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone, Tz, timezones};

use crate::Error;

/// Supplies the current date for trend and month-boundary calculations.
pub trait Clock {
    /// The current calendar date.
    fn today(&self) -> Date;
}

/// A [Clock] that reads the system time in a configured timezone.
#[derive(Clone)]
pub struct SystemClock {
    timezone: &'static Tz,
}

impl std::fmt::Debug for SystemClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClock")
            .field("timezone", &self.timezone.name())
            .finish()
    }
}

impl SystemClock {
    /// Create a clock for a canonical timezone name, e.g.
    /// "Pacific/Auckland".
    ///
    /// # Errors
    /// This function will return [Error::InvalidTimezone] if the name does
    /// not refer to a known timezone.
    pub fn new(canonical_timezone: &str) -> Result<Self, Error> {
        let timezone = timezones::get_by_name(canonical_timezone)
            .ok_or_else(|| Error::InvalidTimezone(canonical_timezone.to_owned()))?;

        Ok(Self { timezone })
    }

    /// Create a clock that reports the current date in UTC.
    pub fn utc() -> Self {
        Self::new("UTC").expect("UTC is in the bundled timezone database")
    }

    fn local_offset(&self) -> UtcOffset {
        self.timezone
            .get_offset_utc(&OffsetDateTime::now_utc())
            .to_utc()
    }
}

impl Clock for SystemClock {
    fn today(&self) -> Date {
        OffsetDateTime::now_utc()
            .to_offset(self.local_offset())
            .date()
    }
}

/// A [Clock] pinned to a fixed date, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(
    /// The date to report as today.
    pub Date,
);

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

#[cfg(test)]
mod clock_tests {
    use time::macros::date;

    use super::{Clock, FixedClock, SystemClock};
    use crate::Error;

    #[test]
    fn system_clock_accepts_canonical_timezone() {
        assert!(SystemClock::new("Pacific/Auckland").is_ok());
    }

    #[test]
    fn system_clock_rejects_unknown_timezone() {
        let result = SystemClock::new("Middle/Nowhere");

        assert_eq!(
            result.unwrap_err(),
            Error::InvalidTimezone("Middle/Nowhere".to_owned())
        );
    }

    #[test]
    fn utc_clock_reports_the_utc_zone() {
        let clock = SystemClock::utc();

        assert_eq!(format!("{clock:?}"), r#"SystemClock { timezone: "UTC" }"#);
    }

    #[test]
    fn fixed_clock_returns_pinned_date() {
        let clock = FixedClock(date!(2024 - 02 - 29));

        assert_eq!(clock.today(), date!(2024 - 02 - 29));
    }
}
