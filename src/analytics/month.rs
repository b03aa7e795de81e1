//! Calendar-month bucket keys.

use std::fmt;

use serde::Serialize;
use time::Date;

/// A calendar month, used as the key for month buckets.
///
/// The derived ordering is chronological, which agrees with lexicographic
/// order of the zero-padded `YYYY-MM` display form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u8,
}

impl MonthKey {
    /// The month `date` falls in.
    pub fn from_date(date: Date) -> Self {
        Self {
            year: date.year(),
            month: u8::from(date.month()),
        }
    }

    /// The immediately preceding calendar month, wrapping January back to
    /// December of the previous year.
    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The year component.
    pub fn year(self) -> i32 {
        self.year
    }

    /// The month component, 1 through 12.
    pub fn month(self) -> u8 {
        self.month
    }

    /// Human-readable form for chart axes and report rows, e.g.
    /// "January 2024".
    pub fn label(self) -> String {
        let name = match self.month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => unreachable!("month keys are only built from valid dates"),
        };

        format!("{} {}", name, self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod month_key_tests {
    use time::macros::date;

    use super::MonthKey;

    #[test]
    fn displays_as_zero_padded_year_month() {
        let key = MonthKey::from_date(date!(2024 - 03 - 17));

        assert_eq!(key.to_string(), "2024-03");
    }

    #[test]
    fn ordering_is_chronological() {
        let december = MonthKey::from_date(date!(2023 - 12 - 31));
        let january = MonthKey::from_date(date!(2024 - 01 - 01));
        let october = MonthKey::from_date(date!(2024 - 10 - 01));

        assert!(december < january);
        assert!(january < october);
    }

    #[test]
    fn ordering_agrees_with_lexicographic_display_order() {
        let keys = [
            MonthKey::from_date(date!(2023 - 11 - 01)),
            MonthKey::from_date(date!(2024 - 02 - 01)),
            MonthKey::from_date(date!(2024 - 10 - 01)),
        ];

        for pair in keys.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].to_string() < pair[1].to_string());
        }
    }

    #[test]
    fn previous_steps_back_one_month() {
        let key = MonthKey::from_date(date!(2024 - 03 - 17));

        assert_eq!(key.previous(), MonthKey::from_date(date!(2024 - 02 - 01)));
    }

    #[test]
    fn previous_wraps_january_to_previous_december() {
        let key = MonthKey::from_date(date!(2024 - 01 - 05));

        assert_eq!(key.previous(), MonthKey::from_date(date!(2023 - 12 - 01)));
    }

    #[test]
    fn label_spells_out_month_and_year() {
        let key = MonthKey::from_date(date!(2024 - 01 - 05));

        assert_eq!(key.label(), "January 2024");
    }

    #[test]
    fn serializes_as_display_string() {
        let key = MonthKey::from_date(date!(2024 - 07 - 04));

        assert_eq!(serde_json::to_value(key).unwrap(), "2024-07");
    }
}
