use std::{fmt, str::FromStr};

use time::{Date, Duration, Month};

use crate::date::month_name;

/// The month shown by the calendar, always pinned to its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthCursor(Date);

impl MonthCursor {
    pub fn new(year: i32, month: Month) -> recipebox_shared::Result<Self> {
        match Date::from_calendar_date(year, month, 1) {
            Ok(date) => Ok(Self(date)),
            Err(err) => recipebox_shared::bail!("invalid month {year}-{month}: {err}"),
        }
    }

    /// Builds a cursor from a zero-based month index, January = 0.
    pub fn from_index(year: i32, month_index: u8) -> recipebox_shared::Result<Self> {
        match Month::try_from(month_index.saturating_add(1)) {
            Ok(month) => Self::new(year, month),
            Err(_) => recipebox_shared::bail!("invalid month index {month_index}"),
        }
    }

    /// Month containing today in the IANA zone `tz`.
    pub fn current(tz: &str) -> Self {
        Self::containing(crate::date::today(tz))
    }

    pub fn containing(date: Date) -> Self {
        Self(date - Duration::days(i64::from(date.day()) - 1))
    }

    pub fn first_day(&self) -> Date {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> Month {
        self.0.month()
    }

    /// Zero-based month index, January = 0.
    pub fn month_index(&self) -> u8 {
        u8::from(self.0.month()) - 1
    }

    pub fn days_in_month(&self) -> u8 {
        self.0.month().length(self.0.year())
    }

    pub fn next(self) -> Self {
        self.0
            .checked_add(Duration::days(i64::from(self.days_in_month())))
            .map(Self)
            .unwrap_or(self)
    }

    pub fn previous(self) -> Self {
        self.0.previous_day().map(Self::containing).unwrap_or(self)
    }

    /// Moves `months` months forward, or backward when negative. Stops at
    /// the first or last representable month.
    pub fn shift(self, months: i32) -> Self {
        let total = i64::from(self.year()) * 12 + i64::from(self.month_index()) + i64::from(months);
        let year = i32::try_from(total.div_euclid(12)).ok();
        let index = total.rem_euclid(12) as u8;

        match year.and_then(|year| Self::from_index(year, index).ok()) {
            Some(cursor) => cursor,
            None if months > 0 => Self::containing(Date::MAX),
            None => Self::containing(Date::MIN),
        }
    }

    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for MonthCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", month_name(self.month()), self.year())
    }
}

impl FromStr for MonthCursor {
    type Err = recipebox_shared::Error;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((year, month)) = s.trim().split_once('-') else {
            recipebox_shared::bail!("expected YYYY-MM, got '{s}'");
        };

        let (Ok(year), Ok(month)) = (year.parse::<i32>(), month.parse::<u8>()) else {
            recipebox_shared::bail!("expected YYYY-MM, got '{s}'");
        };

        let Ok(month) = Month::try_from(month) else {
            recipebox_shared::bail!("month out of range in '{s}'");
        };

        Self::new(year, month)
    }
}
