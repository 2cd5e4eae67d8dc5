use time::{
    Date, Month, OffsetDateTime, Weekday,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};
use time_tz::{ToTimezone, timezones};

const KEY_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub const MONTH_NAMES: [&str; 12] = [
    "januari",
    "februari",
    "maart",
    "april",
    "mei",
    "juni",
    "juli",
    "augustus",
    "september",
    "oktober",
    "november",
    "december",
];

/// Today's wall-clock date in the given IANA timezone, UTC when the name is
/// not recognized.
pub fn today(tz: &str) -> Date {
    let now = OffsetDateTime::now_utc();

    match timezones::get_by_name(tz) {
        Some(tz) => now.to_timezone(tz).date(),
        None => {
            tracing::warn!(tz, "unknown timezone, using UTC");
            now.date()
        }
    }
}

/// Schedule key for a date, `YYYY-MM-DD`.
pub fn date_key(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Parses a schedule key. Besides `YYYY-MM-DD`, a full RFC 3339 timestamp
/// is accepted and reduced to its date.
pub fn parse_date_key(key: &str) -> Option<Date> {
    let key = key.trim();

    Date::parse(key, KEY_FORMAT).ok().or_else(|| {
        OffsetDateTime::parse(key, &Rfc3339)
            .ok()
            .map(|datetime| datetime.date())
    })
}

pub fn month_name(month: Month) -> &'static str {
    MONTH_NAMES[u8::from(month) as usize - 1]
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Monday => "maandag",
        Weekday::Tuesday => "dinsdag",
        Weekday::Wednesday => "woensdag",
        Weekday::Thursday => "donderdag",
        Weekday::Friday => "vrijdag",
        Weekday::Saturday => "zaterdag",
        Weekday::Sunday => "zondag",
    }
}

/// "vrijdag 15 maart 2024"
pub fn long_date(date: Date) -> String {
    format!(
        "{} {} {} {}",
        weekday_name(date.weekday()),
        date.day(),
        month_name(date.month()),
        date.year()
    )
}
