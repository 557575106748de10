//! Localized rendering of member timestamps.

#[cfg(test)]
#[path = "datetime_test.rs"]
mod datetime_test;

use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Timelike};

/// Genitive month names as used in ru-RU long dates.
const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Render a registration timestamp as a ru-RU long date with time,
/// e.g. `1 мая 2024 г. в 12:34`, in the viewer's time zone `tz`.
#[must_use]
pub fn registered_at<Tz: TimeZone>(at: &DateTime<FixedOffset>, tz: &Tz) -> String {
    let local = at.with_timezone(tz);
    let month = MONTHS_GENITIVE[local.month0() as usize];
    format!(
        "{} {month} {} г. в {:02}:{:02}",
        local.day(),
        local.year(),
        local.hour(),
        local.minute()
    )
}
