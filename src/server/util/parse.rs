use chrono::{DateTime, NaiveDate, NaiveTime};
use chrono_tz::Tz;

use crate::server::error::AppError;

/// Parses a 12-hour clock label such as `"10:30 AM"` into a time of day
///
/// Accepts `h:mm AM|PM` or `hh:mm AM|PM` with exactly one space before the
/// meridiem, matched case-insensitively. Hours run from 1 to 12.
///
/// # Arguments
/// - `label` - The clock label supplied by the client
///
/// # Returns
/// - `Ok(NaiveTime)` - Time of day with seconds set to zero
/// - `Err(AppError::BadRequest)` - Label does not match the expected format
pub fn parse_clock_label(label: &str) -> Result<NaiveTime, AppError> {
    let invalid = || {
        AppError::BadRequest(format!(
            "Invalid time '{}'. Expected format hh:mm AM/PM",
            label
        ))
    };

    let (clock, meridiem) = label.split_once(' ').ok_or_else(invalid)?;
    let (hour, minute) = clock.split_once(':').ok_or_else(invalid)?;

    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if hour.is_empty() || hour.len() > 2 || !all_digits(hour) {
        return Err(invalid());
    }
    if minute.len() != 2 || !all_digits(minute) {
        return Err(invalid());
    }

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    if !(1..=12).contains(&hour) {
        return Err(invalid());
    }

    let offset = if meridiem.eq_ignore_ascii_case("am") {
        0
    } else if meridiem.eq_ignore_ascii_case("pm") {
        12
    } else {
        return Err(invalid());
    };

    NaiveTime::from_hms_opt(hour % 12 + offset, minute, 0).ok_or_else(invalid)
}

/// Parses an optional clock label, passing `None` through
pub fn parse_optional_clock_label(label: Option<&str>) -> Result<Option<NaiveTime>, AppError> {
    label.map(parse_clock_label).transpose()
}

/// Parses a calendar date from `YYYY-MM-DD` or from the date part of an RFC 3339 timestamp
///
/// # Returns
/// - `Ok(NaiveDate)` - The parsed calendar date
/// - `Err(AppError::BadRequest)` - Value is neither a date nor a timestamp
pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .map_err(|_| {
            AppError::BadRequest(format!("Invalid date '{}'. Expected YYYY-MM-DD", value))
        })
}

/// Parses an IANA timezone name such as `"Asia/Kolkata"`
///
/// # Returns
/// - `Ok(Tz)` - The resolved zone
/// - `Err(AppError::BadRequest)` - Unknown zone name
pub fn parse_timezone(name: &str) -> Result<Tz, AppError> {
    name.parse::<Tz>()
        .map_err(|_| AppError::BadRequest(format!("Unknown timezone '{}'", name)))
}
