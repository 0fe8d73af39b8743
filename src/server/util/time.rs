//! Civil-time helpers.
//!
//! Salon hours, leave windows and booking labels are times of day in the
//! salon's IANA zone. These helpers re-base them onto a calendar date and
//! resolve the result to a UTC instant. A time of day of `00:00` used as a
//! closing time or booking start denotes midnight at the end of the date,
//! that is the start of the following day.

use chrono::{
    DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike,
    Utc,
};
use chrono_tz::Tz;

/// Upper bound when walking out of a DST gap. Real gaps are at most a day.
const MAX_GAP_MINUTES: i64 = 24 * 60;

/// Resolves `time` on `date` in `tz` to a UTC instant, dropping seconds.
///
/// Times falling in a DST gap resolve to the first valid instant after the
/// gap; ambiguous times resolve to the earliest instant.
pub fn rebase(date: NaiveDate, time: NaiveTime, tz: Tz) -> DateTime<Utc> {
    let time = NaiveTime::from_hms_opt(time.hour(), time.minute(), 0).unwrap_or(time);

    resolve_local(date.and_time(time), tz)
}

/// Closing instant of a salon on `date`, rolling `00:00` to the next day.
pub fn close_instant(date: NaiveDate, close: NaiveTime, tz: Tz) -> DateTime<Utc> {
    rebase(rollover_date(date, close), close, tz)
}

/// Start instant of a booking on `date`, rolling `00:00` to the next day.
pub fn booking_start(date: NaiveDate, clock: NaiveTime, tz: Tz) -> DateTime<Utc> {
    rebase(rollover_date(date, clock), clock, tz)
}

/// Calendar date of `now` as seen in `tz`.
pub fn today_in(tz: Tz, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&tz).date_naive()
}

/// Local time of day of `instant` in `tz`.
pub fn local_clock(instant: DateTime<Utc>, tz: Tz) -> NaiveTime {
    instant.with_timezone(&tz).time()
}

/// Formats an instant as a lowercase 12-hour label like `"02:30 pm"`.
pub fn format_clock_label(instant: DateTime<Utc>, tz: Tz) -> String {
    instant
        .with_timezone(&tz)
        .format("%I:%M %p")
        .to_string()
        .to_lowercase()
}

/// Formats a time of day as a lowercase 12-hour label like `"11:30 am"`.
pub fn format_time_of_day(time: NaiveTime) -> String {
    time.format("%I:%M %p").to_string().to_lowercase()
}

/// English weekday name of `date`, e.g. `"Monday"`.
pub fn weekday_name(date: NaiveDate) -> String {
    date.format("%A").to_string()
}

fn rollover_date(date: NaiveDate, time: NaiveTime) -> NaiveDate {
    if time == NaiveTime::MIN {
        date.succ_opt().unwrap_or(date)
    } else {
        date
    }
}

fn resolve_local(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    let mut candidate = local;
    for _ in 0..=MAX_GAP_MINUTES {
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(dt) => return dt.with_timezone(&Utc),
            LocalResult::Ambiguous(earliest, _) => return earliest.with_timezone(&Utc),
            LocalResult::None => candidate += Duration::minutes(1),
        }
    }

    Utc.from_utc_datetime(&local)
}
