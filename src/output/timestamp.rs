//! "Last updated" rendering in US Eastern time.
//!
//! Eastern offset follows the US daylight saving rule in force since 2007:
//! EDT (UTC-4) from the second Sunday of March 02:00 EST until the first
//! Sunday of November 02:00 EDT, EST (UTC-5) otherwise.

use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, Offset, Utc};

const EST_OFFSET_SECS: i32 = 5 * 3600;
const EDT_OFFSET_SECS: i32 = 4 * 3600;

/// Format a store timestamp as `MM/DD/YYYY, hh:mm AM` Eastern time
///
/// Only instants from 2007 on are supported. Earlier instants are formatted
/// with the 2007 rule, so dates near the old April/October switchovers come
/// out an hour off.
pub fn format_last_updated(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&eastern_offset(timestamp))
        .format("%m/%d/%Y, %I:%M %p")
        .to_string()
}

/// Eastern UTC offset in effect at `instant`
pub fn eastern_offset(instant: &DateTime<Utc>) -> FixedOffset {
    let year = instant.year();

    let in_dst = match (dst_start(year), dst_end(year)) {
        (Some(start), Some(end)) => *instant >= start && *instant < end,
        _ => false,
    };

    let secs = if in_dst { EDT_OFFSET_SECS } else { EST_OFFSET_SECS };
    FixedOffset::west_opt(secs).unwrap_or_else(|| Utc.fix())
}

/// Second Sunday of March, 02:00 EST
fn dst_start(year: i32) -> Option<DateTime<Utc>> {
    Some(nth_sunday(year, 3, 2)?.and_hms_opt(7, 0, 0)?.and_utc())
}

/// First Sunday of November, 02:00 EDT
fn dst_end(year: i32) -> Option<DateTime<Utc>> {
    Some(nth_sunday(year, 11, 1)?.and_hms_opt(6, 0, 0)?.and_utc())
}

fn nth_sunday(year: i32, month: u32, n: i64) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let to_sunday = (7 - i64::from(first.weekday().num_days_from_sunday())) % 7;
    first.checked_add_signed(Duration::days(to_sunday + 7 * (n - 1)))
}
