//! Human-friendly renderings of timestamps and byte counts.

use chrono::{DateTime, Utc};
use humansize::{BINARY, format_size};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 12 * MONTH;
const LONG_TIME: i64 = 37 * YEAR;

/// (upper bound in seconds, label, divisor). A divisor of zero means the
/// label is used as-is; otherwise `{n} {label}` with `n = delta / divisor`.
const MAGNITUDES: &[(i64, &str, i64)] = &[
    (1, "now", 0),
    (2, "1 second", 0),
    (MINUTE, "seconds", 1),
    (2 * MINUTE, "1 minute", 0),
    (HOUR, "minutes", MINUTE),
    (2 * HOUR, "1 hour", 0),
    (DAY, "hours", HOUR),
    (2 * DAY, "1 day", 0),
    (WEEK, "days", DAY),
    (2 * WEEK, "1 week", 0),
    (MONTH, "weeks", WEEK),
    (2 * MONTH, "1 month", 0),
    (YEAR, "months", MONTH),
    (18 * MONTH, "1 year", 0),
    (2 * YEAR, "2 years", 0),
    (LONG_TIME, "years", YEAR),
];

/// Render `then` relative to `now`, e.g. "3 days ago" or "2 hours from now".
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let mut delta = now.signed_duration_since(then).num_seconds();
    let suffix = if delta < 0 {
        delta = -delta;
        "from now"
    } else {
        "ago"
    };

    for &(bound, label, divisor) in MAGNITUDES {
        if delta < bound {
            return match (label, divisor) {
                ("now", _) => "now".to_string(),
                (_, 0) => format!("{} {}", label, suffix),
                _ => format!("{} {} {}", delta / divisor, label, suffix),
            };
        }
    }

    format!("a long while {}", suffix)
}

/// Render a byte count with binary prefixes (KiB, MiB, ...).
pub fn byte_size(len: u64) -> String {
    format_size(len, BINARY)
}
