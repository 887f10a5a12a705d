use alloc::format;
use alloc::string::String;

use chrono::{DateTime, Datelike, Timelike, Utc};
use figura_value::Value;

use crate::{Figurative, LiteralError};

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Renders `time.Time` values: `time.Time{}` for the zero time
/// (`0001-01-01T00:00:00Z`), otherwise
/// `time.Date(2015, time.April, 14, 14, 56, 3, 55635788, time.UTC)`.
///
/// Registered for non-pointer `time.Time` by [`Figurative::new`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use figura_render::Figurative;
///
/// let t = Utc.with_ymd_and_hms(2015, 4, 14, 14, 56, 3).unwrap();
/// assert_eq!(
///     Figurative::new().literally(&t),
///     "time.Date(2015, time.April, 14, 14, 56, 3, 0, time.UTC)",
/// );
/// ```
pub fn time_constructor(f: &Figurative, value: &Value) -> Result<String, LiteralError> {
    let Some(t) = value.downcast_opaque::<DateTime<Utc>>() else {
        return f.unsupported(value);
    };

    let q = f.qualifier("time");
    if is_zero(t) {
        return Ok(format!("{q}Time{{}}"));
    }

    let month = MONTHS[t.month0() as usize];
    Ok(format!(
        "{q}Date({}, {q}{month}, {}, {}, {}, {}, {}, {q}UTC)",
        t.year(),
        t.day(),
        t.hour(),
        t.minute(),
        t.second(),
        t.nanosecond(),
    ))
}

fn is_zero(t: &DateTime<Utc>) -> bool {
    t.year() == 1
        && t.ordinal() == 1
        && t.num_seconds_from_midnight() == 0
        && t.nanosecond() == 0
}
