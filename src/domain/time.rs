// Conversions between vendor wall-clock strings and UTC instants
use crate::domain::error::DomainError;
use chrono::offset::LocalResult;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// SolarEdge reports every timestamp in the site's civil time.
pub const VENDOR_TIMEZONE: Tz = chrono_tz::CET;

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Wider than any DST transition in the tz database.
const TRANSITION_SHIFT_HOURS: i64 = 6;

/// A command-line timestamp, which may or may not carry a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalTimestamp {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl LocalTimestamp {
    /// Date-only values start at local midnight.
    pub fn naive(self) -> NaiveDateTime {
        match self {
            Self::Date(date) => date.and_time(NaiveTime::MIN),
            Self::DateTime(date_time) => date_time,
        }
    }
}

impl FromStr for LocalTimestamp {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_local_timestamp(s)
    }
}

/// Parse `YYYY-MM-DD`, falling back to `YYYY-MM-DD HH:MM:SS`.
pub fn parse_local_timestamp(s: &str) -> Result<LocalTimestamp, DomainError> {
    if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(LocalTimestamp::Date(date));
    }
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .map(LocalTimestamp::DateTime)
        .map_err(|_| DomainError::MalformedTimestamp(s.to_string()))
}

/// Convert a vendor `YYYY-MM-DD HH:MM:SS` string into an absolute instant.
///
/// A bare date is read as local midnight.
pub fn vendor_timestamp_to_utc(s: &str) -> Result<DateTime<Utc>, DomainError> {
    let naive = parse_local_timestamp(s)?.naive();
    localize(naive).ok_or_else(|| DomainError::MalformedTimestamp(s.to_string()))
}

/// Resolve a wall-clock reading in [`VENDOR_TIMEZONE`].
///
/// Readings that are ambiguous or skipped around a DST transition are taken
/// with the standard-time offset.
pub fn localize(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    match VENDOR_TIMEZONE.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(_, standard) => Some(standard.with_timezone(&Utc)),
        LocalResult::None => {
            // Wind the clock back to before the gap, then forward again in absolute time.
            let shift = TimeDelta::hours(TRANSITION_SHIFT_HOURS);
            let before = VENDOR_TIMEZONE
                .from_local_datetime(&naive.checked_sub_signed(shift)?)
                .latest()?;
            Some(before.with_timezone(&Utc) + shift)
        }
    }
}

/// Storage encoding: `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format(UTC_FORMAT).to_string()
}

/// Vendor date encoding: `YYYY-MM-DD`.
pub fn format_local_date(local: NaiveDateTime) -> String {
    local.format(DATE_FORMAT).to_string()
}

/// Vendor date-time encoding: `YYYY-MM-DD HH:MM:SS`.
pub fn format_local_datetime(local: NaiveDateTime) -> String {
    local.format(DATETIME_FORMAT).to_string()
}

/// Current wall-clock time at the site.
pub fn vendor_now() -> NaiveDateTime {
    Utc::now().with_timezone(&VENDOR_TIMEZONE).naive_local()
}
