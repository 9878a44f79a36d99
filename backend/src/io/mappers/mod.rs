//! Conversions between the `shared` DTOs and domain models.
//!
//! The DTOs carry dates as ISO 8601 strings; parsing happens here so that
//! domain services only ever see `chrono` values.

pub mod baby_mapper;
pub mod milestone_mapper;
pub mod record_mapper;
pub mod timeline_mapper;

use anyhow::{anyhow, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};

const DATE_FORMAT: &str = "%Y-%m-%d";
const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse an ISO 8601 calendar date (YYYY-MM-DD).
/// A full timestamp is accepted and truncated to its local date part.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .or_else(|_| parse_timestamp(value).map(|ts| ts.date_naive()))
        .map_err(|_| anyhow!("Invalid date: {:?}", value))
}

/// Parse an ISO 8601 date or date-time, keeping its UTC offset.
///
/// Values without an offset are taken as UTC. A bare date is midnight.
/// Ordering compares the instant, while `naive_local()` still gives the
/// wall clock the caregiver entered.
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Ok(with_offset);
    }
    if let Ok(local) = value.parse::<NaiveDateTime>() {
        return Ok(local.and_utc().fixed_offset());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(midnight.and_utc().fixed_offset());
        }
    }
    Err(anyhow!("Invalid date-time: {:?}", value))
}

/// Parse an RFC 3339 instant, accepting a bare date as midnight UTC
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    parse_timestamp(value).map(|ts| ts.with_timezone(&Utc))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Wall-clock rendering of a timestamp, without its offset
pub fn format_timestamp(timestamp: DateTime<FixedOffset>) -> String {
    timestamp.naive_local().format(LOCAL_DATETIME_FORMAT).to_string()
}
