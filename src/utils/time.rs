//! Time utilities: the fixed log timestamp pattern and date-bound parsing.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Pattern of record timestamps; the report prints window boundaries with
/// the same pattern.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

/// Pattern of the `-d` range bounds. A bare date resolves to midnight.
pub const BOUND_DATE_FORMAT: &str = "%m/%d/%Y";

pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).ok()
}

pub fn format_timestamp(t: NaiveDateTime) -> String {
    t.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_bound_date(s: &str) -> AppResult<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(s, BOUND_DATE_FORMAT)
        .map_err(|_| AppError::InvalidDate(s.to_string()))?;
    Ok(date.and_time(NaiveTime::MIN))
}

/// Parse a "MM/DD/YYYY-MM/DD/YYYY" range into midnight bounds.
pub fn parse_bound_range(s: &str) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
    let parts: Vec<&str> = s.split('-').collect();

    if parts.len() != 2 {
        return Err(AppError::InvalidRange(s.to_string()));
    }

    let start = parse_bound_date(parts[0])?;
    let end = parse_bound_date(parts[1])?;
    Ok((start, end))
}
