//! # Time Utilities
//!
//! Utilities for timestamps and calendar dates using chrono.
//!
//! Calendar dates travel as ISO `YYYY-MM-DD` strings, which is what the backend
//! accepts for `LocalDate` fields.

use chrono::{DateTime, Duration, Local, NaiveDate, Utc};

const ISO_DATE: &str = "%Y-%m-%d";

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current instant as epoch milliseconds.
pub fn now_millis() -> i64 {
    now_utc().timestamp_millis()
}

/// Today's date in the local timezone, as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Local::now().date_naive().format(ISO_DATE).to_string()
}

/// Shift an ISO date by `days`.
pub fn add_days_iso(date: &str, days: i64) -> Result<String, Error> {
    let parsed = parse_date(date)?;
    Ok((parsed + Duration::days(days)).format(ISO_DATE).to_string())
}

/// Parse an ISO date, also accepting a full `YYYY-MM-DDTHH:MM:SS` timestamp.
pub fn parse_date(date: &str) -> Result<NaiveDate, Error> {
    let head = date.trim().get(..10).unwrap_or(date.trim());
    NaiveDate::parse_from_str(head, ISO_DATE).map_err(|_| Error::FailToDateParse(date.to_string()))
}

/// Render an ISO date as `DD/MM/YYYY`; unparseable input is returned unchanged.
pub fn format_date_br(date: &str) -> String {
    parse_date(date)
        .map(|d| d.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

// region:    --- Error
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    FailToDateParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_days_crosses_month() {
        assert_eq!(add_days_iso("2024-01-28", 7).unwrap(), "2024-02-04");
    }

    #[test]
    fn test_parse_date_accepts_timestamp() {
        let date = parse_date("2024-03-05T14:30:00").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
    }

    #[test]
    fn test_format_date_br() {
        assert_eq!(format_date_br("2024-03-05"), "05/03/2024");
        assert_eq!(format_date_br("soon"), "soon");
    }

    #[test]
    fn test_today_iso_shape() {
        let today = today_iso();
        assert_eq!(today.len(), 10);
        assert!(parse_date(&today).is_ok());
    }
}
