//! Date helpers for forms and export filenames
//!
//! Form dates are local calendar dates (`YYYY-MM-DD`), never routed through a
//! timestamp, so the date picked is the date stored. Export filenames carry
//! the UTC date.
use chrono::{DateTime, NaiveDate, TimeZone, Utc};

const ISO_DATE: &str = "%Y-%m-%d";

/// Format a calendar date as `YYYY-MM-DD`
pub fn format_date_safe(date: NaiveDate) -> String {
    date.format(ISO_DATE).to_string()
}

/// Parse `YYYY-MM-DD` (a trailing `T...` time part is ignored) as a local date.
/// Returns `None` for anything else.
pub fn parse_local_date_string(value: &str) -> Option<NaiveDate> {
    let date_part = value.trim().split('T').next().unwrap_or_default();
    match NaiveDate::parse_from_str(date_part, ISO_DATE) {
        Ok(date) => Some(date),
        Err(e) => {
            log::warn!("Invalid date string {:?}: {}", value, e);
            None
        }
    }
}

/// Calendar date of `instant` in UTC
pub fn utc_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> NaiveDate {
    instant.with_timezone(&Utc).date_naive()
}

/// Today's date in UTC; export filenames are stamped with it
pub fn today_utc() -> NaiveDate {
    utc_date(&Utc::now())
}
