//! Time helpers: date parsing and business-timezone checks
//!
//! Date strings cross the API as `YYYY-MM-DD`; parsing and range
//! validation happen in handlers/repositories, the engine only sees
//! `NaiveDate`.

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Reject dates in the future (business timezone)
pub fn validate_not_future(date: NaiveDate, tz: Tz) -> AppResult<()> {
    let today = chrono::Utc::now().with_timezone(&tz).date_naive();
    if date > today {
        return Err(AppError::validation(format!(
            "Date {} is in the future (today is {})",
            date, today
        )));
    }
    Ok(())
}
