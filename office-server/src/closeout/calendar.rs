//! Fiscal calendar resolver
//!
//! Weeks are fixed 7-day blocks anchored at the business unit's
//! opening date, not Mon-Sun calendar weeks. Week 1 starts on the
//! anchor date itself.

use chrono::{Datelike, NaiveDate};

use super::CloseoutError;

/// Compute the 1-indexed fiscal week label ("W1", "W2", ...) for
/// `target`, relative to the unit's `anchor` date.
///
/// A target date before the anchor is rejected: the unit did not exist
/// yet, so no week contains it.
pub fn week_label(anchor: NaiveDate, target: NaiveDate) -> Result<String, CloseoutError> {
    let days = (target - anchor).num_days();
    if days < 0 {
        return Err(CloseoutError::OutOfRangeDate { anchor, target });
    }
    Ok(format!("W{}", days / 7 + 1))
}

/// English weekday name ("Monday", ..., "Sunday") for a report date
pub fn weekday_name(date: NaiveDate) -> String {
    match date.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
    .to_string()
}
