//! Closeout & gratuity distribution engine
//!
//! Pure computation behind the nightly closeout forms:
//!
//! - [`calendar`]: fiscal week labels relative to a business unit's
//!   anchor date
//! - [`aggregate`]: report totals summed from per-employee lines
//! - [`allocate`]: points-weighted split of the pooled gratuities
//! - [`draft`]: in-memory report draft that recomputes totals and
//!   allocations on every line mutation
//!
//! All monetary arithmetic is done with `Decimal` internally and
//! converted to `f64` only at the storage/serialization boundary.

pub mod aggregate;
pub mod allocate;
pub mod calendar;
pub mod draft;

pub use aggregate::{aggregate, ReportTotals};
pub use allocate::{allocate, GratuityAllocation};
pub use calendar::{week_label, weekday_name};
pub use draft::ReportDraft;

use rust_decimal::prelude::*;
use thiserror::Error;

/// Rounding for monetary values at the boundary (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Errors from the pure closeout computations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CloseoutError {
    /// Target date precedes the business unit's fiscal anchor date
    #[error("Date {target} precedes fiscal anchor {anchor}")]
    OutOfRangeDate {
        anchor: chrono::NaiveDate,
        target: chrono::NaiveDate,
    },
}

/// Convert f64 to Decimal for calculation
///
/// Input values are validated as finite at the API boundary. If
/// NaN/Infinity somehow reaches here, logs an error and returns ZERO
/// instead of corrupting the financial calculation.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    value
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        // SAFETY: Decimal rounded to 2dp is always within f64 representable range
        .expect("Decimal rounded to 2dp is always representable as f64")
}

#[cfg(test)]
mod tests;
