//! Closeout Report Model
//!
//! A closeout report records one shift/event's sales and pooled
//! gratuities for a business unit. Header totals and per-line gratuity
//! shares are always derived from the line contributions, never
//! entered directly.

use serde::{Deserialize, Serialize};

/// Closeout report header
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct CloseoutReport {
    pub id: i64,
    pub business_unit_id: i64,

    /// Report date (YYYY-MM-DD format)
    pub calendar_date: String,
    /// Derived: English weekday of `calendar_date`
    pub weekday_name: String,
    /// Derived: fiscal week label ("W1", "W2", ...) relative to the
    /// unit's anchor date
    pub week_label: String,

    // -- Descriptive, no computation --
    pub event: Option<String>,
    pub shift: Option<String>,
    pub manager: Option<String>,

    // -- Totals: derived by aggregation over the lines --
    #[serde(default)]
    pub net_sales: f64,
    #[serde(default)]
    pub cash_sales: f64,
    #[serde(default)]
    pub cc_sales: f64,
    #[serde(default)]
    pub cc_gratuity: f64,
    #[serde(default)]
    pub cash_gratuity: f64,
    #[serde(default)]
    pub points: f64,

    /// Optimistic-concurrency token, incremented on every update
    #[serde(default)]
    pub version: i64,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,

    // -- Relations (populated by application code, skipped by FromRow) --
    #[cfg_attr(feature = "db", sqlx(skip))]
    #[serde(default)]
    pub lines: Vec<EmployeeContribution>,
}

/// One employee's entered figures within a closeout report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct EmployeeContribution {
    pub id: i64,
    pub report_id: i64,

    pub employee_name: String,
    pub position: String,

    // -- Entered amounts --
    #[serde(default)]
    pub net_sales: f64,
    #[serde(default)]
    pub cash_sales: f64,
    #[serde(default)]
    pub cc_sales: f64,
    /// Contribution to the CC gratuity pool (not this employee's payout)
    #[serde(default)]
    pub cc_gratuity: f64,
    /// Contribution to the cash gratuity pool (not this employee's payout)
    #[serde(default)]
    pub cash_gratuity: f64,
    /// Dimensionless payout weight; determines the share of the pool
    #[serde(default)]
    pub points: f64,

    // -- Derived allocation, never entered --
    #[serde(default)]
    pub share_cc_gratuity: f64,
    #[serde(default)]
    pub share_cash_gratuity: f64,
    #[serde(default)]
    pub percent_of_pool: f64,
}

/// Raw line entry from the closeout form
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ContributionEntry {
    pub employee_name: String,
    pub position: String,
    #[serde(default)]
    pub net_sales: f64,
    #[serde(default)]
    pub cash_sales: f64,
    #[serde(default)]
    pub cc_sales: f64,
    #[serde(default)]
    pub cc_gratuity: f64,
    #[serde(default)]
    pub cash_gratuity: f64,
    #[serde(default)]
    pub points: f64,
}

/// Create closeout report payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseoutReportCreate {
    pub business_unit_id: i64,
    /// YYYY-MM-DD
    pub calendar_date: String,
    pub event: Option<String>,
    pub shift: Option<String>,
    pub manager: Option<String>,
    #[serde(default)]
    pub lines: Vec<ContributionEntry>,
}

/// Update closeout report payload
///
/// Saving an edited report replaces the full line set; `version` must
/// match the stored header or the update is rejected as a conflict.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseoutReportUpdate {
    pub business_unit_id: i64,
    /// YYYY-MM-DD
    pub calendar_date: String,
    pub event: Option<String>,
    pub shift: Option<String>,
    pub manager: Option<String>,
    #[serde(default)]
    pub lines: Vec<ContributionEntry>,
    /// Expected header version (optimistic concurrency)
    pub version: i64,
}

/// Query filters for listing closeout reports
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CloseoutReportQuery {
    pub business_unit_id: Option<i64>,
    /// Inclusive range bounds (YYYY-MM-DD)
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub week_label: Option<String>,
    pub event: Option<String>,
    pub shift: Option<String>,
    pub manager: Option<String>,
    pub limit: Option<i32>,
    pub offset: Option<i32>,
}
