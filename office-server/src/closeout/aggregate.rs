//! Contribution aggregator
//!
//! The only legitimate source of report header totals. Totals must
//! never be entered or edited independently of the lines behind them;
//! that is what keeps the header reconciled with its line set.

use rust_decimal::Decimal;
use shared::models::ContributionEntry;

use super::to_decimal;

/// Report-level totals, one field per summed column
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportTotals {
    pub net_sales: Decimal,
    pub cash_sales: Decimal,
    pub cc_sales: Decimal,
    pub cc_gratuity: Decimal,
    pub cash_gratuity: Decimal,
    pub points: Decimal,
}

/// Sum every entered field across the line contributions.
///
/// An empty line set yields all-zero totals, not an error.
pub fn aggregate(lines: &[ContributionEntry]) -> ReportTotals {
    let mut totals = ReportTotals::default();
    for line in lines {
        totals.net_sales += to_decimal(line.net_sales);
        totals.cash_sales += to_decimal(line.cash_sales);
        totals.cc_sales += to_decimal(line.cc_sales);
        totals.cc_gratuity += to_decimal(line.cc_gratuity);
        totals.cash_gratuity += to_decimal(line.cash_gratuity);
        totals.points += to_decimal(line.points);
    }
    totals
}
