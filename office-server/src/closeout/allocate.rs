//! Gratuity pool allocator
//!
//! Tip-pool-by-weight: the per-line `cc_gratuity`/`cash_gratuity`
//! amounts only feed the *pool totals*; an employee's payout is driven
//! entirely by their `points` weight. The two concepts are kept
//! separate on purpose.

use rust_decimal::Decimal;
use shared::models::ContributionEntry;

use super::aggregate::ReportTotals;
use super::to_decimal;

/// Derived gratuity split for one contribution line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GratuityAllocation {
    pub share_cc_gratuity: Decimal,
    pub share_cash_gratuity: Decimal,
    pub percent_of_pool: Decimal,
}

/// Split the pooled gratuities across the lines in proportion to each
/// line's points.
///
/// `totals` must come from [`aggregate`](super::aggregate) over the
/// same `lines`; the total points are not recomputed here.
///
/// When total points are zero every share and percentage is zero,
/// whatever the pool size: no division is performed and no error is
/// raised. The pool stays nominally unallocated. An equal split among
/// the listed employees would arguably be the sounder business rule,
/// but it is not what the system has historically done; treat a change
/// here as a product decision, not a code fix.
///
/// Full Decimal precision is carried throughout; rounding to currency
/// precision happens only when the orchestrator persists the shares.
pub fn allocate(lines: &[ContributionEntry], totals: &ReportTotals) -> Vec<GratuityAllocation> {
    let total_points = totals.points;
    if total_points <= Decimal::ZERO {
        return vec![GratuityAllocation::default(); lines.len()];
    }

    lines
        .iter()
        .map(|line| {
            let points = to_decimal(line.points);
            GratuityAllocation {
                share_cc_gratuity: totals.cc_gratuity * points / total_points,
                share_cash_gratuity: totals.cash_gratuity * points / total_points,
                percent_of_pool: Decimal::ONE_HUNDRED * points / total_points,
            }
        })
        .collect()
}
