//! In-memory report draft
//!
//! A draft is the editing state of one closeout report: line items
//! live in memory and totals + allocations are recomputed on every
//! mutation. Nothing touches storage until the draft is committed
//! through the repository; there is no autosave.

use shared::models::{CloseoutReport, ContributionEntry};

use super::aggregate::{aggregate, ReportTotals};
use super::allocate::{allocate, GratuityAllocation};

/// Draft state of a closeout report
#[derive(Debug, Clone, Default)]
pub struct ReportDraft {
    lines: Vec<ContributionEntry>,
    totals: ReportTotals,
    allocations: Vec<GratuityAllocation>,
}

impl ReportDraft {
    /// Empty draft for a new report
    pub fn new() -> Self {
        Self::default()
    }

    /// Draft pre-filled with a form's line entries
    pub fn with_lines(lines: Vec<ContributionEntry>) -> Self {
        let mut draft = Self {
            lines,
            ..Self::default()
        };
        draft.recompute();
        draft
    }

    /// Re-enter the draft state from a committed report (edit flow).
    ///
    /// Saving this draft later *replaces* the committed line set; it
    /// never merges with it.
    pub fn seeded(report: &CloseoutReport) -> Self {
        let lines = report
            .lines
            .iter()
            .map(|l| ContributionEntry {
                employee_name: l.employee_name.clone(),
                position: l.position.clone(),
                net_sales: l.net_sales,
                cash_sales: l.cash_sales,
                cc_sales: l.cc_sales,
                cc_gratuity: l.cc_gratuity,
                cash_gratuity: l.cash_gratuity,
                points: l.points,
            })
            .collect();
        Self::with_lines(lines)
    }

    /// Append a line and recompute
    pub fn push_line(&mut self, line: ContributionEntry) {
        self.lines.push(line);
        self.recompute();
    }

    /// Remove the line at `index` (if present) and recompute
    pub fn remove_line(&mut self, index: usize) {
        if index < self.lines.len() {
            self.lines.remove(index);
            self.recompute();
        }
    }

    /// Overwrite the line at `index` and recompute
    pub fn set_line(&mut self, index: usize, line: ContributionEntry) {
        if let Some(slot) = self.lines.get_mut(index) {
            *slot = line;
            self.recompute();
        }
    }

    /// Replace the whole line set and recompute
    pub fn replace_lines(&mut self, lines: Vec<ContributionEntry>) {
        self.lines = lines;
        self.recompute();
    }

    pub fn lines(&self) -> &[ContributionEntry] {
        &self.lines
    }

    pub fn totals(&self) -> &ReportTotals {
        &self.totals
    }

    /// Allocations, one per line, in line order
    pub fn allocations(&self) -> &[GratuityAllocation] {
        &self.allocations
    }

    fn recompute(&mut self) {
        self.totals = aggregate(&self.lines);
        self.allocations = allocate(&self.lines, &self.totals);
    }
}
