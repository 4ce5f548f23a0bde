use super::*;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::models::ContributionEntry;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn line(name: &str, points: f64) -> ContributionEntry {
    ContributionEntry {
        employee_name: name.to_string(),
        position: "Server".to_string(),
        points,
        ..Default::default()
    }
}

#[test]
fn test_to_decimal_precision() {
    // Classic floating point problem: 0.1 + 0.2 != 0.3
    let a = 0.1_f64;
    let b = 0.2_f64;
    assert_ne!(a + b, 0.3);

    let sum_dec = to_decimal(a) + to_decimal(b);
    assert_eq!(to_f64(sum_dec), 0.3);
}

// ── Fiscal calendar ─────────────────────────────────────────────────

#[test]
fn test_week_one_covers_first_seven_days() {
    let anchor = date(2024, 3, 15);
    assert_eq!(week_label(anchor, anchor).unwrap(), "W1");
    assert_eq!(week_label(anchor, date(2024, 3, 21)).unwrap(), "W1"); // anchor + 6d
    assert_eq!(week_label(anchor, date(2024, 3, 22)).unwrap(), "W2"); // anchor + 7d
}

#[test]
fn test_week_label_concrete_scenario() {
    let anchor = date(2024, 1, 1);
    assert_eq!(week_label(anchor, date(2024, 1, 8)).unwrap(), "W2");
}

#[test]
fn test_week_blocks_are_anchor_relative_not_calendar() {
    // Anchor on a Wednesday: the week boundary stays Wednesday-based
    let anchor = date(2024, 1, 3);
    assert_eq!(week_label(anchor, date(2024, 1, 9)).unwrap(), "W1"); // following Tuesday
    assert_eq!(week_label(anchor, date(2024, 1, 10)).unwrap(), "W2"); // following Wednesday
}

#[test]
fn test_date_before_anchor_is_rejected() {
    let anchor = date(2024, 1, 1);
    let err = week_label(anchor, date(2023, 12, 31)).unwrap_err();
    assert_eq!(
        err,
        CloseoutError::OutOfRangeDate {
            anchor,
            target: date(2023, 12, 31),
        }
    );
}

#[test]
fn test_weekday_name() {
    assert_eq!(weekday_name(date(2024, 1, 1)), "Monday");
    assert_eq!(weekday_name(date(2024, 1, 7)), "Sunday");
}

// ── Aggregation ─────────────────────────────────────────────────────

#[test]
fn test_aggregate_reconciles_every_field() {
    let lines = vec![
        ContributionEntry {
            employee_name: "Ana".into(),
            position: "Server".into(),
            net_sales: 120.50,
            cash_sales: 40.25,
            cc_sales: 80.25,
            cc_gratuity: 18.10,
            cash_gratuity: 5.00,
            points: 10.0,
        },
        ContributionEntry {
            employee_name: "Ben".into(),
            position: "Bartender".into(),
            net_sales: 310.00,
            cash_sales: 100.00,
            cc_sales: 210.00,
            cc_gratuity: 45.90,
            cash_gratuity: 12.50,
            points: 15.0,
        },
    ];

    let totals = aggregate(&lines);
    assert_eq!(to_f64(totals.net_sales), 430.50);
    assert_eq!(to_f64(totals.cash_sales), 140.25);
    assert_eq!(to_f64(totals.cc_sales), 290.25);
    assert_eq!(to_f64(totals.cc_gratuity), 64.00);
    assert_eq!(to_f64(totals.cash_gratuity), 17.50);
    assert_eq!(to_f64(totals.points), 25.0);
}

#[test]
fn test_aggregate_empty_lines_is_all_zero() {
    let totals = aggregate(&[]);
    assert_eq!(totals, aggregate::ReportTotals::default());
    assert_eq!(to_f64(totals.net_sales), 0.0);
    assert_eq!(to_f64(totals.points), 0.0);
}

#[test]
fn test_aggregate_many_small_amounts_no_drift() {
    // 0.01 summed 1000 times must be exactly 10.00
    let lines: Vec<ContributionEntry> = (0..1000)
        .map(|i| ContributionEntry {
            employee_name: format!("e{i}"),
            position: "Server".into(),
            cc_gratuity: 0.01,
            ..Default::default()
        })
        .collect();
    assert_eq!(to_f64(aggregate(&lines).cc_gratuity), 10.00);
}

// ── Allocation ──────────────────────────────────────────────────────

#[test]
fn test_allocate_concrete_scenario_quarters() {
    // Points 10 and 30 over a 100.00 cc pool: 25/75 split
    let mut a = line("Ana", 10.0);
    a.cc_gratuity = 60.0;
    let mut b = line("Ben", 30.0);
    b.cc_gratuity = 40.0;
    let lines = vec![a, b];

    let totals = aggregate(&lines);
    let allocs = allocate(&lines, &totals);

    assert_eq!(to_f64(allocs[0].share_cc_gratuity), 25.00);
    assert_eq!(to_f64(allocs[1].share_cc_gratuity), 75.00);
    assert_eq!(to_f64(allocs[0].percent_of_pool), 25.0);
    assert_eq!(to_f64(allocs[1].percent_of_pool), 75.0);
}

#[test]
fn test_allocate_shares_sum_to_pool() {
    let mut lines = vec![line("Ana", 7.0), line("Ben", 11.0), line("Cy", 3.0)];
    lines[0].cc_gratuity = 123.45;
    lines[1].cc_gratuity = 67.89;
    lines[2].cash_gratuity = 55.55;

    let totals = aggregate(&lines);
    let allocs = allocate(&lines, &totals);

    let cc_sum: Decimal = allocs.iter().map(|a| a.share_cc_gratuity).sum();
    let cash_sum: Decimal = allocs.iter().map(|a| a.share_cash_gratuity).sum();
    let pct_sum: Decimal = allocs.iter().map(|a| a.percent_of_pool).sum();

    let epsilon = Decimal::new(1, 10);
    assert!((cc_sum - totals.cc_gratuity).abs() < epsilon);
    assert!((cash_sum - totals.cash_gratuity).abs() < epsilon);
    assert!((pct_sum - Decimal::ONE_HUNDRED).abs() < epsilon);
}

#[test]
fn test_allocate_zero_points_leaves_pool_unallocated() {
    // Three lines with zero points and a nonzero cash pool: everyone
    // gets zero. Documents the degeneracy rule, not a bug.
    let mut lines = vec![line("Ana", 0.0), line("Ben", 0.0), line("Cy", 0.0)];
    lines[0].cash_gratuity = 50.00;

    let totals = aggregate(&lines);
    assert_eq!(to_f64(totals.cash_gratuity), 50.00);

    let allocs = allocate(&lines, &totals);
    assert_eq!(allocs.len(), 3);
    for alloc in &allocs {
        assert_eq!(to_f64(alloc.share_cc_gratuity), 0.00);
        assert_eq!(to_f64(alloc.share_cash_gratuity), 0.00);
        assert_eq!(to_f64(alloc.percent_of_pool), 0.0);
    }
}

#[test]
fn test_allocate_zero_weight_line_among_weighted_lines() {
    let mut lines = vec![line("Ana", 0.0), line("Ben", 5.0)];
    lines[1].cc_gratuity = 80.0;

    let totals = aggregate(&lines);
    let allocs = allocate(&lines, &totals);

    assert_eq!(to_f64(allocs[0].share_cc_gratuity), 0.00);
    assert_eq!(to_f64(allocs[1].share_cc_gratuity), 80.00);
    assert_eq!(to_f64(allocs[1].percent_of_pool), 100.0);
}

#[test]
fn test_allocate_is_idempotent() {
    let mut lines = vec![line("Ana", 3.5), line("Ben", 6.5)];
    lines[0].cc_gratuity = 33.33;
    lines[1].cash_gratuity = 66.67;

    let totals = aggregate(&lines);
    let first = allocate(&lines, &totals);
    let second = allocate(&lines, &totals);
    assert_eq!(first, second);
}

// ── Draft ───────────────────────────────────────────────────────────

#[test]
fn test_draft_recomputes_on_every_mutation() {
    let mut draft = ReportDraft::new();
    assert_eq!(to_f64(draft.totals().points), 0.0);

    let mut a = line("Ana", 10.0);
    a.cc_gratuity = 100.0;
    draft.push_line(a);
    assert_eq!(to_f64(draft.totals().cc_gratuity), 100.00);
    assert_eq!(to_f64(draft.allocations()[0].percent_of_pool), 100.0);

    draft.push_line(line("Ben", 30.0));
    assert_eq!(to_f64(draft.allocations()[0].share_cc_gratuity), 25.00);
    assert_eq!(to_f64(draft.allocations()[1].share_cc_gratuity), 75.00);

    draft.remove_line(1);
    assert_eq!(draft.lines().len(), 1);
    assert_eq!(to_f64(draft.allocations()[0].percent_of_pool), 100.0);
}

#[test]
fn test_draft_set_line_recomputes() {
    let mut draft = ReportDraft::with_lines(vec![line("Ana", 10.0), line("Ben", 10.0)]);
    assert_eq!(to_f64(draft.allocations()[0].percent_of_pool), 50.0);

    draft.set_line(1, line("Ben", 30.0));
    assert_eq!(to_f64(draft.allocations()[0].percent_of_pool), 25.0);
    assert_eq!(to_f64(draft.allocations()[1].percent_of_pool), 75.0);
}

#[test]
fn test_draft_seeded_from_committed_report() {
    let mut stored = shared::models::CloseoutReport {
        id: 1,
        business_unit_id: 1,
        calendar_date: "2024-01-08".into(),
        weekday_name: "Monday".into(),
        week_label: "W2".into(),
        event: None,
        shift: None,
        manager: None,
        net_sales: 0.0,
        cash_sales: 0.0,
        cc_sales: 0.0,
        cc_gratuity: 100.0,
        cash_gratuity: 0.0,
        points: 40.0,
        version: 1,
        created_at: None,
        updated_at: None,
        lines: vec![],
    };
    stored.lines = vec![
        shared::models::EmployeeContribution {
            id: 10,
            report_id: 1,
            employee_name: "Ana".into(),
            position: "Server".into(),
            net_sales: 0.0,
            cash_sales: 0.0,
            cc_sales: 0.0,
            cc_gratuity: 100.0,
            cash_gratuity: 0.0,
            points: 10.0,
            share_cc_gratuity: 25.0,
            share_cash_gratuity: 0.0,
            percent_of_pool: 25.0,
        },
        shared::models::EmployeeContribution {
            id: 11,
            report_id: 1,
            employee_name: "Ben".into(),
            position: "Server".into(),
            net_sales: 0.0,
            cash_sales: 0.0,
            cc_sales: 0.0,
            cc_gratuity: 0.0,
            cash_gratuity: 0.0,
            points: 30.0,
            share_cc_gratuity: 75.0,
            share_cash_gratuity: 0.0,
            percent_of_pool: 75.0,
        },
    ];

    // Entered amounts round-trip; derived values are recomputed
    let draft = ReportDraft::seeded(&stored);
    assert_eq!(draft.lines().len(), 2);
    assert_eq!(to_f64(draft.totals().cc_gratuity), 100.00);
    assert_eq!(to_f64(draft.allocations()[0].share_cc_gratuity), 25.00);
    assert_eq!(to_f64(draft.allocations()[1].share_cc_gratuity), 75.00);
}

#[test]
fn test_draft_replace_lines_discards_previous_set() {
    let mut draft = ReportDraft::with_lines(vec![
        line("Ana", 1.0),
        line("Ben", 2.0),
        line("Cy", 3.0),
    ]);
    draft.replace_lines(vec![line("Dee", 4.0)]);
    assert_eq!(draft.lines().len(), 1);
    assert_eq!(to_f64(draft.totals().points), 4.0);
}
