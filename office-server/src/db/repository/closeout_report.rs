//! Closeout Report Repository
//!
//! Commits closeout drafts to storage. Header totals, the weekday
//! name, the fiscal week label and the per-line gratuity shares are
//! all derived server-side from the submitted lines; whatever the
//! client sent for those fields is ignored.
//!
//! Updates replace the full line set and are guarded by an optimistic
//! version token: the caller must echo the header version it loaded,
//! and a stale token is rejected as a conflict.

use super::{business_unit, RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{
    CloseoutReport, CloseoutReportCreate, CloseoutReportQuery, CloseoutReportUpdate,
    ContributionEntry, EmployeeContribution,
};
use sqlx::{Sqlite, SqlitePool, Transaction};

use crate::closeout::{self, to_f64, ReportDraft};

const HEADER_COLUMNS: &str = "id, business_unit_id, calendar_date, weekday_name, week_label, event, shift, manager, net_sales, cash_sales, cc_sales, cc_gratuity, cash_gratuity, points, version, created_at, updated_at";

const LINE_COLUMNS: &str = "id, report_id, employee_name, position, net_sales, cash_sales, cc_sales, cc_gratuity, cash_gratuity, points, share_cc_gratuity, share_cash_gratuity, percent_of_pool";

fn validate_amount(value: f64, field: &str) -> RepoResult<()> {
    if !value.is_finite() {
        return Err(RepoError::Validation(format!(
            "{field} must be a finite number"
        )));
    }
    if value < 0.0 {
        return Err(RepoError::Validation(format!(
            "{field} cannot be negative: {value}"
        )));
    }
    Ok(())
}

fn validate_entries(lines: &[ContributionEntry]) -> RepoResult<()> {
    for (i, line) in lines.iter().enumerate() {
        let row = i + 1;
        if line.employee_name.trim().is_empty() {
            return Err(RepoError::Validation(format!(
                "Line {row}: employee name must not be empty"
            )));
        }
        if line.position.trim().is_empty() {
            return Err(RepoError::Validation(format!(
                "Line {row}: position must not be empty"
            )));
        }
        validate_amount(line.net_sales, &format!("Line {row}: net sales"))?;
        validate_amount(line.cash_sales, &format!("Line {row}: cash sales"))?;
        validate_amount(line.cc_sales, &format!("Line {row}: cc sales"))?;
        validate_amount(line.cc_gratuity, &format!("Line {row}: cc gratuity"))?;
        validate_amount(line.cash_gratuity, &format!("Line {row}: cash gratuity"))?;
        validate_amount(line.points, &format!("Line {row}: points"))?;
    }
    Ok(())
}

fn parse_date(value: &str, field: &str) -> RepoResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| RepoError::Validation(format!("Invalid {field}: {value}")))
}

/// Resolve the fiscal calendar fields and run the engine over the
/// submitted lines. Shared by create and update.
async fn derive(
    pool: &SqlitePool,
    business_unit_id: i64,
    calendar_date: &str,
    lines: Vec<ContributionEntry>,
) -> RepoResult<(String, String, ReportDraft)> {
    let unit = business_unit::find_by_id(pool, business_unit_id)
        .await?
        .ok_or_else(|| {
            RepoError::NotFound(format!("Business unit {business_unit_id} not found"))
        })?;

    let date = parse_date(calendar_date, "calendar date")?;
    let anchor = NaiveDate::parse_from_str(&unit.fiscal_anchor_date, "%Y-%m-%d").map_err(|_| {
        RepoError::Database(format!(
            "Corrupt fiscal anchor date for business unit {business_unit_id}"
        ))
    })?;

    let week_label =
        closeout::week_label(anchor, date).map_err(|e| RepoError::OutOfRange(e.to_string()))?;
    let weekday_name = closeout::weekday_name(date);
    let draft = ReportDraft::with_lines(lines);

    Ok((week_label, weekday_name, draft))
}

/// Insert the draft's lines with their derived gratuity shares,
/// rounded to currency precision at this boundary only.
async fn insert_lines(
    tx: &mut Transaction<'_, Sqlite>,
    report_id: i64,
    draft: &ReportDraft,
) -> RepoResult<()> {
    for (line, alloc) in draft.lines().iter().zip(draft.allocations()) {
        let line_id = shared::util::snowflake_id();
        sqlx::query(
            "INSERT INTO employee_contribution (id, report_id, employee_name, position, net_sales, cash_sales, cc_sales, cc_gratuity, cash_gratuity, points, share_cc_gratuity, share_cash_gratuity, percent_of_pool) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(line_id)
        .bind(report_id)
        .bind(&line.employee_name)
        .bind(&line.position)
        .bind(line.net_sales)
        .bind(line.cash_sales)
        .bind(line.cc_sales)
        .bind(line.cc_gratuity)
        .bind(line.cash_gratuity)
        .bind(line.points)
        .bind(to_f64(alloc.share_cc_gratuity))
        .bind(to_f64(alloc.share_cash_gratuity))
        .bind(to_f64(alloc.percent_of_pool))
        .execute(&mut **tx)
        .await?;
    }
    Ok(())
}

async fn find_header(pool: &SqlitePool, id: i64) -> RepoResult<Option<CloseoutReport>> {
    let report = sqlx::query_as::<_, CloseoutReport>(&format!(
        "SELECT {HEADER_COLUMNS} FROM closeout_report WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(report)
}

async fn fetch_lines(pool: &SqlitePool, report_id: i64) -> RepoResult<Vec<EmployeeContribution>> {
    let lines = sqlx::query_as::<_, EmployeeContribution>(&format!(
        "SELECT {LINE_COLUMNS} FROM employee_contribution WHERE report_id = ? ORDER BY id"
    ))
    .bind(report_id)
    .fetch_all(pool)
    .await?;
    Ok(lines)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<CloseoutReport>> {
    let Some(mut report) = find_header(pool, id).await? else {
        return Ok(None);
    };
    report.lines = fetch_lines(pool, id).await?;
    Ok(Some(report))
}

pub async fn create(pool: &SqlitePool, data: CloseoutReportCreate) -> RepoResult<CloseoutReport> {
    validate_entries(&data.lines)?;
    let (week_label, weekday_name, draft) =
        derive(pool, data.business_unit_id, &data.calendar_date, data.lines).await?;

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    let totals = draft.totals();

    let mut tx = pool.begin().await?;
    sqlx::query(
        "INSERT INTO closeout_report (id, business_unit_id, calendar_date, weekday_name, week_label, event, shift, manager, net_sales, cash_sales, cc_sales, cc_gratuity, cash_gratuity, points, version, created_at, updated_at) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 1, ?, ?)",
    )
    .bind(id)
    .bind(data.business_unit_id)
    .bind(&data.calendar_date)
    .bind(&weekday_name)
    .bind(&week_label)
    .bind(&data.event)
    .bind(&data.shift)
    .bind(&data.manager)
    .bind(to_f64(totals.net_sales))
    .bind(to_f64(totals.cash_sales))
    .bind(to_f64(totals.cc_sales))
    .bind(to_f64(totals.cc_gratuity))
    .bind(to_f64(totals.cash_gratuity))
    .bind(to_f64(totals.points))
    .bind(now)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    insert_lines(&mut tx, id, &draft).await?;
    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create closeout report".into()))
}

/// Replace the report's header fields and full line set.
///
/// The update only lands if `data.version` still matches the stored
/// header; the version is bumped in the same statement, so two callers
/// editing the same report cannot both win.
pub async fn update(
    pool: &SqlitePool,
    id: i64,
    data: CloseoutReportUpdate,
) -> RepoResult<CloseoutReport> {
    validate_entries(&data.lines)?;
    let (week_label, weekday_name, draft) =
        derive(pool, data.business_unit_id, &data.calendar_date, data.lines).await?;

    let now = shared::util::now_millis();
    let totals = draft.totals();

    let mut tx = pool.begin().await?;
    let rows = sqlx::query(
        "UPDATE closeout_report SET business_unit_id = ?, calendar_date = ?, weekday_name = ?, week_label = ?, event = ?, shift = ?, manager = ?, net_sales = ?, cash_sales = ?, cc_sales = ?, cc_gratuity = ?, cash_gratuity = ?, points = ?, version = version + 1, updated_at = ? WHERE id = ? AND version = ?",
    )
    .bind(data.business_unit_id)
    .bind(&data.calendar_date)
    .bind(&weekday_name)
    .bind(&week_label)
    .bind(&data.event)
    .bind(&data.shift)
    .bind(&data.manager)
    .bind(to_f64(totals.net_sales))
    .bind(to_f64(totals.cash_sales))
    .bind(to_f64(totals.cc_sales))
    .bind(to_f64(totals.cc_gratuity))
    .bind(to_f64(totals.cash_gratuity))
    .bind(to_f64(totals.points))
    .bind(now)
    .bind(id)
    .bind(data.version)
    .execute(&mut *tx)
    .await?;

    if rows.rows_affected() == 0 {
        tx.rollback().await?;
        return if find_header(pool, id).await?.is_some() {
            Err(RepoError::Conflict(format!(
                "Closeout report {id} was modified concurrently, reload and retry"
            )))
        } else {
            Err(RepoError::NotFound(format!(
                "Closeout report {id} not found"
            )))
        };
    }

    sqlx::query("DELETE FROM employee_contribution WHERE report_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    insert_lines(&mut tx, id, &draft).await?;
    tx.commit().await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Closeout report {id} not found")))
}

pub async fn query(
    pool: &SqlitePool,
    filter: &CloseoutReportQuery,
) -> RepoResult<Vec<CloseoutReport>> {
    let mut qb = sqlx::QueryBuilder::<Sqlite>::new(format!(
        "SELECT {HEADER_COLUMNS} FROM closeout_report WHERE 1 = 1"
    ));
    if let Some(v) = filter.business_unit_id {
        qb.push(" AND business_unit_id = ");
        qb.push_bind(v);
    }
    if let Some(v) = &filter.start_date {
        qb.push(" AND calendar_date >= ");
        qb.push_bind(v);
    }
    if let Some(v) = &filter.end_date {
        qb.push(" AND calendar_date <= ");
        qb.push_bind(v);
    }
    if let Some(v) = &filter.week_label {
        qb.push(" AND week_label = ");
        qb.push_bind(v);
    }
    if let Some(v) = &filter.event {
        qb.push(" AND event = ");
        qb.push_bind(v);
    }
    if let Some(v) = &filter.shift {
        qb.push(" AND shift = ");
        qb.push_bind(v);
    }
    if let Some(v) = &filter.manager {
        qb.push(" AND manager = ");
        qb.push_bind(v);
    }
    qb.push(" ORDER BY calendar_date DESC, id DESC LIMIT ");
    qb.push_bind(filter.limit.unwrap_or(50).clamp(1, 500));
    qb.push(" OFFSET ");
    qb.push_bind(filter.offset.unwrap_or(0).max(0));

    let mut reports = qb
        .build_query_as::<CloseoutReport>()
        .fetch_all(pool)
        .await?;
    for report in &mut reports {
        report.lines = fetch_lines(pool, report.id).await?;
    }
    Ok(reports)
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;
    sqlx::query("DELETE FROM employee_contribution WHERE report_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    let rows = sqlx::query("DELETE FROM closeout_report WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!(
            "Closeout report {id} not found"
        )));
    }
    tx.commit().await?;
    Ok(())
}
