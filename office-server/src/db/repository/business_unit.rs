//! Business Unit Repository

use super::{RepoError, RepoResult};
use chrono::NaiveDate;
use shared::models::{BusinessUnit, BusinessUnitCreate, BusinessUnitUpdate};
use sqlx::SqlitePool;

const COLUMNS: &str = "id, name, fiscal_anchor_date, is_active, created_at, updated_at";

fn validate_anchor_date(value: &str) -> RepoResult<()> {
    if NaiveDate::parse_from_str(value, "%Y-%m-%d").is_err() {
        return Err(RepoError::Validation(format!(
            "Invalid fiscal anchor date: {value}"
        )));
    }
    Ok(())
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<BusinessUnit>> {
    let units = sqlx::query_as::<_, BusinessUnit>(&format!(
        "SELECT {COLUMNS} FROM business_unit ORDER BY name"
    ))
    .fetch_all(pool)
    .await?;
    Ok(units)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<BusinessUnit>> {
    let unit = sqlx::query_as::<_, BusinessUnit>(&format!(
        "SELECT {COLUMNS} FROM business_unit WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(unit)
}

pub async fn create(pool: &SqlitePool, data: BusinessUnitCreate) -> RepoResult<BusinessUnit> {
    if data.name.trim().is_empty() {
        return Err(RepoError::Validation("Name must not be empty".into()));
    }
    validate_anchor_date(&data.fiscal_anchor_date)?;

    let duplicate = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM business_unit WHERE name = ?")
        .bind(&data.name)
        .fetch_one(pool)
        .await?;
    if duplicate > 0 {
        return Err(RepoError::Duplicate(format!(
            "Business unit '{}' already exists",
            data.name
        )));
    }

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO business_unit (id, name, fiscal_anchor_date, is_active, created_at, updated_at) VALUES (?, ?, ?, 1, ?, ?)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.fiscal_anchor_date)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create business unit".into()))
}

/// Update name and active flag. The fiscal anchor date is immutable:
/// changing it would re-label every historical closeout week.
pub async fn update(pool: &SqlitePool, id: i64, data: BusinessUnitUpdate) -> RepoResult<BusinessUnit> {
    if let Some(name) = &data.name {
        if name.trim().is_empty() {
            return Err(RepoError::Validation("Name must not be empty".into()));
        }
    }

    let now = shared::util::now_millis();
    let rows = sqlx::query(
        "UPDATE business_unit SET name = COALESCE(?, name), is_active = COALESCE(?, is_active), updated_at = ? WHERE id = ?",
    )
    .bind(&data.name)
    .bind(data.is_active)
    .bind(now)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Business unit {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Business unit {id} not found")))
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let reports = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM closeout_report WHERE business_unit_id = ?",
    )
    .bind(id)
    .fetch_one(pool)
    .await?;
    if reports > 0 {
        return Err(RepoError::Validation(format!(
            "Business unit {id} has {reports} closeout reports and cannot be deleted"
        )));
    }

    let rows = sqlx::query("DELETE FROM business_unit WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Business unit {id} not found")));
    }
    Ok(())
}
