//! Closeout Report API Handlers
//!
//! Handlers validate text inputs and hand off to the repository; the
//! totals, week label and gratuity shares in the response are always
//! server-derived.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::closeout_report;
use crate::utils::validation::{validate_optional_text, MAX_SHORT_TEXT_LEN};
use crate::utils::{time, AppError, AppResult};
use shared::models::{
    CloseoutReport, CloseoutReportCreate, CloseoutReportQuery, CloseoutReportUpdate,
};

fn validate_descriptive_fields(
    event: &Option<String>,
    shift: &Option<String>,
    manager: &Option<String>,
) -> AppResult<()> {
    validate_optional_text(event, "Event", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(shift, "Shift", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(manager, "Manager", MAX_SHORT_TEXT_LEN)?;
    Ok(())
}

/// GET /api/closeout-reports - list reports with optional filters
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<CloseoutReportQuery>,
) -> AppResult<Json<Vec<CloseoutReport>>> {
    if let Some(start) = &query.start_date {
        time::parse_date(start)?;
    }
    if let Some(end) = &query.end_date {
        time::parse_date(end)?;
    }

    let reports = closeout_report::query(&state.pool, &query).await?;
    Ok(Json(reports))
}

/// GET /api/closeout-reports/:id - fetch one report with its lines
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<CloseoutReport>> {
    let report = closeout_report::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Closeout report {id} not found")))?;
    Ok(Json(report))
}

/// POST /api/closeout-reports - commit a new closeout report
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CloseoutReportCreate>,
) -> AppResult<Json<CloseoutReport>> {
    let date = time::parse_date(&payload.calendar_date)?;
    time::validate_not_future(date, state.config.timezone)?;
    validate_descriptive_fields(&payload.event, &payload.shift, &payload.manager)?;

    let report = closeout_report::create(&state.pool, payload).await?;
    Ok(Json(report))
}

/// PUT /api/closeout-reports/:id - replace an existing report
///
/// The payload must echo the version it was loaded from; a stale
/// version is rejected with 409.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<CloseoutReportUpdate>,
) -> AppResult<Json<CloseoutReport>> {
    let date = time::parse_date(&payload.calendar_date)?;
    time::validate_not_future(date, state.config.timezone)?;
    validate_descriptive_fields(&payload.event, &payload.shift, &payload.manager)?;

    let report = closeout_report::update(&state.pool, id, payload).await?;
    Ok(Json(report))
}

/// DELETE /api/closeout-reports/:id - delete a report and its lines
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    closeout_report::delete(&state.pool, id).await?;
    Ok(Json(true))
}
