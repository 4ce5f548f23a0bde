//! Business Unit API Handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::ServerState;
use crate::db::repository::business_unit;
use crate::utils::validation::{validate_optional_text, validate_required_text, MAX_NAME_LEN};
use crate::utils::{time, AppError, AppResult};
use shared::models::{BusinessUnit, BusinessUnitCreate, BusinessUnitUpdate};

/// GET /api/business-units - list all business units
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<BusinessUnit>>> {
    let units = business_unit::find_all(&state.pool).await?;
    Ok(Json(units))
}

/// GET /api/business-units/:id - fetch one business unit
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<BusinessUnit>> {
    let unit = business_unit::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Business unit {id} not found")))?;
    Ok(Json(unit))
}

/// POST /api/business-units - create a business unit
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<BusinessUnitCreate>,
) -> AppResult<Json<BusinessUnit>> {
    validate_required_text(&payload.name, "Name", MAX_NAME_LEN)?;
    time::parse_date(&payload.fiscal_anchor_date)?;

    let unit = business_unit::create(&state.pool, payload).await?;
    Ok(Json(unit))
}

/// PUT /api/business-units/:id - update name / active flag
///
/// The fiscal anchor date is not part of the update payload and never
/// changes after creation.
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<BusinessUnitUpdate>,
) -> AppResult<Json<BusinessUnit>> {
    validate_optional_text(&payload.name, "Name", MAX_NAME_LEN)?;

    let unit = business_unit::update(&state.pool, id, payload).await?;
    Ok(Json(unit))
}

/// DELETE /api/business-units/:id - delete an unreferenced business unit
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<bool>> {
    business_unit::delete(&state.pool, id).await?;
    Ok(Json(true))
}
