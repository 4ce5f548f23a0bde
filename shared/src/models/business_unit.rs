//! Business Unit Model

use serde::{Deserialize, Serialize};

/// Business unit entity (one operating restaurant/location)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BusinessUnit {
    pub id: i64,
    pub name: String,

    /// First day of fiscal week 1 (YYYY-MM-DD format).
    ///
    /// Set once at creation and immutable afterward: changing it would
    /// retroactively re-label every historical closeout week.
    pub fiscal_anchor_date: String,

    #[serde(default)]
    pub is_active: bool,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Create business unit payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessUnitCreate {
    pub name: String,
    /// YYYY-MM-DD
    pub fiscal_anchor_date: String,
}

/// Update business unit payload
///
/// Deliberately carries no `fiscal_anchor_date` field: the anchor is
/// immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BusinessUnitUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}
