//! Input validation helpers
//!
//! Centralized text length constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so limits are
//! applied at the handler boundary.

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Entity names: business unit, employee, position, event, etc.
pub const MAX_NAME_LEN: usize = 200;

/// Short labels: shift, manager, week label, etc.
pub const MAX_SHORT_TEXT_LEN: usize = 100;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        )));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value {
        if v.len() > max_len {
            return Err(AppError::validation(format!(
                "{field} is too long ({} chars, max {max_len})",
                v.len()
            )));
        }
    }
    Ok(())
}
