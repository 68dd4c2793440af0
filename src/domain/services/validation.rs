use chrono::NaiveDate;

use crate::domain::models::participation::ParticipationStatus;
use crate::error::AppError;

pub const MAX_HOURS: f64 = 24.0;

const URGENCY_LEVELS: [&str; 3] = ["Low", "Medium", "High"];

/// Path parameters arrive as strings; ids must be positive integers before
/// any storage access happens.
pub fn parse_entity_id(raw: &str, label: &str) -> Result<i64, AppError> {
    match raw.trim().parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::Validation(format!(
            "Invalid {} ID: must be a positive integer",
            label
        ))),
    }
}

pub fn require_positive_id(id: i64, label: &str) -> Result<i64, AppError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(AppError::Validation(format!(
            "Invalid {} ID: must be a positive integer",
            label
        )))
    }
}

pub fn validate_hours(hours: f64) -> Result<f64, AppError> {
    if !hours.is_finite() || !(0.0..=MAX_HOURS).contains(&hours) {
        return Err(AppError::Validation(format!(
            "Hours volunteered must be between 0 and {}",
            MAX_HOURS
        )));
    }
    Ok(hours)
}

pub fn validate_status(raw: &str) -> Result<ParticipationStatus, AppError> {
    ParticipationStatus::parse(raw).ok_or_else(|| {
        AppError::Validation(format!("Invalid participation status: {}", raw))
    })
}

pub fn validate_urgency(raw: &str) -> Result<String, AppError> {
    if URGENCY_LEVELS.contains(&raw) {
        Ok(raw.to_string())
    } else {
        Err(AppError::Validation(format!(
            "Invalid urgency level: {} (expected Low, Medium or High)",
            raw
        )))
    }
}

pub fn parse_date(raw: &str, label: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::Validation(format!("Invalid {} date: expected YYYY-MM-DD", label))
    })
}
