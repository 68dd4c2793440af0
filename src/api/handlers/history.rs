use axum::{extract::{Path, Query, State}, response::IntoResponse, Json};
use chrono::{Duration, Utc};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{PageQuery, RecentQuery, RegisterRequest, UpdateParticipationRequest};
use crate::api::dtos::responses::{ApiResponse, Pagination, PlatformStats};
use crate::domain::models::participation::NewParticipation;
use crate::domain::services::stats::compute_stats;
use crate::domain::services::validation::{
    parse_entity_id, require_positive_id, validate_hours, validate_status,
};
use crate::error::AppError;
use crate::state::AppState;

const DEFAULT_PAGE_LIMIT: i64 = 20;
const MAX_PAGE_LIMIT: i64 = 100;

pub async fn get_volunteer_history(
    State(state): State<Arc<AppState>>,
    Path(volunteer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let volunteer_id = parse_entity_id(&volunteer_id, "volunteer")?;
    let records = state.history_repo.list_by_volunteer(volunteer_id).await?;
    Ok(Json(ApiResponse::ok("Volunteer history retrieved", records)))
}

pub async fn get_volunteer_stats(
    State(state): State<Arc<AppState>>,
    Path(volunteer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let volunteer_id = parse_entity_id(&volunteer_id, "volunteer")?;
    let records = state.history_repo.list_by_volunteer(volunteer_id).await?;
    let stats = compute_stats(&records);
    Ok(Json(ApiResponse::ok("Volunteer statistics retrieved", stats)))
}

pub async fn register_for_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AppError> {
    let volunteer_id = require_positive_id(payload.volunteer_id, "volunteer")?;
    let event_id = require_positive_id(payload.event_id, "event")?;

    let volunteer = state.volunteer_repo.find_by_id(volunteer_id).await?
        .ok_or(AppError::NotFound("Volunteer not found".into()))?;
    let event = state.event_repo.find_by_id(event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    // Read-then-insert is racy; the UNIQUE(volunteer_id, event_id) index is
    // the actual guard and maps to the same conflict response.
    if state.history_repo.find_by_pair(volunteer_id, event_id).await?.is_some() {
        return Err(AppError::Conflict("Volunteer is already registered for this event".into()));
    }

    let record = state.history_repo
        .create(&NewParticipation::registered(volunteer.id, event.id))
        .await?;

    info!("Volunteer {} registered for event {}", volunteer.id, event.id);
    Ok(Json(ApiResponse::ok("Volunteer registered for event", record)))
}

pub async fn update_participation(
    State(state): State<Arc<AppState>>,
    Path(history_id): Path<String>,
    Json(payload): Json<UpdateParticipationRequest>,
) -> Result<impl IntoResponse, AppError> {
    let history_id = parse_entity_id(&history_id, "history record")?;

    if payload.is_empty() {
        return Err(AppError::Validation("No valid fields to update".into()));
    }

    let mut record = state.history_repo.find_by_id(history_id).await?
        .ok_or(AppError::NotFound("History record not found".into()))?;

    if let Some(status) = &payload.participation_status {
        record.participation_status = validate_status(status)?.as_str().to_string();
    }
    if let Some(hours) = payload.hours_volunteered {
        record.hours_volunteered = validate_hours(hours)?;
    }
    if let Some(feedback) = payload.feedback {
        record.feedback = Some(feedback);
    }

    let updated = state.history_repo.update(&record).await?;
    info!("Updated participation record: {}", updated.id);
    Ok(Json(ApiResponse::ok("Participation record updated", updated)))
}

pub async fn delete_record(
    State(state): State<Arc<AppState>>,
    Path(history_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let history_id = parse_entity_id(&history_id, "history record")?;
    state.history_repo.delete(history_id).await?;
    info!("Deleted participation record: {}", history_id);
    Ok(Json(ApiResponse::ok("History record deleted", json!({ "status": "deleted" }))))
}

pub async fn list_event_volunteers(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event_id = parse_entity_id(&event_id, "event")?;
    state.event_repo.find_by_id(event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let records = state.history_repo.list_by_event(event_id).await?;
    Ok(Json(ApiResponse::ok("Event volunteers retrieved", records)))
}

pub async fn list_history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PageQuery>,
) -> Result<impl IntoResponse, AppError> {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT).clamp(1, MAX_PAGE_LIMIT);

    let total = state.history_repo.count().await?;
    let records = state.history_repo.list_page(limit, (page - 1) * limit).await?;
    let total_pages = if total == 0 { 0 } else { (total + limit - 1) / limit };

    Ok(Json(ApiResponse::ok(
        "History retrieved",
        json!({
            "records": records,
            "pagination": Pagination { page, limit, total, total_pages },
        }),
    )))
}

pub async fn list_recent(
    State(state): State<Arc<AppState>>,
    Query(query): Query<RecentQuery>,
) -> Result<impl IntoResponse, AppError> {
    let limit = query.limit.unwrap_or(10).clamp(1, MAX_PAGE_LIMIT);
    let records = state.history_repo.list_recent(limit).await?;
    Ok(Json(ApiResponse::ok("Recent activity retrieved", records)))
}

pub async fn platform_stats(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let total_volunteers = state.volunteer_repo.count().await?;
    let total_events = state.event_repo.count().await?;
    let total_hours = state.history_repo.sum_positive_hours().await?;
    let recent_registrations = state.history_repo
        .count_created_since(Utc::now() - Duration::days(7))
        .await?;

    let stats = PlatformStats {
        total_volunteers,
        total_events,
        total_hours_volunteered: (total_hours * 100.0).round() / 100.0,
        recent_registrations,
    };

    Ok(Json(ApiResponse::ok("Platform statistics retrieved", stats)))
}
