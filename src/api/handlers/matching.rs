use axum::{extract::{Path, State}, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::MatchRequest;
use crate::api::dtos::responses::ApiResponse;
use crate::domain::models::participation::NewParticipation;
use crate::domain::services::matching::{rank_matches, score_match};
use crate::domain::services::validation::{parse_entity_id, require_positive_id};
use crate::error::AppError;
use crate::state::AppState;

pub async fn rank_event_volunteers(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event_id = parse_entity_id(&event_id, "event")?;
    let event = state.event_repo.find_by_id(event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    let volunteers = state.volunteer_repo.list().await?;
    let matches = rank_matches(&volunteers, &event);

    Ok(Json(ApiResponse::ok("Matching volunteers ranked", matches)))
}

pub async fn create_match(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MatchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let volunteer_id = require_positive_id(payload.volunteer_id, "volunteer")?;
    let event_id = require_positive_id(payload.event_id, "event")?;

    let volunteer = state.volunteer_repo.find_by_id(volunteer_id).await?
        .ok_or(AppError::NotFound("Volunteer not found".into()))?;
    let event = state.event_repo.find_by_id(event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if state.history_repo.find_by_pair(volunteer_id, event_id).await?.is_some() {
        return Err(AppError::Conflict("Volunteer is already registered for this event".into()));
    }

    let result = score_match(&volunteer, &event);
    let record = state.history_repo
        .create(&NewParticipation::registered(volunteer.id, event.id))
        .await?;

    info!(
        "Matched volunteer {} to event {} (score {:.2})",
        volunteer.id, event.id, result.match_score
    );

    Ok(Json(ApiResponse::ok(
        "Volunteer matched to event",
        json!({ "record": record, "match": result }),
    )))
}
