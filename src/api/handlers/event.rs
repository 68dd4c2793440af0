use axum::{extract::{Path, State}, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateEventRequest, UpdateEventRequest};
use crate::api::dtos::responses::ApiResponse;
use crate::domain::models::{event::{Event, NewEvent}, join_list};
use crate::domain::services::validation::{parse_date, parse_entity_id, validate_urgency};
use crate::error::AppError;
use crate::state::AppState;

fn event_json(e: &Event) -> serde_json::Value {
    json!({
        "id": e.id,
        "title": e.title,
        "description": e.description,
        "date": e.date,
        "location": e.location,
        "required_skills": e.skill_list(),
        "urgency": e.urgency,
        "created_at": e.created_at,
    })
}

pub async fn create_event(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(AppError::Validation("Event title must not be empty".into()));
    }
    let date = parse_date(&payload.date, "event")?;
    let urgency = match payload.urgency {
        Some(raw) => validate_urgency(&raw)?,
        None => "Medium".to_string(),
    };

    let event = NewEvent::new(
        payload.title.trim().to_string(),
        payload.description,
        date,
        payload.location.trim().to_string(),
        join_list(&payload.required_skills),
        urgency,
    );

    let created = state.event_repo.create(&event).await?;
    info!("Created event: {}", created.id);

    Ok(Json(ApiResponse::ok("Event created", event_json(&created))))
}

pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list().await?;
    let data: Vec<_> = events.iter().map(event_json).collect();
    Ok(Json(ApiResponse::ok("Events retrieved", data)))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event_id = parse_entity_id(&event_id, "event")?;
    let event = state.event_repo.find_by_id(event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;
    Ok(Json(ApiResponse::ok("Event retrieved", event_json(&event))))
}

pub async fn update_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
    Json(payload): Json<UpdateEventRequest>,
) -> Result<impl IntoResponse, AppError> {
    let event_id = parse_entity_id(&event_id, "event")?;
    let mut event = state.event_repo.find_by_id(event_id).await?
        .ok_or(AppError::NotFound("Event not found".into()))?;

    if let Some(title) = payload.title {
        if title.trim().is_empty() {
            return Err(AppError::Validation("Event title must not be empty".into()));
        }
        event.title = title.trim().to_string();
    }
    if let Some(description) = payload.description {
        event.description = description;
    }
    if let Some(date) = payload.date {
        event.date = parse_date(&date, "event")?;
    }
    if let Some(location) = payload.location {
        event.location = location.trim().to_string();
    }
    if let Some(required_skills) = payload.required_skills {
        event.required_skills = join_list(&required_skills);
    }
    if let Some(urgency) = payload.urgency {
        event.urgency = validate_urgency(&urgency)?;
    }

    let updated = state.event_repo.update(&event).await?;
    info!("Updated event: {}", updated.id);
    Ok(Json(ApiResponse::ok("Event updated", event_json(&updated))))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    Path(event_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let event_id = parse_entity_id(&event_id, "event")?;
    state.event_repo.delete(event_id).await?;
    info!("Deleted event: {}", event_id);
    Ok(Json(ApiResponse::ok("Event deleted", json!({ "status": "deleted" }))))
}
