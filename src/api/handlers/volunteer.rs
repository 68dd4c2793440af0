use axum::{extract::{Path, State}, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::api::dtos::requests::{CreateVolunteerRequest, UpdateVolunteerRequest};
use crate::api::dtos::responses::ApiResponse;
use crate::domain::models::{join_list, volunteer::{NewVolunteer, Volunteer}};
use crate::domain::services::validation::{parse_date, parse_entity_id};
use crate::error::AppError;
use crate::state::AppState;

fn volunteer_json(v: &Volunteer) -> serde_json::Value {
    json!({
        "id": v.id,
        "name": v.name,
        "email": v.email,
        "skills": v.skill_list(),
        "location": v.location,
        "availability": v.availability_dates(),
        "created_at": v.created_at,
    })
}

fn encode_availability(dates: &[String]) -> Result<String, AppError> {
    let mut parsed = Vec::with_capacity(dates.len());
    for raw in dates {
        parsed.push(parse_date(raw, "availability")?.to_string());
    }
    Ok(parsed.join(","))
}

pub async fn create_volunteer(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateVolunteerRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.name.trim().is_empty() {
        return Err(AppError::Validation("Volunteer name must not be empty".into()));
    }
    if payload.email.trim().is_empty() {
        return Err(AppError::Validation("Volunteer email must not be empty".into()));
    }

    let volunteer = NewVolunteer::new(
        payload.name.trim().to_string(),
        payload.email.trim().to_string(),
        join_list(&payload.skills),
        payload.location.trim().to_string(),
        encode_availability(&payload.availability)?,
    );

    let created = state.volunteer_repo.create(&volunteer).await?;
    info!("Created volunteer profile: {}", created.id);

    Ok(Json(ApiResponse::ok("Volunteer profile created", volunteer_json(&created))))
}

pub async fn list_volunteers(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let volunteers = state.volunteer_repo.list().await?;
    let data: Vec<_> = volunteers.iter().map(volunteer_json).collect();
    Ok(Json(ApiResponse::ok("Volunteers retrieved", data)))
}

pub async fn get_volunteer(
    State(state): State<Arc<AppState>>,
    Path(volunteer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let volunteer_id = parse_entity_id(&volunteer_id, "volunteer")?;
    let volunteer = state.volunteer_repo.find_by_id(volunteer_id).await?
        .ok_or(AppError::NotFound("Volunteer not found".into()))?;
    Ok(Json(ApiResponse::ok("Volunteer retrieved", volunteer_json(&volunteer))))
}

pub async fn update_volunteer(
    State(state): State<Arc<AppState>>,
    Path(volunteer_id): Path<String>,
    Json(payload): Json<UpdateVolunteerRequest>,
) -> Result<impl IntoResponse, AppError> {
    let volunteer_id = parse_entity_id(&volunteer_id, "volunteer")?;
    let mut volunteer = state.volunteer_repo.find_by_id(volunteer_id).await?
        .ok_or(AppError::NotFound("Volunteer not found".into()))?;

    if let Some(name) = payload.name {
        if name.trim().is_empty() {
            return Err(AppError::Validation("Volunteer name must not be empty".into()));
        }
        volunteer.name = name.trim().to_string();
    }
    if let Some(email) = payload.email {
        if email.trim().is_empty() {
            return Err(AppError::Validation("Volunteer email must not be empty".into()));
        }
        volunteer.email = email.trim().to_string();
    }
    if let Some(skills) = payload.skills {
        volunteer.skills = join_list(&skills);
    }
    if let Some(location) = payload.location {
        volunteer.location = location.trim().to_string();
    }
    if let Some(availability) = payload.availability {
        volunteer.availability = encode_availability(&availability)?;
    }

    let updated = state.volunteer_repo.update(&volunteer).await?;
    info!("Updated volunteer profile: {}", updated.id);
    Ok(Json(ApiResponse::ok("Volunteer profile updated", volunteer_json(&updated))))
}

pub async fn delete_volunteer(
    State(state): State<Arc<AppState>>,
    Path(volunteer_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let volunteer_id = parse_entity_id(&volunteer_id, "volunteer")?;
    state.volunteer_repo.delete(volunteer_id).await?;
    info!("Deleted volunteer profile: {}", volunteer_id);
    Ok(Json(ApiResponse::ok("Volunteer profile deleted", json!({ "status": "deleted" }))))
}
