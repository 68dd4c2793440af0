use crate::domain::models::{
    event::{Event, NewEvent},
    participation::{HistoryRecord, NewParticipation, ParticipationRecord},
    volunteer::{NewVolunteer, Volunteer},
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait VolunteerRepository: Send + Sync {
    async fn create(&self, volunteer: &NewVolunteer) -> Result<Volunteer, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Volunteer>, AppError>;
    async fn list(&self) -> Result<Vec<Volunteer>, AppError>;
    async fn update(&self, volunteer: &Volunteer) -> Result<Volunteer, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, event: &NewEvent) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError>;
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn update(&self, event: &Event) -> Result<Event, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}

#[async_trait]
pub trait HistoryRepository: Send + Sync {
    async fn create(&self, record: &NewParticipation) -> Result<ParticipationRecord, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<ParticipationRecord>, AppError>;
    async fn find_by_pair(&self, volunteer_id: i64, event_id: i64) -> Result<Option<ParticipationRecord>, AppError>;
    async fn list_by_volunteer(&self, volunteer_id: i64) -> Result<Vec<HistoryRecord>, AppError>;
    async fn list_by_event(&self, event_id: i64) -> Result<Vec<HistoryRecord>, AppError>;
    async fn list_page(&self, limit: i64, offset: i64) -> Result<Vec<HistoryRecord>, AppError>;
    async fn list_recent(&self, limit: i64) -> Result<Vec<HistoryRecord>, AppError>;
    async fn count(&self) -> Result<i64, AppError>;
    async fn update(&self, record: &ParticipationRecord) -> Result<ParticipationRecord, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn sum_positive_hours(&self) -> Result<f64, AppError>;
    async fn count_created_since(&self, since: DateTime<Utc>) -> Result<i64, AppError>;
}
