use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use super::split_list;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub required_skills: String,
    /// Low | Medium | High. Display only, never scored.
    pub urgency: String,
    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn skill_list(&self) -> Vec<String> {
        split_list(&self.required_skills)
    }
}

pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub location: String,
    pub required_skills: String,
    pub urgency: String,
    pub created_at: DateTime<Utc>,
}

impl NewEvent {
    pub fn new(
        title: String,
        description: String,
        date: NaiveDate,
        location: String,
        required_skills: String,
        urgency: String,
    ) -> Self {
        Self {
            title,
            description,
            date,
            location,
            required_skills,
            urgency,
            created_at: Utc::now(),
        }
    }
}
