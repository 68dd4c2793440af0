use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use super::split_list;

/// Skills and availability are stored as comma-delimited columns and split
/// into lists at the boundary.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Volunteer {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub skills: String,
    pub location: String,
    pub availability: String,
    pub created_at: DateTime<Utc>,
}

impl Volunteer {
    pub fn skill_list(&self) -> Vec<String> {
        split_list(&self.skills)
    }

    pub fn availability_dates(&self) -> Vec<NaiveDate> {
        split_list(&self.availability)
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect()
    }
}

pub struct NewVolunteer {
    pub name: String,
    pub email: String,
    pub skills: String,
    pub location: String,
    pub availability: String,
    pub created_at: DateTime<Utc>,
}

impl NewVolunteer {
    pub fn new(name: String, email: String, skills: String, location: String, availability: String) -> Self {
        Self {
            name,
            email,
            skills,
            location,
            availability,
            created_at: Utc::now(),
        }
    }
}
