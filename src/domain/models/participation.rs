use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;

use super::split_list;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ParticipationRecord {
    pub id: i64,
    pub volunteer_id: i64,
    pub event_id: i64,
    pub participation_status: String,
    pub hours_volunteered: f64,
    pub participation_date: DateTime<Utc>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

pub struct NewParticipation {
    pub volunteer_id: i64,
    pub event_id: i64,
    pub participation_status: String,
    pub participation_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl NewParticipation {
    pub fn registered(volunteer_id: i64, event_id: i64) -> Self {
        let now = Utc::now();
        Self {
            volunteer_id,
            event_id,
            participation_status: ParticipationStatus::Registered.as_str().to_string(),
            participation_date: now,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipationStatus {
    Registered,
    Attended,
    Completed,
    Cancelled,
    NoShow,
}

impl ParticipationStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "registered" => Some(Self::Registered),
            "attended" => Some(Self::Attended),
            "completed" => Some(Self::Completed),
            "cancelled" => Some(Self::Cancelled),
            "no_show" => Some(Self::NoShow),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registered => "registered",
            Self::Attended => "attended",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }

    /// Both completed and attended count towards completion statistics.
    pub fn counts_as_completed(&self) -> bool {
        matches!(self, Self::Completed | Self::Attended)
    }
}

/// Raw joined row as fetched by the history queries. The volunteer/event
/// side of the join may be absent (no foreign keys on the history table).
#[derive(Debug, FromRow)]
pub struct HistoryRow {
    pub id: i64,
    pub volunteer_id: i64,
    pub event_id: i64,
    pub participation_status: String,
    pub hours_volunteered: f64,
    pub participation_date: DateTime<Utc>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
    pub volunteer_name: Option<String>,
    pub event_title: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub event_location: Option<String>,
    pub event_skills: Option<String>,
}

/// Participation record enriched with volunteer and event metadata.
#[derive(Debug, Serialize, Clone)]
pub struct HistoryRecord {
    pub id: i64,
    pub volunteer_id: i64,
    pub volunteer_name: String,
    pub event_id: i64,
    pub event_title: String,
    pub event_date: Option<NaiveDate>,
    pub event_location: String,
    pub event_skills: Vec<String>,
    pub participation_status: String,
    pub hours_volunteered: f64,
    pub participation_date: DateTime<Utc>,
    pub feedback: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<HistoryRow> for HistoryRecord {
    fn from(row: HistoryRow) -> Self {
        Self {
            id: row.id,
            volunteer_id: row.volunteer_id,
            volunteer_name: row
                .volunteer_name
                .unwrap_or_else(|| format!("Volunteer {}", row.volunteer_id)),
            event_id: row.event_id,
            event_title: row
                .event_title
                .unwrap_or_else(|| format!("Event {}", row.event_id)),
            event_date: row.event_date,
            event_location: row.event_location.unwrap_or_default(),
            event_skills: row.event_skills.as_deref().map(split_list).unwrap_or_default(),
            participation_status: row.participation_status,
            hours_volunteered: row.hours_volunteered,
            participation_date: row.participation_date,
            feedback: row.feedback,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerStats {
    pub total_events: i64,
    pub completed_events: i64,
    pub total_hours: f64,
    pub average_hours: f64,
    pub participation_rate: f64,
    pub skills_used: Vec<String>,
}
