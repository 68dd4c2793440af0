use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateVolunteerRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub location: String,
    /// Dates in YYYY-MM-DD format.
    #[serde(default)]
    pub availability: Vec<String>,
}

#[derive(Deserialize)]
pub struct UpdateVolunteerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub skills: Option<Vec<String>>,
    pub location: Option<String>,
    pub availability: Option<Vec<String>>,
}

#[derive(Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub urgency: Option<String>,
}

#[derive(Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub required_skills: Option<Vec<String>>,
    pub urgency: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub volunteer_id: i64,
    pub event_id: i64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    pub volunteer_id: i64,
    pub event_id: i64,
}

/// Allow-listed participation update. Unknown JSON fields are silently
/// dropped by deserialization.
#[derive(Deserialize)]
pub struct UpdateParticipationRequest {
    pub participation_status: Option<String>,
    pub hours_volunteered: Option<f64>,
    pub feedback: Option<String>,
}

impl UpdateParticipationRequest {
    pub fn is_empty(&self) -> bool {
        self.participation_status.is_none()
            && self.hours_volunteered.is_none()
            && self.feedback.is_none()
    }
}

#[derive(Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct RecentQuery {
    pub limit: Option<i64>,
}
