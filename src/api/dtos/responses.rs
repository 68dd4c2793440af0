use serde::Serialize;

/// Envelope shared by every endpoint: errors carry `success: false` and a
/// message, success responses add `data`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformStats {
    pub total_volunteers: i64,
    pub total_events: i64,
    pub total_hours_volunteered: f64,
    pub recent_registrations: i64,
}
