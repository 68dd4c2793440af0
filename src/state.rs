use std::sync::Arc;
use crate::domain::ports::{EventRepository, HistoryRepository, VolunteerRepository};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub volunteer_repo: Arc<dyn VolunteerRepository>,
    pub event_repo: Arc<dyn EventRepository>,
    pub history_repo: Arc<dyn HistoryRepository>,
}
