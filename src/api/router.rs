use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{event, health, history, matching, volunteer};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Volunteer profiles
        .route("/api/v1/volunteers", post(volunteer::create_volunteer).get(volunteer::list_volunteers))
        .route("/api/v1/volunteers/{volunteer_id}", get(volunteer::get_volunteer).put(volunteer::update_volunteer).delete(volunteer::delete_volunteer))

        // Events
        .route("/api/v1/events", post(event::create_event).get(event::list_events))
        .route("/api/v1/events/{event_id}", get(event::get_event).put(event::update_event).delete(event::delete_event))

        // Volunteer history
        .route("/api/v1/history", get(history::list_history))
        .route("/api/v1/history/recent", get(history::list_recent))
        .route("/api/v1/history/platform-stats", get(history::platform_stats))
        .route("/api/v1/history/register", post(history::register_for_event))
        .route("/api/v1/history/volunteer/{volunteer_id}", get(history::get_volunteer_history))
        .route("/api/v1/history/volunteer/{volunteer_id}/stats", get(history::get_volunteer_stats))
        .route("/api/v1/history/event/{event_id}/volunteers", get(history::list_event_volunteers))
        .route("/api/v1/history/{history_id}", put(history::update_participation).delete(history::delete_record))

        // Matching
        .route("/api/v1/matching/event/{event_id}", get(matching::rank_event_volunteers))
        .route("/api/v1/matching", post(matching::create_match))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
