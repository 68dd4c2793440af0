use volunthero_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_event_repo::SqliteEventRepo,
        sqlite_history_repo::SqliteHistoryRepo,
        sqlite_volunteer_repo::SqliteVolunteerRepo,
    },
    state::AppState,
};
use axum::{
    body::Body,
    http::Request,
    response::Response,
    Router,
};
use chrono::{Duration, Utc};
use serde_json::{json, Value};
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = Arc::new(AppState {
            config,
            volunteer_repo: Arc::new(SqliteVolunteerRepo::new(pool.clone())),
            event_repo: Arc::new(SqliteEventRepo::new(pool.clone())),
            history_repo: Arc::new(SqliteHistoryRepo::new(pool.clone())),
        });

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[allow(dead_code)]
pub async fn send_json(app: &TestApp, method: &str, uri: &str, body: Value) -> Response {
    app.router.clone().oneshot(
        Request::builder().method(method).uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string())).unwrap()
    ).await.unwrap()
}

#[allow(dead_code)]
pub async fn send_get(app: &TestApp, uri: &str) -> Response {
    app.router.clone().oneshot(
        Request::builder().method("GET").uri(uri)
            .body(Body::empty()).unwrap()
    ).await.unwrap()
}

#[allow(dead_code)]
pub async fn send_delete(app: &TestApp, uri: &str) -> Response {
    app.router.clone().oneshot(
        Request::builder().method("DELETE").uri(uri)
            .body(Body::empty()).unwrap()
    ).await.unwrap()
}

#[allow(dead_code)]
pub fn days_ahead(days: i64) -> String {
    (Utc::now() + Duration::days(days)).date_naive().to_string()
}

#[allow(dead_code)]
pub async fn create_volunteer(
    app: &TestApp,
    name: &str,
    skills: &[&str],
    location: &str,
    availability: &[&str],
) -> i64 {
    let payload = json!({
        "name": name,
        "email": format!("{}@example.org", name.to_lowercase().replace(' ', ".")),
        "skills": skills,
        "location": location,
        "availability": availability,
    });
    let res = send_json(app, "POST", "/api/v1/volunteers", payload).await;
    assert!(res.status().is_success(), "create_volunteer failed: {}", res.status());
    parse_body(res).await["data"]["id"].as_i64().unwrap()
}

#[allow(dead_code)]
pub async fn create_event(
    app: &TestApp,
    title: &str,
    date: &str,
    skills: &[&str],
    location: &str,
) -> i64 {
    let payload = json!({
        "title": title,
        "date": date,
        "required_skills": skills,
        "location": location,
    });
    let res = send_json(app, "POST", "/api/v1/events", payload).await;
    assert!(res.status().is_success(), "create_event failed: {}", res.status());
    parse_body(res).await["data"]["id"].as_i64().unwrap()
}

#[allow(dead_code)]
pub async fn register(app: &TestApp, volunteer_id: i64, event_id: i64) -> Response {
    send_json(
        app,
        "POST",
        "/api/v1/history/register",
        json!({ "volunteerId": volunteer_id, "eventId": event_id }),
    ).await
}
