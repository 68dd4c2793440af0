mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

async fn seed_registrations(app: &TestApp, count: usize) -> i64 {
    let volunteer_id = create_volunteer(app, "Alice", &[], "", &[]).await;
    for i in 0..count {
        let event_id = create_event(
            app,
            &format!("Event {}", i + 1),
            &days_ahead(i as i64 + 1),
            &[],
            "",
        ).await;
        let res = register(app, volunteer_id, event_id).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
    volunteer_id
}

#[tokio::test]
async fn test_pagination_envelope() {
    let app = TestApp::new().await;
    seed_registrations(&app, 25).await;

    let body = parse_body(send_get(&app, "/api/v1/history?page=2&limit=10").await).await;
    assert_eq!(body["data"]["records"].as_array().unwrap().len(), 10);
    let pagination = body["data"]["pagination"].clone();
    assert_eq!(pagination["page"], 2);
    assert_eq!(pagination["limit"], 10);
    assert_eq!(pagination["total"], 25);
    assert_eq!(pagination["totalPages"], 3);

    // The last page holds the 5-row remainder.
    let body = parse_body(send_get(&app, "/api/v1/history?page=3&limit=10").await).await;
    assert_eq!(body["data"]["records"].as_array().unwrap().len(), 5);

    let body = parse_body(send_get(&app, "/api/v1/history?page=4&limit=10").await).await;
    assert_eq!(body["data"]["records"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_pagination_clamping() {
    let app = TestApp::new().await;
    seed_registrations(&app, 3).await;

    let body = parse_body(send_get(&app, "/api/v1/history?page=0&limit=500").await).await;
    let pagination = body["data"]["pagination"].clone();
    assert_eq!(pagination["page"], 1);
    assert_eq!(pagination["limit"], 100);
    assert_eq!(pagination["totalPages"], 1);

    let body = parse_body(send_get(&app, "/api/v1/history?limit=0").await).await;
    assert_eq!(body["data"]["pagination"]["limit"], 1);
    assert_eq!(body["data"]["records"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_empty_history_page() {
    let app = TestApp::new().await;

    let body = parse_body(send_get(&app, "/api/v1/history").await).await;
    assert_eq!(body["data"]["records"].as_array().unwrap().len(), 0);
    assert_eq!(body["data"]["pagination"]["total"], 0);
    assert_eq!(body["data"]["pagination"]["totalPages"], 0);
}

#[tokio::test]
async fn test_recent_listing_is_bounded_and_newest_first() {
    let app = TestApp::new().await;
    seed_registrations(&app, 5).await;

    let body = parse_body(send_get(&app, "/api/v1/history/recent?limit=2").await).await;
    let records = body["data"].as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert!(records[0]["id"].as_i64().unwrap() > records[1]["id"].as_i64().unwrap());
}

#[tokio::test]
async fn test_platform_stats() {
    let app = TestApp::new().await;
    let v1 = create_volunteer(&app, "Alice", &[], "", &[]).await;
    let v2 = create_volunteer(&app, "Bob", &[], "", &[]).await;
    let e1 = create_event(&app, "Event A", &days_ahead(1), &[], "").await;
    let e2 = create_event(&app, "Event B", &days_ahead(2), &[], "").await;

    for (v, e) in [(v1, e1), (v1, e2), (v2, e1)] {
        let res = register(&app, v, e).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    // Log hours on two of the three registrations.
    let history = parse_body(send_get(&app, &format!("/api/v1/history/volunteer/{}", v1)).await).await;
    for record in history["data"].as_array().unwrap() {
        let id = record["id"].as_i64().unwrap();
        let res = send_json(&app, "PUT", &format!("/api/v1/history/{}", id),
            json!({ "participation_status": "completed", "hours_volunteered": 4.0 })).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let body = parse_body(send_get(&app, "/api/v1/history/platform-stats").await).await;
    let stats = body["data"].clone();
    assert_eq!(stats["totalVolunteers"], 2);
    assert_eq!(stats["totalEvents"], 2);
    assert_eq!(stats["totalHoursVolunteered"], 8.0);
    assert_eq!(stats["recentRegistrations"], 3);
}
