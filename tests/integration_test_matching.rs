mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

#[tokio::test]
async fn test_perfect_match_scores_above_ninety_percent() {
    let app = TestApp::new().await;
    let date = days_ahead(14);
    let volunteer_id = create_volunteer(
        &app, "Alice", &["cooking", "first aid"], "Springfield", &[&date],
    ).await;
    let event_id = create_event(
        &app, "Soup Kitchen", &date, &["cooking", "first aid"], "Springfield",
    ).await;

    let res = send_get(&app, &format!("/api/v1/matching/event/{}", event_id)).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let matches = body["data"].as_array().unwrap();
    assert_eq!(matches.len(), 1);

    let top = &matches[0];
    assert_eq!(top["volunteerId"], volunteer_id);
    assert!(top["matchScore"].as_f64().unwrap() > 0.9);
    assert_eq!(top["matchingSkills"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_disjoint_skills_capped_below_location_ceiling() {
    let app = TestApp::new().await;
    let date = days_ahead(15);
    create_volunteer(&app, "Bob", &["gardening"], "Springfield", &[&date]).await;
    let event_id = create_event(&app, "Kitchen Shift", &date, &["cooking", "driving"], "Springfield").await;

    let body = parse_body(send_get(&app, &format!("/api/v1/matching/event/{}", event_id)).await).await;
    let score = body["data"][0]["matchScore"].as_f64().unwrap();
    assert!(score > 0.0);
    assert!(score < 0.6);
    assert!(body["data"][0]["matchingSkills"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_partial_location_gives_partial_credit() {
    let app = TestApp::new().await;
    create_volunteer(&app, "Cara", &["gardening"], "Springfield", &[]).await;
    let event_id = create_event(
        &app, "Garden Day", &days_ahead(16), &["cooking"], "123 Main St, Springfield",
    ).await;

    let body = parse_body(send_get(&app, &format!("/api/v1/matching/event/{}", event_id)).await).await;
    let score = body["data"][0]["matchScore"].as_f64().unwrap();
    assert!(score > 0.0);
    assert!(score < 0.3);
    assert_eq!(body["data"][0]["reason"], "partial location match");
}

#[tokio::test]
async fn test_ranking_is_deterministic() {
    let app = TestApp::new().await;
    let date = days_ahead(17);
    let strong_a = create_volunteer(&app, "Dana", &["cooking"], "Springfield", &[&date]).await;
    let weak = create_volunteer(&app, "Eve", &[], "Elsewhere", &[]).await;
    let strong_b = create_volunteer(&app, "Finn", &["cooking"], "Springfield", &[&date]).await;
    let event_id = create_event(&app, "Soup Kitchen", &date, &["cooking"], "Springfield").await;

    let body = parse_body(send_get(&app, &format!("/api/v1/matching/event/{}", event_id)).await).await;
    let matches = body["data"].as_array().unwrap();
    assert_eq!(matches.len(), 3);

    // Equal scores fall back to ascending volunteer id.
    assert_eq!(matches[0]["volunteerId"], strong_a);
    assert_eq!(matches[1]["volunteerId"], strong_b);
    assert_eq!(matches[2]["volunteerId"], weak);
}

#[tokio::test]
async fn test_matching_missing_event() {
    let app = TestApp::new().await;

    let res = send_get(&app, "/api/v1/matching/event/9999").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_body(res).await["message"], "Event not found");

    let res = send_get(&app, "/api/v1/matching/event/zero").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_match_registers_volunteer() {
    let app = TestApp::new().await;
    let date = days_ahead(18);
    let volunteer_id = create_volunteer(&app, "Gil", &["driving"], "Springfield", &[&date]).await;
    let event_id = create_event(&app, "Delivery Run", &date, &["driving"], "Springfield").await;

    let res = send_json(&app, "POST", "/api/v1/matching",
        json!({ "volunteerId": volunteer_id, "eventId": event_id })).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["data"]["record"]["participation_status"], "registered");
    assert!(body["data"]["match"]["matchScore"].as_f64().unwrap() > 0.9);

    // Matching twice hits the duplicate-registration rule.
    let res = send_json(&app, "POST", "/api/v1/matching",
        json!({ "volunteerId": volunteer_id, "eventId": event_id })).await;
    assert_eq!(res.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_create_match_missing_volunteer() {
    let app = TestApp::new().await;
    let event_id = create_event(&app, "Food Drive", &days_ahead(19), &[], "").await;

    let res = send_json(&app, "POST", "/api/v1/matching",
        json!({ "volunteerId": 9999, "eventId": event_id })).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(parse_body(res).await["message"], "Volunteer not found");
}
