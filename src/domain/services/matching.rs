use serde::Serialize;
use std::cmp::Ordering;

use crate::domain::models::event::Event;
use crate::domain::models::volunteer::Volunteer;

const SKILL_WEIGHT: f64 = 0.5;
const LOCATION_WEIGHT: f64 = 0.3;
const AVAILABILITY_WEIGHT: f64 = 0.2;

#[derive(Debug, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub volunteer_id: i64,
    pub volunteer_name: String,
    pub event_id: i64,
    pub event_title: String,
    pub match_score: f64,
    pub matching_skills: Vec<String>,
    pub reason: String,
}

/// Weighted match score in [0, 1]: skill overlap up to 0.5, location match
/// up to 0.3, availability on the event date 0.2.
pub fn score_match(volunteer: &Volunteer, event: &Event) -> MatchResult {
    let required = event.skill_list();
    let offered: Vec<String> = volunteer
        .skill_list()
        .iter()
        .map(|s| s.to_ascii_lowercase())
        .collect();

    let matching_skills: Vec<String> = required
        .iter()
        .filter(|s| offered.contains(&s.to_ascii_lowercase()))
        .cloned()
        .collect();

    // An event with no skill requirements does not penalize anyone.
    let skill_component = if required.is_empty() {
        SKILL_WEIGHT
    } else {
        SKILL_WEIGHT * matching_skills.len() as f64 / required.len() as f64
    };

    let location_factor = location_affinity(&volunteer.location, &event.location);
    let location_component = LOCATION_WEIGHT * location_factor;

    let available = volunteer.availability_dates().contains(&event.date);
    let availability_component = if available { AVAILABILITY_WEIGHT } else { 0.0 };

    let score = (skill_component + location_component + availability_component).min(1.0);

    let mut reasons = Vec::new();
    if required.is_empty() {
        reasons.push("no specific skills required".to_string());
    } else if !matching_skills.is_empty() {
        reasons.push(format!(
            "{} of {} required skills",
            matching_skills.len(),
            required.len()
        ));
    }
    if location_factor >= 1.0 {
        reasons.push("location match".to_string());
    } else if location_factor > 0.0 {
        reasons.push("partial location match".to_string());
    }
    if available {
        reasons.push("available on event date".to_string());
    }
    let reason = if reasons.is_empty() {
        "low compatibility".to_string()
    } else {
        reasons.join(", ")
    };

    MatchResult {
        volunteer_id: volunteer.id,
        volunteer_name: volunteer.name.clone(),
        event_id: event.id,
        event_title: event.title.clone(),
        match_score: score,
        matching_skills,
        reason,
    }
}

/// Exact match (after trim + lowercase) scores 1.0, one string containing
/// the other (city inside a full address) scores 0.5, anything else 0.
fn location_affinity(a: &str, b: &str) -> f64 {
    let a = a.trim().to_ascii_lowercase();
    let b = b.trim().to_ascii_lowercase();
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    if a == b {
        return 1.0;
    }
    if a.contains(&b) || b.contains(&a) {
        return 0.5;
    }
    0.0
}

/// Ranks all candidates for an event, best score first. Ties are broken by
/// ascending volunteer id so the order is deterministic.
pub fn rank_matches(volunteers: &[Volunteer], event: &Event) -> Vec<MatchResult> {
    let mut results: Vec<MatchResult> = volunteers.iter().map(|v| score_match(v, event)).collect();
    results.sort_by(|a, b| {
        b.match_score
            .partial_cmp(&a.match_score)
            .unwrap_or(Ordering::Equal)
            .then(a.volunteer_id.cmp(&b.volunteer_id))
    });
    results
}
