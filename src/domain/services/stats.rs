use std::collections::BTreeSet;

use crate::domain::models::participation::{HistoryRecord, ParticipationStatus, VolunteerStats};

/// Reduces a volunteer's history into aggregate statistics. Records with
/// status "completed" or "attended" both count as completed events, and
/// only those contribute to the skills-used set.
pub fn compute_stats(history: &[HistoryRecord]) -> VolunteerStats {
    let total_events = history.len() as i64;
    let total_hours: f64 = history.iter().map(|h| h.hours_volunteered).sum();

    let completed: Vec<&HistoryRecord> = history
        .iter()
        .filter(|h| {
            ParticipationStatus::parse(&h.participation_status)
                .is_some_and(|s| s.counts_as_completed())
        })
        .collect();
    let completed_events = completed.len() as i64;

    let skills_used: BTreeSet<String> = completed
        .iter()
        .flat_map(|h| h.event_skills.iter().cloned())
        .collect();

    let (average_hours, participation_rate) = if total_events > 0 {
        (
            round1(total_hours / total_events as f64),
            round1(completed_events as f64 / total_events as f64 * 100.0),
        )
    } else {
        (0.0, 0.0)
    };

    VolunteerStats {
        total_events,
        completed_events,
        total_hours: round2(total_hours),
        average_hours,
        participation_rate,
        skills_used: skills_used.into_iter().collect(),
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(status: &str, hours: f64, skills: &[&str]) -> HistoryRecord {
        HistoryRecord {
            id: 1,
            volunteer_id: 1,
            volunteer_name: "Alice".to_string(),
            event_id: 1,
            event_title: "Cleanup".to_string(),
            event_date: None,
            event_location: String::new(),
            event_skills: skills.iter().map(|s| s.to_string()).collect(),
            participation_status: status.to_string(),
            hours_volunteered: hours,
            participation_date: Utc::now(),
            feedback: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_history_yields_all_zero_stats() {
        let stats = compute_stats(&[]);
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.completed_events, 0);
        assert_eq!(stats.total_hours, 0.0);
        assert_eq!(stats.average_hours, 0.0);
        assert_eq!(stats.participation_rate, 0.0);
        assert!(stats.skills_used.is_empty());
    }

    #[test]
    fn attended_and_completed_both_count() {
        let history = vec![
            record("completed", 4.0, &["cooking"]),
            record("attended", 2.5, &["driving"]),
            record("registered", 0.0, &["gardening"]),
        ];
        let stats = compute_stats(&history);
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.completed_events, 2);
        assert!(stats.completed_events <= stats.total_events);
        assert!((stats.total_hours - 6.5).abs() < 1e-9);
        assert!((stats.average_hours - 2.2).abs() < 1e-9);
        assert!((stats.participation_rate - 66.7).abs() < 1e-9);
        assert_eq!(stats.skills_used, vec!["cooking", "driving"]);
    }

    #[test]
    fn totals_round_to_two_and_one_decimals() {
        let history = vec![
            record("completed", 1.25, &[]),
            record("completed", 2.125, &[]),
        ];
        let stats = compute_stats(&history);
        assert!((stats.total_hours - 3.38).abs() < 1e-9);
        assert!((stats.average_hours - 1.7).abs() < 1e-9);
        assert!((stats.participation_rate - 100.0).abs() < 1e-9);
    }

    #[test]
    fn cancelled_and_no_show_do_not_count() {
        let history = vec![
            record("cancelled", 0.0, &["cooking"]),
            record("no_show", 0.0, &["driving"]),
        ];
        let stats = compute_stats(&history);
        assert_eq!(stats.completed_events, 0);
        assert_eq!(stats.participation_rate, 0.0);
        assert!(stats.skills_used.is_empty());
    }
}
