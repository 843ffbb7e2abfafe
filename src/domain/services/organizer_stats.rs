use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::event::Event;
use crate::domain::models::profile::OrganizerProfile;

/// Seats every seeded event opened with; attendance is inferred from what is left.
pub const ASSUMED_CAPACITY: u32 = 150;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostedEvent {
    pub event: Event,
    pub attendees: u32,
    pub is_past: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizerStats {
    pub total_events: usize,
    pub total_attendees: u32,
    pub total_credits_issued: f32,
    pub upcoming_events: usize,
}

pub fn attendee_count(event: &Event) -> u32 {
    ASSUMED_CAPACITY.saturating_sub(event.seats_left.unwrap_or(0))
}

pub fn hosted_events(catalog: &[Event], profile: &OrganizerProfile, today: NaiveDate) -> Vec<HostedEvent> {
    catalog
        .iter()
        .filter(|e| profile.hosted_as.iter().any(|name| *name == e.organizer.name))
        .map(|e| HostedEvent {
            attendees: attendee_count(e),
            is_past: e.calendar_date().is_some_and(|d| d <= today),
            event: e.clone(),
        })
        .collect()
}

pub fn organizer_stats(hosted: &[HostedEvent], today: NaiveDate) -> OrganizerStats {
    OrganizerStats {
        total_events: hosted.len(),
        total_attendees: hosted.iter().map(|h| h.attendees).sum(),
        total_credits_issued: hosted.iter().filter_map(|h| h.event.estimated_credits).sum(),
        upcoming_events: hosted
            .iter()
            .filter(|h| h.event.calendar_date().is_some_and(|d| d > today))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::seed::{seed_events, seed_organizer_profile};

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_hosted_events_by_name() {
        let hosted = hosted_events(&seed_events(), &seed_organizer_profile(), day("2025-11-01"));
        let ids: Vec<&str> = hosted.iter().map(|h| h.event.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(hosted[1].attendees, 147);
    }

    #[test]
    fn test_stats_before_and_after_season() {
        let profile = seed_organizer_profile();
        let catalog = seed_events();

        let early = day("2025-11-01");
        let stats = organizer_stats(&hosted_events(&catalog, &profile, early), early);
        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.total_attendees, 135 + 147 + 100);
        assert!((stats.total_credits_issued - 14.0).abs() < f32::EPSILON);
        assert_eq!(stats.upcoming_events, 3);

        let mid = day("2025-11-22");
        let hosted = hosted_events(&catalog, &profile, mid);
        assert_eq!(organizer_stats(&hosted, mid).upcoming_events, 1);
        assert!(hosted[0].is_past);
        assert!(hosted[1].is_past, "an event dated today is no longer upcoming");
        assert!(!hosted[2].is_past);
    }

    #[test]
    fn test_missing_seats_counts_as_full_house() {
        let mut event = seed_events()[0].clone();
        event.seats_left = None;
        assert_eq!(attendee_count(&event), ASSUMED_CAPACITY);
        event.seats_left = Some(400);
        assert_eq!(attendee_count(&event), 0);
    }
}
