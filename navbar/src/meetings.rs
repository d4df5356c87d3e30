//! Upcoming-meeting count shown next to the profile affordance.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AvailabilityStatus {
    Scheduled,
    Booked,
    Canceled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub username: String,
}

/// A calendar event as returned by the events endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub owner: String,
    #[serde(default)]
    pub participants: Vec<Participant>,
    pub status: AvailabilityStatus,
    /// Unix seconds.
    pub end_time: u64,
}

/// Count the meetings `username` takes part in that are still ahead.
///
/// An event counts when it has at least one participant, the user owns it or
/// participates in it, it is not canceled, and it ends at or after `now`.
pub fn meeting_count(events: &[Event], username: &str, now: u64) -> usize {
    events
        .iter()
        .filter(|e| !e.participants.is_empty())
        .filter(|e| e.owner == username || e.participants.iter().any(|p| p.username == username))
        .filter(|e| e.status != AvailabilityStatus::Canceled && e.end_time >= now)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(owner: &str, participants: &[&str], status: AvailabilityStatus, end_time: u64) -> Event {
        Event {
            id: format!("{}-{}", owner, end_time),
            owner: owner.to_string(),
            participants: participants
                .iter()
                .map(|p| Participant {
                    username: p.to_string(),
                })
                .collect(),
            status,
            end_time,
        }
    }

    #[test]
    fn test_meeting_count_filters() {
        let now = 1_000;
        let events = vec![
            event("jesse", &["kostya"], AvailabilityStatus::Booked, 2_000),
            event("kostya", &["jesse"], AvailabilityStatus::Booked, 1_000),
            // no participants
            event("jesse", &[], AvailabilityStatus::Scheduled, 2_000),
            // unrelated
            event("kostya", &["david"], AvailabilityStatus::Booked, 2_000),
            event("jesse", &["david"], AvailabilityStatus::Canceled, 2_000),
            // already over
            event("jesse", &["david"], AvailabilityStatus::Booked, 999),
        ];
        assert_eq!(meeting_count(&events, "jesse", now), 2);
    }

    #[test]
    fn test_event_json() {
        let json = r#"[{"id": "e1", "owner": "jesse", "participants": [{"username": "david"}], "status": "BOOKED", "end_time": 5}]"#;
        let events: Vec<Event> = serde_json::from_str(json).unwrap();
        assert_eq!(meeting_count(&events, "david", 5), 1);
    }
}
