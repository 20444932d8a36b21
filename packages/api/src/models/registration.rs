//! Registration records: a user's enrollment in one event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::{User, UserRef};

/// The event fields the backend embeds when it populates a registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, alias = "date")]
    pub date_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// An event relation: bare id or populated summary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum EventRef {
    Id(String),
    Populated(EventSummary),
}

impl EventRef {
    pub fn id(&self) -> &str {
        match self {
            EventRef::Id(id) => id,
            EventRef::Populated(event) => &event.id,
        }
    }

    pub fn summary(&self) -> Option<&EventSummary> {
        match self {
            EventRef::Id(_) => None,
            EventRef::Populated(event) => Some(event),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub event: Option<EventRef>,
    #[serde(default)]
    pub user: Option<UserRef>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Registration {
    pub fn event_id(&self) -> Option<&str> {
        self.event.as_ref().map(EventRef::id)
    }

    pub fn event_summary(&self) -> Option<&EventSummary> {
        self.event.as_ref().and_then(EventRef::summary)
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref().and_then(UserRef::user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_populated_event_registration() {
        let reg: Registration = serde_json::from_str(
            r#"{
                "_id": "r1",
                "user": "u1",
                "event": {
                    "_id": "e1",
                    "name": "Rust Meetup",
                    "description": "Monthly gathering",
                    "date": "2026-11-05T18:30:00.000Z",
                    "location": "Berlin"
                },
                "createdAt": "2026-10-01T09:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(reg.event_id(), Some("e1"));
        let summary = reg.event_summary().unwrap();
        assert_eq!(summary.name, "Rust Meetup");
        assert!(summary.date_time.is_some());
        assert!(summary.category.is_none());
        assert!(reg.user().is_none());
        assert!(reg.created_at.is_some());
    }

    #[test]
    fn test_populated_user_registration() {
        let reg: Registration = serde_json::from_str(
            r#"{"_id":"r2","event":"e1","user":{"_id":"u9","name":"Jane Doe","email":"jane@example.com"}}"#,
        )
        .unwrap();

        assert_eq!(reg.event_id(), Some("e1"));
        assert!(reg.event_summary().is_none());
        assert_eq!(reg.user().map(|u| u.email.as_str()), Some("jane@example.com"));
        assert!(reg.created_at.is_none());
    }
}
