//! # Event model and listing types
//!
//! [`Event`] mirrors the backend's event document. `registeredCount` and
//! `registeredUsers` are maintained by the server; the client only reads them.
//! [`EventPage`] is one page of `GET /api/events`, and [`EventPayload`] is the
//! body of create/update requests.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserRef;

/// A schedulable item with capacity and a time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub capacity: u32,
    #[serde(default)]
    pub registered_count: u32,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub created_by: Option<UserRef>,
    #[serde(default)]
    pub registered_users: Vec<String>,
}

impl Event {
    /// No seats left.
    pub fn is_full(&self) -> bool {
        self.registered_count >= self.capacity
    }

    /// Remaining seats, never negative.
    pub fn spots_left(&self) -> u32 {
        self.capacity.saturating_sub(self.registered_count)
    }

    /// Raw fill ratio in percent. May exceed 100 if the server over-books.
    pub fn capacity_percentage(&self) -> f64 {
        if self.capacity == 0 {
            return 100.0;
        }
        f64::from(self.registered_count) / f64::from(self.capacity) * 100.0
    }

    pub fn owner_id(&self) -> Option<&str> {
        self.created_by.as_ref().map(UserRef::id)
    }

    /// Whether `user_id` appears in the registered-user list.
    pub fn has_registered(&self, user_id: &str) -> bool {
        self.registered_users.iter().any(|u| u == user_id)
    }
}

/// One page of `GET /api/events`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventPage {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default = "default_total_pages")]
    pub total_pages: u32,
    #[serde(default)]
    pub total_events: Option<u64>,
    #[serde(default)]
    pub current_page: Option<u32>,
}

fn default_total_pages() -> u32 {
    1
}

impl EventPage {
    /// Total across all pages; falls back to this page's length.
    pub fn total(&self) -> u64 {
        match self.total_events {
            Some(n) if n > 0 => n,
            _ => self.events.len() as u64,
        }
    }
}

/// Time window filter for the event listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFilter {
    #[default]
    All,
    Upcoming,
    Past,
}

impl EventFilter {
    pub const ALL: [EventFilter; 3] = [EventFilter::All, EventFilter::Upcoming, EventFilter::Past];

    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventFilter::All => "all",
            EventFilter::Upcoming => "upcoming",
            EventFilter::Past => "past",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventFilter::All => "All Events",
            EventFilter::Upcoming => "Upcoming",
            EventFilter::Past => "Past",
        }
    }
}

/// Body of `POST /api/events` and `PUT /api/events/:id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventPayload {
    pub name: String,
    pub description: String,
    pub organizer: String,
    pub location: String,
    pub date_time: DateTime<Utc>,
    pub capacity: u32,
    pub category: String,
}
