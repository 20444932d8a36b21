//! # Typed form state
//!
//! Each form keeps its inputs as strings exactly as typed; conversion and
//! validation happen on submit.
//!
//! | Form | Submitted as |
//! |------|--------------|
//! | [`LoginForm`] | [`api::LoginRequest`] |
//! | [`SignupForm`] | [`api::SignupRequest`] |
//! | [`EventDraft`] | [`api::EventPayload`] after [`EventDraft::validate`] |
//!
//! ## Event validation
//!
//! All rules are evaluated together and reported at once through
//! [`FieldErrors`]:
//!
//! | Field | Rule | Message |
//! |-------|------|---------|
//! | name | at least 3 characters | [`NAME_TOO_SHORT`] |
//! | description | at least 20 characters (edit: only when non-empty) | [`DESCRIPTION_TOO_SHORT`] |
//! | date/time | parses, strictly after now | [`DATE_INVALID`] / [`DATE_NOT_FUTURE`] |
//! | capacity | integer, at least 1 | [`CAPACITY_TOO_LOW`] |

use api::{Event, EventPayload, LoginRequest, SignupRequest};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};

/// Category suggestions offered by the event forms.
pub const CATEGORIES: [&str; 8] = [
    "Conference",
    "Workshop",
    "Seminar",
    "Meetup",
    "Webinar",
    "Networking",
    "Training",
    "Other",
];

pub const NAME_MAX_LEN: usize = 100;
pub const DESCRIPTION_MAX_LEN: usize = 500;

const NAME_MIN_LEN: usize = 3;
const DESCRIPTION_MIN_LEN: usize = 20;

/// Value format of an `<input type="datetime-local">`.
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";
const DATETIME_INPUT_FORMAT_SECS: &str = "%Y-%m-%dT%H:%M:%S";

pub const NAME_TOO_SHORT: &str = "Event name must be at least 3 characters";
pub const DESCRIPTION_TOO_SHORT: &str = "Description must be at least 20 characters";
pub const DATE_NOT_FUTURE: &str = "Event date must be in the future";
pub const DATE_INVALID: &str = "Please choose a valid date and time";
pub const CAPACITY_TOO_LOW: &str = "Capacity must be at least 1";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn request(&self) -> LoginRequest {
        LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    pub fn request(&self) -> SignupRequest {
        SignupRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        }
    }
}

/// Create validates every rule; edit skips an empty description.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// One input of the event form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventField {
    Name,
    Description,
    Organizer,
    Location,
    DateTime,
    Capacity,
    Category,
}

/// The event form as typed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventDraft {
    pub name: String,
    pub description: String,
    pub organizer: String,
    pub location: String,
    /// `datetime-local` value in local time, `YYYY-MM-DDTHH:MM`.
    pub date_time: String,
    pub capacity: String,
    pub category: String,
}

/// Field-scoped validation messages. Empty means the draft may be submitted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub description: Option<String>,
    pub date_time: Option<String>,
    pub capacity: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    pub fn count(&self) -> usize {
        [&self.name, &self.description, &self.date_time, &self.capacity]
            .iter()
            .filter(|e| e.is_some())
            .count()
    }

    pub fn get(&self, field: EventField) -> Option<&str> {
        match field {
            EventField::Name => self.name.as_deref(),
            EventField::Description => self.description.as_deref(),
            EventField::DateTime => self.date_time.as_deref(),
            EventField::Capacity => self.capacity.as_deref(),
            EventField::Organizer | EventField::Location | EventField::Category => None,
        }
    }

    /// Drop the message for `field` (called when the user edits it).
    pub fn clear(&mut self, field: EventField) {
        match field {
            EventField::Name => self.name = None,
            EventField::Description => self.description = None,
            EventField::DateTime => self.date_time = None,
            EventField::Capacity => self.capacity = None,
            EventField::Organizer | EventField::Location | EventField::Category => {}
        }
    }
}

impl EventDraft {
    /// Prefill from a loaded event, converting its time to local input form.
    pub fn from_event(event: &Event) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            organizer: event.organizer.clone(),
            location: event.location.clone(),
            date_time: event
                .date_time
                .with_timezone(&Local)
                .format(DATETIME_INPUT_FORMAT)
                .to_string(),
            capacity: event.capacity.to_string(),
            category: event.category.clone(),
        }
    }

    pub fn get(&self, field: EventField) -> &str {
        match field {
            EventField::Name => &self.name,
            EventField::Description => &self.description,
            EventField::Organizer => &self.organizer,
            EventField::Location => &self.location,
            EventField::DateTime => &self.date_time,
            EventField::Capacity => &self.capacity,
            EventField::Category => &self.category,
        }
    }

    pub fn set(&mut self, field: EventField, value: String) {
        match field {
            EventField::Name => self.name = value,
            EventField::Description => self.description = value,
            EventField::Organizer => self.organizer = value,
            EventField::Location => self.location = value,
            EventField::DateTime => self.date_time = value,
            EventField::Capacity => self.capacity = value,
            EventField::Category => self.category = value,
        }
    }

    /// Check every rule against `now` (local wall-clock time).
    pub fn validate(&self, mode: FormMode, now: NaiveDateTime) -> FieldErrors {
        let mut errors = FieldErrors::default();

        if self.name.chars().count() < NAME_MIN_LEN {
            errors.name = Some(NAME_TOO_SHORT.to_string());
        }

        let description_len = self.description.chars().count();
        let check_description = mode == FormMode::Create || description_len > 0;
        if check_description && description_len < DESCRIPTION_MIN_LEN {
            errors.description = Some(DESCRIPTION_TOO_SHORT.to_string());
        }

        errors.date_time = match parse_local_input(&self.date_time) {
            None => Some(DATE_INVALID.to_string()),
            Some(when) if when <= now => Some(DATE_NOT_FUTURE.to_string()),
            Some(_) => None,
        };

        if parse_capacity(&self.capacity).is_none() {
            errors.capacity = Some(CAPACITY_TOO_LOW.to_string());
        }

        errors
    }

    /// The request body for this draft. `None` if the date or capacity do
    /// not convert; callers validate first.
    pub fn to_payload(&self) -> Option<EventPayload> {
        let naive = parse_local_input(&self.date_time)?;
        let date_time = local_to_utc(naive)?;
        Some(EventPayload {
            name: self.name.clone(),
            description: self.description.clone(),
            organizer: self.organizer.clone(),
            location: self.location.clone(),
            date_time,
            capacity: parse_capacity(&self.capacity)?,
            category: self.category.clone(),
        })
    }
}

/// Submit is disabled while a request is in flight or nothing changed.
pub fn edit_submit_disabled(draft: &EventDraft, snapshot: Option<&EventDraft>, submitting: bool) -> bool {
    submitting || snapshot == Some(draft)
}

/// Local wall-clock time, the reference point for "in the future".
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

fn parse_local_input(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    NaiveDateTime::parse_from_str(value, DATETIME_INPUT_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(value, DATETIME_INPUT_FORMAT_SECS))
        .ok()
}

fn local_to_utc(naive: NaiveDateTime) -> Option<DateTime<Utc>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

fn parse_capacity(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}
