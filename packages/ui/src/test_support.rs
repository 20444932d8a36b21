//! In-memory fakes for driving the action flows in tests.

use std::cell::RefCell;
use std::collections::HashMap;

use api::{
    Event, EventFilter, EventPage, EventPayload, EventsApi, LoginRequest, LoginResponse, Registration,
    RequestError, SignupRequest,
};
use chrono::{TimeZone, Utc};

use crate::notify::{Notifier, NotifyLevel};

/// The user the fake backend treats as the bearer of any token.
pub const ACTING_USER: &str = "u1";

pub fn sample_event(id: &str, capacity: u32, registered: u32) -> Event {
    Event {
        id: id.into(),
        name: "Rust Meetup".into(),
        description: "Monthly gathering of local Rustaceans".into(),
        organizer: "Ferris".into(),
        location: "Berlin".into(),
        date_time: Utc.with_ymd_and_hms(2026, 11, 5, 17, 30, 0).unwrap(),
        capacity,
        registered_count: registered,
        category: "Meetup".into(),
        created_by: None,
        registered_users: Vec::new(),
    }
}

/// Backend double. Records every call as `"<operation> <argument>"`.
#[derive(Default)]
pub struct FakeApi {
    login: Option<(LoginRequest, LoginResponse)>,
    events: RefCell<HashMap<String, Event>>,
    registrations: RefCell<Vec<Registration>>,
    failures: RefCell<HashMap<&'static str, RequestError>>,
    calls: RefCell<Vec<String>>,
    created: RefCell<Vec<EventPayload>>,
    updated: RefCell<Vec<(String, EventPayload)>>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_login(mut self, email: &str, password: &str, response: LoginResponse) -> Self {
        let request = LoginRequest {
            email: email.into(),
            password: password.into(),
        };
        self.login = Some((request, response));
        self
    }

    pub fn with_event(self, event: Event) -> Self {
        self.events.borrow_mut().insert(event.id.clone(), event);
        self
    }

    pub fn with_registrations(self, registrations: Vec<Registration>) -> Self {
        *self.registrations.borrow_mut() = registrations;
        self
    }

    /// Make `operation` fail with `error` from now on.
    pub fn fail(&self, operation: &'static str, error: RequestError) {
        self.failures.borrow_mut().insert(operation, error);
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn created(&self) -> Vec<EventPayload> {
        self.created.borrow().clone()
    }

    pub fn updated(&self) -> Vec<(String, EventPayload)> {
        self.updated.borrow().clone()
    }

    fn record(&self, operation: &'static str, argument: &str) -> Result<(), RequestError> {
        let entry = if argument.is_empty() {
            operation.to_string()
        } else {
            format!("{operation} {argument}")
        };
        self.calls.borrow_mut().push(entry);
        match self.failures.borrow().get(operation) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn not_found() -> RequestError {
        RequestError::Status {
            status: 404,
            message: Some("Event not found".into()),
        }
    }
}

impl EventsApi for FakeApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, RequestError> {
        self.record("login", &request.email)?;
        match &self.login {
            Some((valid, response)) if valid == request => Ok(response.clone()),
            _ => Err(RequestError::Status {
                status: 401,
                message: Some("Invalid email or password".into()),
            }),
        }
    }

    async fn register(&self, request: &SignupRequest) -> Result<(), RequestError> {
        self.record("register", &request.email)
    }

    async fn list_events(&self, page: u32, filter: EventFilter) -> Result<EventPage, RequestError> {
        self.record("list_events", &format!("{page} {}", filter.as_str()))?;
        let mut events: Vec<Event> = self.events.borrow().values().cloned().collect();
        events.sort_by(|a, b| a.date_time.cmp(&b.date_time));
        Ok(EventPage {
            total_events: Some(events.len() as u64),
            events,
            total_pages: 1,
            current_page: Some(page),
        })
    }

    async fn get_event(&self, id: &str) -> Result<Event, RequestError> {
        self.record("get_event", id)?;
        self.events.borrow().get(id).cloned().ok_or_else(Self::not_found)
    }

    async fn create_event(&self, payload: &EventPayload) -> Result<(), RequestError> {
        self.record("create_event", &payload.name)?;
        self.created.borrow_mut().push(payload.clone());
        Ok(())
    }

    async fn update_event(&self, id: &str, payload: &EventPayload) -> Result<(), RequestError> {
        self.record("update_event", id)?;
        self.updated.borrow_mut().push((id.to_string(), payload.clone()));
        Ok(())
    }

    async fn delete_event(&self, id: &str) -> Result<(), RequestError> {
        self.record("delete_event", id)?;
        self.events.borrow_mut().remove(id);
        Ok(())
    }

    async fn register_for_event(&self, event_id: &str) -> Result<(), RequestError> {
        self.record("register_for_event", event_id)?;
        let mut events = self.events.borrow_mut();
        let event = events.get_mut(event_id).ok_or_else(Self::not_found)?;
        event.registered_count += 1;
        event.registered_users.push(ACTING_USER.to_string());
        Ok(())
    }

    async fn cancel_registration(&self, event_id: &str) -> Result<(), RequestError> {
        self.record("cancel_registration", event_id)?;
        let mut events = self.events.borrow_mut();
        let event = events.get_mut(event_id).ok_or_else(Self::not_found)?;
        event.registered_count = event.registered_count.saturating_sub(1);
        event.registered_users.retain(|u| u != ACTING_USER);
        Ok(())
    }

    async fn my_registrations(&self) -> Result<Vec<Registration>, RequestError> {
        self.record("my_registrations", "")?;
        Ok(self.registrations.borrow().clone())
    }

    async fn event_registrations(&self, event_id: &str) -> Result<Vec<Registration>, RequestError> {
        self.record("event_registrations", event_id)?;
        Ok(self
            .registrations
            .borrow()
            .iter()
            .filter(|r| r.event_id() == Some(event_id))
            .cloned()
            .collect())
    }
}

/// Notifier double that answers confirmations with a fixed reply.
pub struct RecordingNotifier {
    answer: bool,
    prompts: RefCell<Vec<String>>,
    messages: RefCell<Vec<(String, NotifyLevel)>>,
}

impl RecordingNotifier {
    /// Accepts every confirmation.
    pub fn new() -> Self {
        Self::answering(true)
    }

    /// Declines every confirmation.
    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            prompts: RefCell::new(Vec::new()),
            messages: RefCell::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }

    pub fn messages(&self) -> Vec<(String, NotifyLevel)> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn confirm(&self, prompt: &str) -> bool {
        self.prompts.borrow_mut().push(prompt.to_string());
        self.answer
    }

    fn notify(&self, message: &str, level: NotifyLevel) {
        self.messages.borrow_mut().push((message.to_string(), level));
    }
}
