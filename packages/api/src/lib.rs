//! # API crate: typed access to the events REST backend
//!
//! This crate is the only place the client talks HTTP. It defines the wire
//! models, the [`ApiClient`] wrapper that injects the bearer token, and the
//! [`EventsApi`] trait listing every endpoint the views call.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | `ApiClient`: base URL resolution, bearer header, status → [`RequestError`] mapping |
//! | [`error`] | [`RequestError`] and server error-body parsing |
//! | [`models`] | `Event`, `EventPage`, `Registration`, `User` and request/response bodies |
//!
//! ## Endpoints
//!
//! | Method | Path | Trait method |
//! |--------|------|--------------|
//! | POST | `/api/auth/login` | [`EventsApi::login`] |
//! | POST | `/api/auth/register` | [`EventsApi::register`] |
//! | GET | `/api/events?page&filter` | [`EventsApi::list_events`] |
//! | GET | `/api/events/:id` | [`EventsApi::get_event`] |
//! | POST | `/api/events` | [`EventsApi::create_event`] |
//! | PUT | `/api/events/:id` | [`EventsApi::update_event`] |
//! | DELETE | `/api/events/:id` | [`EventsApi::delete_event`] |
//! | POST | `/api/registrations/:eventId` | [`EventsApi::register_for_event`] |
//! | DELETE | `/api/registrations/:id` | [`EventsApi::cancel_registration`] |
//! | GET | `/api/registrations/me` | [`EventsApi::my_registrations`] |
//! | GET | `/api/registrations/:eventId/registrations` | [`EventsApi::event_registrations`] |
//!
//! The trait exists so the UI's action flows can run against an in-memory
//! fake in tests; [`ApiClient`] is the only production implementation.

use reqwest::Method;

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::RequestError;
pub use models::{
    Event, EventFilter, EventPage, EventPayload, EventRef, EventSummary, LoginRequest, LoginResponse,
    Registration, SignupRequest, User, UserRef,
};

/// Every backend operation the client performs.
pub trait EventsApi {
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl std::future::Future<Output = Result<LoginResponse, RequestError>>;
    fn register(
        &self,
        request: &SignupRequest,
    ) -> impl std::future::Future<Output = Result<(), RequestError>>;
    fn list_events(
        &self,
        page: u32,
        filter: EventFilter,
    ) -> impl std::future::Future<Output = Result<EventPage, RequestError>>;
    fn get_event(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<Event, RequestError>>;
    fn create_event(
        &self,
        payload: &EventPayload,
    ) -> impl std::future::Future<Output = Result<(), RequestError>>;
    fn update_event(
        &self,
        id: &str,
        payload: &EventPayload,
    ) -> impl std::future::Future<Output = Result<(), RequestError>>;
    fn delete_event(
        &self,
        id: &str,
    ) -> impl std::future::Future<Output = Result<(), RequestError>>;
    fn register_for_event(
        &self,
        event_id: &str,
    ) -> impl std::future::Future<Output = Result<(), RequestError>>;
    /// Remove the current user's registration. The backend resolves it from
    /// the event id plus the bearer identity.
    fn cancel_registration(
        &self,
        event_id: &str,
    ) -> impl std::future::Future<Output = Result<(), RequestError>>;
    fn my_registrations(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Registration>, RequestError>>;
    fn event_registrations(
        &self,
        event_id: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Registration>, RequestError>>;
}

pub(crate) fn events_path(page: u32, filter: EventFilter) -> String {
    format!("/api/events?page={page}&filter={}", filter.as_str())
}

pub(crate) fn event_path(id: &str) -> String {
    format!("/api/events/{id}")
}

pub(crate) fn registration_path(event_id: &str) -> String {
    format!("/api/registrations/{event_id}")
}

pub(crate) fn event_registrations_path(event_id: &str) -> String {
    format!("/api/registrations/{event_id}/registrations")
}

impl EventsApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, RequestError> {
        tracing::debug!("Logging in as {}", request.email);
        let builder = self.request(Method::POST, "/api/auth/login").json(request);
        self.send_json(builder).await
    }

    async fn register(&self, request: &SignupRequest) -> Result<(), RequestError> {
        let builder = self.request(Method::POST, "/api/auth/register").json(request);
        self.send_empty(builder).await
    }

    async fn list_events(&self, page: u32, filter: EventFilter) -> Result<EventPage, RequestError> {
        let builder = self.request(Method::GET, &events_path(page, filter));
        self.send_json(builder).await
    }

    async fn get_event(&self, id: &str) -> Result<Event, RequestError> {
        let builder = self.request(Method::GET, &event_path(id));
        self.send_json(builder).await
    }

    async fn create_event(&self, payload: &EventPayload) -> Result<(), RequestError> {
        let builder = self.request(Method::POST, "/api/events").json(payload);
        self.send_empty(builder).await
    }

    async fn update_event(&self, id: &str, payload: &EventPayload) -> Result<(), RequestError> {
        let builder = self.request(Method::PUT, &event_path(id)).json(payload);
        self.send_empty(builder).await
    }

    async fn delete_event(&self, id: &str) -> Result<(), RequestError> {
        let builder = self.request(Method::DELETE, &event_path(id));
        self.send_empty(builder).await
    }

    async fn register_for_event(&self, event_id: &str) -> Result<(), RequestError> {
        let builder = self
            .request(Method::POST, &registration_path(event_id))
            .json(&serde_json::json!({}));
        self.send_empty(builder).await
    }

    async fn cancel_registration(&self, event_id: &str) -> Result<(), RequestError> {
        let builder = self.request(Method::DELETE, &registration_path(event_id));
        self.send_empty(builder).await
    }

    async fn my_registrations(&self) -> Result<Vec<Registration>, RequestError> {
        let builder = self.request(Method::GET, "/api/registrations/me");
        self.send_json(builder).await
    }

    async fn event_registrations(&self, event_id: &str) -> Result<Vec<Registration>, RequestError> {
        let builder = self.request(Method::GET, &event_registrations_path(event_id));
        self.send_json(builder).await
    }
}
