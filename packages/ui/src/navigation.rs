//! Navigation targets and the route guard decision.
//!
//! Shared views do not know the router's route type; they emit a
//! [`Destination`] and the platform crate maps it onto its routes.

use store::Credentials;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Destination {
    Login,
    Register,
    Events,
    CreateEvent,
    EventDetail(String),
    EditEvent(String),
    MyRegistrations,
    EventRegistrations(String),
    /// One step back in history.
    Back,
}

impl Destination {
    /// URL path of the destination. `None` for [`Destination::Back`].
    pub fn path(&self) -> Option<String> {
        let path = match self {
            Destination::Login => "/".to_string(),
            Destination::Register => "/register".to_string(),
            Destination::Events => "/events".to_string(),
            Destination::CreateEvent => "/create-event".to_string(),
            Destination::EventDetail(id) => format!("/events/{id}"),
            Destination::EditEvent(id) => format!("/edit-event/{id}"),
            Destination::MyRegistrations => "/my-registrations".to_string(),
            Destination::EventRegistrations(id) => format!("/event-registrations/{id}"),
            Destination::Back => return None,
        };
        Some(path)
    }
}

/// Outcome of the route guard for the current identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(Destination),
}

/// Protected content renders whenever a token is present. The token itself
/// is not inspected.
pub fn guard_decision(credentials: &Credentials) -> GuardDecision {
    if credentials.is_authenticated() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(Destination::Login)
    }
}
