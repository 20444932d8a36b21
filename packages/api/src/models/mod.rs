//! Data models exchanged with the events REST API.

mod event;
mod registration;
mod user;

pub use event::{Event, EventFilter, EventPage, EventPayload};
pub use registration::{EventRef, EventSummary, Registration};
pub use user::{LoginRequest, LoginResponse, SignupRequest, User, UserRef};
