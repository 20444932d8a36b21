//! What the signed-in user may do with one event.

use api::Event;
use store::Credentials;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EventAccess {
    pub authenticated: bool,
    /// The user's id is in the event's registered list.
    pub registered: bool,
    pub is_full: bool,
    /// The user created the event and sees the admin controls.
    pub is_owner: bool,
}

impl EventAccess {
    pub fn new(event: &Event, credentials: &Credentials) -> Self {
        let user_id = credentials.user_id.as_deref().filter(|id| !id.is_empty());
        Self {
            authenticated: credentials.is_authenticated(),
            registered: user_id.is_some_and(|id| event.has_registered(id)),
            is_full: event.is_full(),
            is_owner: event.owner_id().is_some_and(|owner| credentials.is_user(owner)),
        }
    }

    /// `busy` is the view's in-flight flag.
    pub fn can_register(&self, busy: bool) -> bool {
        self.authenticated && !self.registered && !self.is_full && !busy
    }

    pub fn can_cancel(&self, busy: bool) -> bool {
        self.authenticated && self.registered && !busy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_event;
    use api::{User, UserRef};

    #[test]
    fn test_full_event_cannot_be_joined() {
        let event = sample_event("e1", 10, 10);
        let access = EventAccess::new(&event, &Credentials::new("jwt", "u1"));
        assert!(access.is_full);
        assert!(!access.can_register(false));
    }

    #[test]
    fn test_registration_controls() {
        let mut event = sample_event("e1", 10, 3);
        let credentials = Credentials::new("jwt", "u1");

        let access = EventAccess::new(&event, &credentials);
        assert!(access.can_register(false));
        assert!(!access.can_register(true));
        assert!(!access.can_cancel(false));

        event.registered_users.push("u1".into());
        let access = EventAccess::new(&event, &credentials);
        assert!(access.registered);
        assert!(!access.can_register(false));
        assert!(access.can_cancel(false));
        assert!(!access.can_cancel(true));
    }

    #[test]
    fn test_anonymous_visitor() {
        let mut event = sample_event("e1", 10, 3);
        event.registered_users.push(String::new());
        let access = EventAccess::new(&event, &Credentials::default());
        assert!(!access.authenticated);
        assert!(!access.registered);
        assert!(!access.is_owner);
        assert!(!access.can_register(false));
    }

    #[test]
    fn test_owner_detection() {
        let mut event = sample_event("e1", 10, 3);
        event.created_by = Some(UserRef::Id("u1".into()));
        assert!(EventAccess::new(&event, &Credentials::new("jwt", "u1")).is_owner);
        assert!(!EventAccess::new(&event, &Credentials::new("jwt", "u2")).is_owner);

        event.created_by = Some(UserRef::Populated(User {
            id: "u2".into(),
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
        }));
        assert!(EventAccess::new(&event, &Credentials::new("jwt", "u2")).is_owner);
    }
}
