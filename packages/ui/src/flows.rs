//! # Action flows
//!
//! The request/notify/persist sequences behind every button in the views,
//! written against [`EventsApi`], [`Notifier`] and [`CredentialStore`] so
//! they run unchanged against the HTTP client in the app and against fakes
//! in tests. Views own the signals; flows return what the view should do
//! next.
//!
//! | Flow | Requests | Notifications |
//! |------|----------|---------------|
//! | [`submit_login`] | login | success |
//! | [`submit_signup`] | register | success |
//! | [`submit_new_event`] | create | success |
//! | [`submit_event_update`] | update | none (inline banners) |
//! | [`delete_event`] | delete | confirm, success / failure |
//! | [`register_for_event`] | register, refetch | login required, success / failure |
//! | [`cancel_registration`] | cancel, refetch | confirm, success / failure |
//! | [`confirm_logout`] | none | confirm |

use api::{Event, EventsApi, Registration, RequestError};
use chrono::NaiveDateTime;
use store::{CredentialStore, Credentials};

use crate::forms::{EventDraft, FieldErrors, FormMode, LoginForm, SignupForm, DATE_INVALID};
use crate::notify::{Notifier, NotifyLevel};

pub const LOGIN_SUCCESS: &str = "Login successful!";
pub const LOGIN_FAILED: &str = "Invalid credentials";
pub const SIGNUP_SUCCESS: &str = "Registration successful!";
pub const SIGNUP_FAILED: &str = "Something went wrong";
pub const EVENTS_LOAD_FAILED: &str = "Failed to fetch events";
pub const EVENT_LOAD_FAILED: &str = "Failed to fetch event";
pub const CREATE_SUCCESS: &str = "Event created successfully!";
pub const CREATE_FAILED: &str = "Failed to create event";
pub const UPDATE_UNCHANGED: &str = "No changes were made to the event.";
pub const UPDATE_SUCCESS: &str = "Event updated successfully!";
pub const UPDATE_FAILED: &str = "Failed to update event";
pub const EDIT_LOAD_FAILED: &str = "Failed to load event. Please try again.";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this event?";
pub const DELETE_SUCCESS: &str = "Event deleted successfully!";
pub const DELETE_FAILED: &str = "Failed to delete event";
pub const LOGIN_REQUIRED: &str = "Please login to register for events";
pub const REGISTER_SUCCESS: &str = "Successfully registered for the event!";
pub const REGISTER_FAILED: &str = "Registration failed";
pub const CANCEL_PROMPT: &str = "Are you sure you want to cancel your registration?";
pub const CANCEL_SUCCESS: &str = "Registration cancelled successfully!";
pub const CANCEL_FAILED: &str = "Cancel failed";
pub const ROSTER_LOAD_FAILED: &str = "Failed to fetch registrations";
pub const LOGOUT_PROMPT: &str = "Are you sure you want to logout?";

/// Result of submitting an event form.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The draft equals the snapshot; nothing was sent.
    Unchanged,
    Saved,
    /// The request failed; the banner text.
    Failed(String),
}

/// Result of a registration action on the detail view.
#[derive(Clone, Debug, PartialEq)]
pub enum ActionOutcome {
    /// The action went through. Carries the refreshed event when the refetch
    /// succeeded.
    Done(Option<Event>),
    /// No token; the view sends the user to login.
    LoginRequired,
    /// The user dismissed the confirmation.
    Declined,
    Failed(String),
}

/// Log in, persist the identity and announce it. On failure nothing is
/// stored and the banner text is returned.
pub async fn submit_login<A, S, N>(api: &A, store: &S, notifier: &N, form: &LoginForm) -> Result<Credentials, String>
where
    A: EventsApi,
    S: CredentialStore,
    N: Notifier,
{
    match api.login(&form.request()).await {
        Ok(response) => {
            let credentials = response.credentials();
            store.save(&credentials);
            tracing::info!("Signed in as {}", response.user_id);
            notifier.notify(LOGIN_SUCCESS, NotifyLevel::Success);
            Ok(credentials)
        }
        Err(e) => {
            tracing::warn!("Login failed: {}", e);
            Err(e.message_or(LOGIN_FAILED))
        }
    }
}

/// Create an account. The user still has to log in afterwards.
pub async fn submit_signup<A, N>(api: &A, notifier: &N, form: &SignupForm) -> Result<(), String>
where
    A: EventsApi,
    N: Notifier,
{
    match api.register(&form.request()).await {
        Ok(()) => {
            notifier.notify(SIGNUP_SUCCESS, NotifyLevel::Success);
            Ok(())
        }
        Err(e) => {
            tracing::warn!("Sign-up failed: {}", e);
            Err(e.message_or(SIGNUP_FAILED))
        }
    }
}

/// Validate and post a new event.
pub async fn submit_new_event<A, N>(api: &A, notifier: &N, draft: &EventDraft, now: NaiveDateTime) -> SubmitOutcome
where
    A: EventsApi,
    N: Notifier,
{
    let errors = draft.validate(FormMode::Create, now);
    if !errors.is_empty() {
        return SubmitOutcome::Invalid(errors);
    }
    let Some(payload) = draft.to_payload() else {
        return SubmitOutcome::Invalid(date_only_error());
    };

    match api.create_event(&payload).await {
        Ok(()) => {
            notifier.notify(CREATE_SUCCESS, NotifyLevel::Success);
            SubmitOutcome::Saved
        }
        Err(e) => {
            tracing::error!("Create event failed: {}", e);
            SubmitOutcome::Failed(e.message_or(CREATE_FAILED))
        }
    }
}

/// Validate and save edits. An unchanged draft is not sent.
pub async fn submit_event_update<A>(
    api: &A,
    id: &str,
    draft: &EventDraft,
    snapshot: Option<&EventDraft>,
    now: NaiveDateTime,
) -> SubmitOutcome
where
    A: EventsApi,
{
    let errors = draft.validate(FormMode::Edit, now);
    if !errors.is_empty() {
        return SubmitOutcome::Invalid(errors);
    }
    if snapshot == Some(draft) {
        return SubmitOutcome::Unchanged;
    }
    let Some(payload) = draft.to_payload() else {
        return SubmitOutcome::Invalid(date_only_error());
    };

    match api.update_event(id, &payload).await {
        Ok(()) => SubmitOutcome::Saved,
        Err(e) => {
            tracing::error!("Update of event {} failed: {}", id, e);
            SubmitOutcome::Failed(e.message_or(UPDATE_FAILED))
        }
    }
}

/// Load an event into an edit draft.
pub async fn load_edit_draft<A: EventsApi>(api: &A, id: &str) -> Result<EventDraft, RequestError> {
    let event = api.get_event(id).await?;
    Ok(EventDraft::from_event(&event))
}

/// Confirm, then delete. Returns whether the event is gone.
pub async fn delete_event<A, N>(api: &A, notifier: &N, id: &str) -> bool
where
    A: EventsApi,
    N: Notifier,
{
    if !notifier.confirm(DELETE_PROMPT) {
        return false;
    }
    match api.delete_event(id).await {
        Ok(()) => {
            notifier.notify(DELETE_SUCCESS, NotifyLevel::Success);
            true
        }
        Err(e) => {
            tracing::error!("Delete of event {} failed: {}", id, e);
            notifier.notify(DELETE_FAILED, NotifyLevel::Error);
            false
        }
    }
}

/// Register the signed-in user, then refetch the event for fresh counts.
pub async fn register_for_event<A, N>(api: &A, notifier: &N, credentials: &Credentials, event_id: &str) -> ActionOutcome
where
    A: EventsApi,
    N: Notifier,
{
    if !credentials.is_authenticated() {
        notifier.notify(LOGIN_REQUIRED, NotifyLevel::Warning);
        return ActionOutcome::LoginRequired;
    }
    if let Err(e) = api.register_for_event(event_id).await {
        let message = e.message_or(REGISTER_FAILED);
        notifier.notify(&message, NotifyLevel::Error);
        return ActionOutcome::Failed(message);
    }
    let refreshed = refetch(api, event_id).await;
    notifier.notify(REGISTER_SUCCESS, NotifyLevel::Success);
    ActionOutcome::Done(refreshed)
}

/// Confirm, cancel the registration, then refetch the event.
pub async fn cancel_registration<A, N>(api: &A, notifier: &N, event_id: &str) -> ActionOutcome
where
    A: EventsApi,
    N: Notifier,
{
    if !notifier.confirm(CANCEL_PROMPT) {
        return ActionOutcome::Declined;
    }
    if let Err(e) = api.cancel_registration(event_id).await {
        let message = e.message_or(CANCEL_FAILED);
        notifier.notify(&message, NotifyLevel::Error);
        return ActionOutcome::Failed(message);
    }
    let refreshed = refetch(api, event_id).await;
    notifier.notify(CANCEL_SUCCESS, NotifyLevel::Success);
    ActionOutcome::Done(refreshed)
}

/// Confirm and forget the persisted identity.
pub fn confirm_logout<S, N>(store: &S, notifier: &N) -> bool
where
    S: CredentialStore,
    N: Notifier,
{
    if !notifier.confirm(LOGOUT_PROMPT) {
        return false;
    }
    store.clear();
    tracing::info!("Signed out");
    true
}

/// Registrants of an event plus, when available, the event itself.
#[derive(Clone, Debug, PartialEq)]
pub struct EventRoster {
    pub registrations: Vec<Registration>,
    pub event: Option<Event>,
}

/// The registrant list is required; the event metadata is best-effort.
pub async fn load_event_roster<A: EventsApi>(api: &A, event_id: &str) -> Result<EventRoster, RequestError> {
    let registrations = api.event_registrations(event_id).await?;
    let event = match api.get_event(event_id).await {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!("Event {} metadata unavailable: {}", event_id, e);
            None
        }
    };
    Ok(EventRoster { registrations, event })
}

/// The current user's registrations. Failures are logged and read as none.
pub async fn load_my_registrations<A: EventsApi>(api: &A) -> Vec<Registration> {
    match api.my_registrations().await {
        Ok(registrations) => registrations,
        Err(e) => {
            tracing::error!("Failed to fetch registrations: {}", e);
            Vec::new()
        }
    }
}

async fn refetch<A: EventsApi>(api: &A, event_id: &str) -> Option<Event> {
    match api.get_event(event_id).await {
        Ok(event) => Some(event),
        Err(e) => {
            tracing::warn!("Refresh of event {} failed: {}", event_id, e);
            None
        }
    }
}

fn date_only_error() -> FieldErrors {
    FieldErrors {
        date_time: Some(DATE_INVALID.to_string()),
        ..FieldErrors::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{CAPACITY_TOO_LOW, NAME_TOO_SHORT};
    use crate::test_support::{sample_event, FakeApi, RecordingNotifier};
    use api::LoginResponse;
    use chrono::NaiveDate;
    use store::MemoryStore;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 17)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn draft() -> EventDraft {
        EventDraft {
            name: "Rust Meetup".into(),
            description: "Monthly gathering of local Rustaceans".into(),
            organizer: "Ferris".into(),
            location: "Berlin".into(),
            date_time: "2026-11-05T18:30".into(),
            capacity: "40".into(),
            category: "Meetup".into(),
        }
    }

    fn login_form(password: &str) -> LoginForm {
        LoginForm {
            email: "jane@example.com".into(),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn test_login_success_persists_and_notifies() {
        let api = FakeApi::new().with_login(
            "jane@example.com",
            "hunter2",
            LoginResponse {
                token: "jwt".into(),
                user_id: "u1".into(),
                name: Some("Jane Doe".into()),
                email: None,
            },
        );
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::new();

        let credentials = submit_login(&api, &store, &notifier, &login_form("hunter2")).await.unwrap();

        assert_eq!(credentials, Credentials::new("jwt", "u1"));
        assert_eq!(store.load(), credentials);
        assert_eq!(notifier.messages(), vec![(LOGIN_SUCCESS.to_string(), NotifyLevel::Success)]);
    }

    #[tokio::test]
    async fn test_login_failure_stores_nothing() {
        let api = FakeApi::new();
        let store = MemoryStore::new();
        let notifier = RecordingNotifier::new();

        let err = submit_login(&api, &store, &notifier, &login_form("wrong")).await.unwrap_err();

        assert_eq!(err, "Invalid email or password");
        assert_eq!(store.load(), Credentials::default());
        assert!(notifier.messages().is_empty());
    }

    #[tokio::test]
    async fn test_login_failure_without_message_uses_fallback() {
        let api = FakeApi::new();
        api.fail("login", RequestError::Network("connection refused".into()));
        let err = submit_login(&api, &MemoryStore::new(), &RecordingNotifier::new(), &login_form("x"))
            .await
            .unwrap_err();
        assert_eq!(err, LOGIN_FAILED);
    }

    #[tokio::test]
    async fn test_signup_paths() {
        let api = FakeApi::new();
        let notifier = RecordingNotifier::new();
        let form = SignupForm {
            name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            password: "pw".into(),
        };
        assert_eq!(submit_signup(&api, &notifier, &form).await, Ok(()));
        assert_eq!(api.calls(), vec!["register jane@example.com".to_string()]);

        api.fail("register", RequestError::Status { status: 500, message: None });
        assert_eq!(submit_signup(&api, &notifier, &form).await, Err(SIGNUP_FAILED.to_string()));

        api.fail(
            "register",
            RequestError::Status {
                status: 400,
                message: Some("User already exists".into()),
            },
        );
        assert_eq!(
            submit_signup(&api, &notifier, &form).await,
            Err("User already exists".to_string())
        );
    }

    #[tokio::test]
    async fn test_create_posts_exact_payload() {
        let api = FakeApi::new();
        let notifier = RecordingNotifier::new();

        let outcome = submit_new_event(&api, &notifier, &draft(), now()).await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(api.created(), vec![draft().to_payload().unwrap()]);
        assert_eq!(notifier.messages(), vec![(CREATE_SUCCESS.to_string(), NotifyLevel::Success)]);
    }

    #[tokio::test]
    async fn test_create_blocked_by_validation() {
        let api = FakeApi::new();
        let mut bad = draft();
        bad.name = "Ru".into();
        bad.capacity = "0".into();

        let outcome = submit_new_event(&api, &RecordingNotifier::new(), &bad, now()).await;

        let SubmitOutcome::Invalid(errors) = outcome else {
            panic!("expected validation failure, got {outcome:?}");
        };
        assert_eq!(errors.name.as_deref(), Some(NAME_TOO_SHORT));
        assert_eq!(errors.capacity.as_deref(), Some(CAPACITY_TOO_LOW));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_surfaces_server_message() {
        let api = FakeApi::new();
        api.fail(
            "create_event",
            RequestError::Status {
                status: 400,
                message: Some("Date is required".into()),
            },
        );
        let outcome = submit_new_event(&api, &RecordingNotifier::new(), &draft(), now()).await;
        assert_eq!(outcome, SubmitOutcome::Failed("Date is required".into()));

        api.fail("create_event", RequestError::Network("offline".into()));
        let outcome = submit_new_event(&api, &RecordingNotifier::new(), &draft(), now()).await;
        assert_eq!(outcome, SubmitOutcome::Failed(CREATE_FAILED.into()));
    }

    #[tokio::test]
    async fn test_update_skips_unchanged_draft() {
        let api = FakeApi::new();
        let snapshot = draft();

        let outcome = submit_event_update(&api, "e1", &draft(), Some(&snapshot), now()).await;

        assert_eq!(outcome, SubmitOutcome::Unchanged);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_update_sends_changes() {
        let api = FakeApi::new();
        let snapshot = draft();
        let mut edited = draft();
        edited.capacity = "60".into();

        let outcome = submit_event_update(&api, "e1", &edited, Some(&snapshot), now()).await;

        assert_eq!(outcome, SubmitOutcome::Saved);
        let updated = api.updated();
        assert_eq!(updated.len(), 1);
        assert_eq!(updated[0].0, "e1");
        assert_eq!(updated[0].1.capacity, 60);

        api.fail("update_event", RequestError::Status { status: 403, message: None });
        let outcome = submit_event_update(&api, "e1", &edited, Some(&snapshot), now()).await;
        assert_eq!(outcome, SubmitOutcome::Failed(UPDATE_FAILED.into()));
    }

    #[tokio::test]
    async fn test_load_edit_draft() {
        let api = FakeApi::new().with_event(sample_event("e1", 40, 3));
        let draft = load_edit_draft(&api, "e1").await.unwrap();
        assert_eq!(draft.name, "Rust Meetup");
        assert_eq!(draft.capacity, "40");
        assert!(load_edit_draft(&api, "missing").await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let api = FakeApi::new().with_event(sample_event("e1", 40, 3));

        let declined = RecordingNotifier::declining();
        assert!(!delete_event(&api, &declined, "e1").await);
        assert!(api.calls().is_empty());
        assert_eq!(declined.prompts(), vec![DELETE_PROMPT.to_string()]);

        let notifier = RecordingNotifier::new();
        assert!(delete_event(&api, &notifier, "e1").await);
        assert_eq!(api.calls(), vec!["delete_event e1".to_string()]);
        assert_eq!(notifier.messages(), vec![(DELETE_SUCCESS.to_string(), NotifyLevel::Success)]);
    }

    #[tokio::test]
    async fn test_delete_failure_notifies() {
        let api = FakeApi::new();
        api.fail("delete_event", RequestError::Status { status: 500, message: None });
        let notifier = RecordingNotifier::new();
        assert!(!delete_event(&api, &notifier, "e1").await);
        assert_eq!(notifier.messages(), vec![(DELETE_FAILED.to_string(), NotifyLevel::Error)]);
    }

    #[tokio::test]
    async fn test_register_requires_login() {
        let api = FakeApi::new().with_event(sample_event("e1", 40, 3));
        let notifier = RecordingNotifier::new();

        let outcome = register_for_event(&api, &notifier, &Credentials::default(), "e1").await;

        assert_eq!(outcome, ActionOutcome::LoginRequired);
        assert!(api.calls().is_empty());
        assert_eq!(notifier.messages(), vec![(LOGIN_REQUIRED.to_string(), NotifyLevel::Warning)]);
    }

    #[tokio::test]
    async fn test_register_then_refetch() {
        let api = FakeApi::new().with_event(sample_event("e1", 40, 3));
        let notifier = RecordingNotifier::new();
        let credentials = Credentials::new("jwt", "u1");

        let outcome = register_for_event(&api, &notifier, &credentials, "e1").await;

        let ActionOutcome::Done(Some(event)) = outcome else {
            panic!("expected refreshed event, got {outcome:?}");
        };
        assert_eq!(event.registered_count, 4);
        assert!(event.has_registered("u1"));
        assert_eq!(api.calls(), vec!["register_for_event e1".to_string(), "get_event e1".to_string()]);
        assert_eq!(notifier.messages(), vec![(REGISTER_SUCCESS.to_string(), NotifyLevel::Success)]);
    }

    #[tokio::test]
    async fn test_register_failure_uses_server_message() {
        let api = FakeApi::new().with_event(sample_event("e1", 40, 40));
        let notifier = RecordingNotifier::new();
        api.fail(
            "register_for_event",
            RequestError::Status {
                status: 400,
                message: Some("Event is full".into()),
            },
        );

        let outcome = register_for_event(&api, &notifier, &Credentials::new("jwt", "u1"), "e1").await;

        assert_eq!(outcome, ActionOutcome::Failed("Event is full".into()));
        assert_eq!(notifier.messages(), vec![("Event is full".to_string(), NotifyLevel::Error)]);
    }

    #[tokio::test]
    async fn test_cancel_flow() {
        let mut event = sample_event("e1", 40, 4);
        event.registered_users.push("u1".into());
        let api = FakeApi::new().with_event(event);

        let declined = RecordingNotifier::declining();
        assert_eq!(cancel_registration(&api, &declined, "e1").await, ActionOutcome::Declined);
        assert!(api.calls().is_empty());

        let notifier = RecordingNotifier::new();
        let outcome = cancel_registration(&api, &notifier, "e1").await;
        let ActionOutcome::Done(Some(event)) = outcome else {
            panic!("expected refreshed event, got {outcome:?}");
        };
        assert_eq!(event.registered_count, 3);
        assert!(!event.has_registered("u1"));

        api.fail("cancel_registration", RequestError::Network("offline".into()));
        let outcome = cancel_registration(&api, &notifier, "e1").await;
        assert_eq!(outcome, ActionOutcome::Failed(CANCEL_FAILED.into()));
    }

    #[tokio::test]
    async fn test_roster_event_metadata_is_optional() {
        let api = FakeApi::new().with_event(sample_event("e1", 40, 0));
        let roster = load_event_roster(&api, "e1").await.unwrap();
        assert!(roster.event.is_some());
        assert!(roster.registrations.is_empty());

        api.fail("get_event", RequestError::Status { status: 500, message: None });
        let roster = load_event_roster(&api, "e1").await.unwrap();
        assert!(roster.event.is_none());

        api.fail(
            "event_registrations",
            RequestError::Status {
                status: 403,
                message: Some("Not authorized".into()),
            },
        );
        let err = load_event_roster(&api, "e1").await.unwrap_err();
        assert_eq!(err.message_or(ROSTER_LOAD_FAILED), "Not authorized");
    }

    #[tokio::test]
    async fn test_roster_filters_by_event() {
        let reg = |id: &str, event: &str| Registration {
            id: id.into(),
            event: Some(api::EventRef::Id(event.into())),
            user: None,
            created_at: None,
        };
        let api = FakeApi::new()
            .with_event(sample_event("e1", 40, 2))
            .with_registrations(vec![reg("r1", "e1"), reg("r2", "e2"), reg("r3", "e1")]);

        let roster = load_event_roster(&api, "e1").await.unwrap();
        assert_eq!(roster.registrations.len(), 2);
        assert_eq!(load_my_registrations(&api).await.len(), 3);
    }

    #[tokio::test]
    async fn test_my_registrations_failure_reads_as_empty() {
        let api = FakeApi::new();
        api.fail("my_registrations", RequestError::Status { status: 500, message: None });
        assert!(load_my_registrations(&api).await.is_empty());
    }

    #[test]
    fn test_logout_clears_only_when_confirmed() {
        let store = MemoryStore::with_credentials(Credentials::new("jwt", "u1"));

        assert!(!confirm_logout(&store, &RecordingNotifier::declining()));
        assert!(store.load().is_authenticated());

        assert!(confirm_logout(&store, &RecordingNotifier::new()));
        assert_eq!(store.load(), Credentials::default());
    }
}
