mod states;
pub use states::{Banner, EmptyState, ErrorState, LoadingState};

mod event_card;
pub use event_card::EventCard;

mod event_form;
pub use event_form::EventFormFields;

mod login;
pub use login::LoginView;

mod register;
pub use register::RegisterView;

mod events;
pub use events::EventsView;

mod event_detail;
pub use event_detail::EventDetailView;

mod create_event;
pub use create_event::CreateEventView;

mod edit_event;
pub use edit_event::EditEventView;

mod my_registrations;
pub use my_registrations::MyRegistrationsView;

mod event_registrations;
pub use event_registrations::EventRegistrationsView;
