use dioxus::prelude::*;

use ui::{AuthProvider, Destination};
use views::{CreateEvent, EditEvent, EventDetail, EventRegistrations, Events, Login, MyRegistrations, Register};

mod guard;
mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub(crate) enum Route {
    #[route("/")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/events")]
    Events {},
    #[route("/create-event")]
    CreateEvent {},
    #[route("/events/:id")]
    EventDetail { id: String },
    #[route("/edit-event/:id")]
    EditEvent { id: String },
    #[route("/my-registrations")]
    MyRegistrations {},
    #[route("/event-registrations/:event_id")]
    EventRegistrations { event_id: String },
}

impl Route {
    /// Route for a view-level destination. `None` for "back".
    pub(crate) fn from_destination(destination: Destination) -> Option<Self> {
        let route = match destination {
            Destination::Login => Route::Login {},
            Destination::Register => Route::Register {},
            Destination::Events => Route::Events {},
            Destination::CreateEvent => Route::CreateEvent {},
            Destination::EventDetail(id) => Route::EventDetail { id },
            Destination::EditEvent(id) => Route::EditEvent { id },
            Destination::MyRegistrations => Route::MyRegistrations {},
            Destination::EventRegistrations(event_id) => Route::EventRegistrations { event_id },
            Destination::Back => return None,
        };
        Some(route)
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Navigation callback handed to the shared views.
pub(crate) fn use_destination() -> EventHandler<Destination> {
    let nav = use_navigator();
    use_callback(move |destination: Destination| {
        tracing::debug!("Navigating to {:?}", destination);
        match Route::from_destination(destination) {
            Some(route) => {
                nav.push(route);
            }
            None => nav.go_back(),
        }
    })
}
