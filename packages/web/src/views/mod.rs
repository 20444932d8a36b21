//! Route components: each wires a shared view to the router, behind the
//! guard where the page needs a signed-in user.

use dioxus::prelude::*;
use ui::views::{
    CreateEventView, EditEventView, EventDetailView, EventRegistrationsView, EventsView, LoginView,
    MyRegistrationsView, RegisterView,
};

use crate::guard::Protected;
use crate::use_destination;

#[component]
pub fn Login() -> Element {
    let on_navigate = use_destination();
    rsx! {
        LoginView { on_navigate }
    }
}

#[component]
pub fn Register() -> Element {
    let on_navigate = use_destination();
    rsx! {
        RegisterView { on_navigate }
    }
}

#[component]
pub fn Events() -> Element {
    let on_navigate = use_destination();
    rsx! {
        Protected {
            EventsView { on_navigate }
        }
    }
}

#[component]
pub fn CreateEvent() -> Element {
    let on_navigate = use_destination();
    rsx! {
        Protected {
            CreateEventView { on_navigate }
        }
    }
}

#[component]
pub fn EventDetail(id: String) -> Element {
    let on_navigate = use_destination();
    rsx! {
        Protected {
            EventDetailView { event_id: id, on_navigate }
        }
    }
}

#[component]
pub fn EditEvent(id: String) -> Element {
    let on_navigate = use_destination();
    rsx! {
        Protected {
            EditEventView { event_id: id, on_navigate }
        }
    }
}

#[component]
pub fn MyRegistrations() -> Element {
    let on_navigate = use_destination();
    rsx! {
        MyRegistrationsView { on_navigate }
    }
}

#[component]
pub fn EventRegistrations(event_id: String) -> Element {
    let on_navigate = use_destination();
    rsx! {
        EventRegistrationsView { event_id, on_navigate }
    }
}
