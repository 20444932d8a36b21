use dioxus::prelude::*;

use crate::auth::{expire_if_unauthorized, use_auth, use_client};
use crate::display::{day_date, initials, long_datetime};
use crate::flows::{self, EventRoster, ROSTER_LOAD_FAILED};
use crate::icons::{FaArrowLeft, FaEnvelope};
use crate::listing::Loadable;
use crate::navigation::Destination;
use crate::views::{EmptyState, ErrorState, LoadingState};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Registrants of one event, for its owner.
#[component]
pub fn EventRegistrationsView(event_id: String, on_navigate: EventHandler<Destination>) -> Element {
    let mut id_signal = use_signal(|| event_id.clone());
    if *id_signal.peek() != event_id {
        id_signal.set(event_id.clone());
    }

    let mut auth = use_auth();
    let client = use_client();
    let mut roster = use_signal(|| Loadable::<EventRoster>::Loading);

    let mut loader = use_resource(move || {
        let client = client.clone();
        let id = id_signal();
        async move {
            roster.set(Loadable::Loading);
            match flows::load_event_roster(&client, &id).await {
                Ok(loaded) => roster.set(Loadable::Ready(loaded)),
                Err(e) => {
                    tracing::error!("Failed to fetch registrations for {}: {}", id, e);
                    if expire_if_unauthorized(&mut auth, &e) {
                        on_navigate.call(Destination::Login);
                        return;
                    }
                    roster.set(Loadable::Failed(e.message_or(ROSTER_LOAD_FAILED)));
                }
            }
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            header {
                class: "page-header",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_navigate.call(Destination::Back),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    span { "Back" }
                }
                h1 { "Event Registrations" }
            }

            {match roster() {
                Loadable::Loading => rsx! { LoadingState { message: "Loading registrations..." } },
                Loadable::Failed(message) => rsx! {
                    ErrorState {
                        title: "Something went wrong",
                        message,
                        on_retry: move |_| loader.restart(),
                        on_back: move |_| on_navigate.call(Destination::Back),
                    }
                },
                Loadable::Ready(EventRoster { registrations, event }) => rsx! {
                    if let Some(event) = event {
                        div {
                            class: "roster-event",
                            h2 { "{event.name}" }
                            p { class: "muted", {long_datetime(&event.date_time)} }
                        }
                    }
                    div {
                        class: "stats-bar",
                        div { class: "stat", strong { "{registrations.len()}" } span { "Registrants" } }
                    }
                    if registrations.is_empty() {
                        EmptyState {
                            title: "No registrations yet",
                            message: "Nobody has registered for this event so far.",
                            button {
                                class: "btn btn-outline",
                                onclick: move |_| on_navigate.call(Destination::Back),
                                "Go back"
                            }
                        }
                    } else {
                        ul {
                            class: "roster",
                            for registration in registrations {
                                li {
                                    key: "{registration.id}",
                                    class: "roster-row",
                                    {
                                        let user = registration.user().cloned().unwrap_or_default();
                                        rsx! {
                                            div { class: "avatar", {initials(&user.name)} }
                                            div {
                                                class: "roster-user",
                                                strong { "{user.name}" }
                                                span {
                                                    class: "muted",
                                                    Icon { icon: FaEnvelope, width: 12, height: 12 }
                                                    " {user.email}"
                                                }
                                            }
                                            if let Some(registered_at) = registration.created_at {
                                                span { class: "muted", "Registered " {day_date(&registered_at)} }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
            }}
        }
    }
}
