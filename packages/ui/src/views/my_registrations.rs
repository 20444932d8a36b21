use api::Registration;
use dioxus::prelude::*;

use crate::auth::use_client;
use crate::display::{day_date, long_datetime};
use crate::flows;
use crate::icons::{FaArrowLeft, FaCalendarDays, FaLocationDot};
use crate::listing::{Loadable, RegistrationStats};
use crate::navigation::Destination;
use crate::views::{EmptyState, LoadingState};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// The signed-in user's registrations. A failed load reads as an empty list.
#[component]
pub fn MyRegistrationsView(on_navigate: EventHandler<Destination>) -> Element {
    let client = use_client();
    let mut registrations = use_signal(|| Loadable::<Vec<Registration>>::Loading);

    let _loader = use_resource(move || {
        let client = client.clone();
        async move {
            registrations.set(Loadable::Ready(flows::load_my_registrations(&client).await));
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
                    onclick: move |_| on_navigate.call(Destination::Events),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    span { "Back to Events" }
                }
                h1 { "My Registrations" }
            }

            {match registrations() {
                Loadable::Loading | Loadable::Failed(_) => rsx! { LoadingState { message: "Loading your registrations..." } },
                Loadable::Ready(list) if list.is_empty() => rsx! {
                    EmptyState {
                        title: "No registrations yet",
                        message: "Browse events and register for the ones you like.",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_navigate.call(Destination::Events),
                            "Browse Events"
                        }
                    }
                },
                Loadable::Ready(list) => {
                    let stats = RegistrationStats::from_registrations(&list);
                    rsx! {
                        div {
                            class: "stats-bar",
                            div { class: "stat", strong { "{stats.total}" } span { "Total registrations" } }
                            div { class: "stat", strong { "{stats.unique_events}" } span { "Events" } }
                        }
                        div {
                            class: "registration-list",
                            for registration in list {
                                RegistrationCard {
                                    key: "{registration.id}",
                                    registration: registration.clone(),
                                    on_navigate,
                                }
                            }
                        }
                    }
                }
            }}
        }
    }
}

#[component]
fn RegistrationCard(registration: Registration, on_navigate: EventHandler<Destination>) -> Element {
    let summary = registration.event_summary().cloned();
    let event_id = registration.event_id().map(str::to_string);
    let name = summary
        .as_ref()
        .map(|s| s.name.clone())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| "Untitled event".to_string());

    rsx! {
        article {
            class: "registration-card",
            h3 { "{name}" }
            if let Some(summary) = summary.as_ref() {
                if !summary.description.is_empty() {
                    p { class: "muted", "{summary.description}" }
                }
            }
            ul {
                class: "event-meta",
                if let Some(registered_at) = registration.created_at {
                    li { "Registered on " {day_date(&registered_at)} }
                }
                if let Some(when) = summary.as_ref().and_then(|s| s.date_time) {
                    li {
                        Icon { icon: FaCalendarDays, width: 12, height: 12 }
                        span { {long_datetime(&when)} }
                    }
                }
                if let Some(location) = summary.as_ref().and_then(|s| s.location.clone()).filter(|l| !l.is_empty()) {
                    li {
                        Icon { icon: FaLocationDot, width: 12, height: 12 }
                        span { "{location}" }
                    }
                }
                if let Some(category) = summary.as_ref().and_then(|s| s.category.clone()).filter(|c| !c.is_empty()) {
                    li { span { class: "tag", "{category}" } }
                }
            }
            if let Some(id) = event_id {
                button {
                    class: "btn btn-outline",
                    onclick: move |_| on_navigate.call(Destination::EventDetail(id.clone())),
                    "View Details"
                }
            }
        }
    }
}
