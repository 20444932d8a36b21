use api::{Event, EventsApi};
use dioxus::prelude::*;

use crate::access::EventAccess;
use crate::auth::{expire_if_unauthorized, use_auth, use_client};
use crate::display::{fill_percentage, location_or_tbd, long_datetime, spots_left_label};
use crate::flows::{self, ActionOutcome, EVENT_LOAD_FAILED};
use crate::icons::{FaArrowLeft, FaCalendarDays, FaLocationDot, FaPenToSquare, FaTrashCan, FaUser, FaUsers};
use crate::listing::Loadable;
use crate::navigation::Destination;
use crate::notify::BrowserNotifier;
use crate::views::{EmptyState, ErrorState, LoadingState};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// One event with its registration controls and, for the owner, admin
/// actions. `Ready(None)` is a confirmed missing event.
#[component]
pub fn EventDetailView(event_id: String, on_navigate: EventHandler<Destination>) -> Element {
    let mut id_signal = use_signal(|| event_id.clone());
    if *id_signal.peek() != event_id {
        id_signal.set(event_id.clone());
    }

    let mut auth = use_auth();
    let client = use_client();
    let mut state = use_signal(|| Loadable::<Option<Event>>::Loading);
    // One action at a time; cleared after the refresh lands
    let mut busy = use_signal(|| false);

    let loader_client = client.clone();
    let mut loader = use_resource(move || {
        let client = loader_client.clone();
        let id = id_signal();
        async move {
            state.set(Loadable::Loading);
            match client.get_event(&id).await {
                Ok(event) => state.set(Loadable::Ready(Some(event))),
                Err(e) if e.is_not_found() => state.set(Loadable::Ready(None)),
                Err(e) => {
                    tracing::error!("Failed to fetch event {}: {}", id, e);
                    // The route guard redirects once the identity is cleared.
                    if expire_if_unauthorized(&mut auth, &e) {
                        return;
                    }
                    state.set(Loadable::Failed(EVENT_LOAD_FAILED.to_string()));
                }
            }
        }
    });

    let register_client = client.clone();
    let handle_register = move |_| {
        if busy() {
            return;
        }
        let client = register_client.clone();
        let id = id_signal();
        let credentials = auth().credentials;
        busy.set(true);
        spawn(async move {
            let outcome = flows::register_for_event(&client, &BrowserNotifier, &credentials, &id).await;
            apply_outcome(outcome, state, loader, on_navigate);
            busy.set(false);
        });
    };

    let cancel_client = client.clone();
    let handle_cancel = move |_| {
        if busy() {
            return;
        }
        let client = cancel_client.clone();
        let id = id_signal();
        busy.set(true);
        spawn(async move {
            let outcome = flows::cancel_registration(&client, &BrowserNotifier, &id).await;
            apply_outcome(outcome, state, loader, on_navigate);
            busy.set(false);
        });
    };

    let handle_delete = move |_| {
        let client = client.clone();
        let id = id_signal();
        spawn(async move {
            if flows::delete_event(&client, &BrowserNotifier, &id).await {
                on_navigate.call(Destination::Events);
            }
        });
    };

    let back = move |_| on_navigate.call(Destination::Events);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page page-narrow",
            header {
                class: "page-header",
                button {
                    class: "btn btn-ghost",
                    onclick: back,
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    span { "Back to Events" }
                }
            }

            {match state() {
                Loadable::Loading => rsx! { LoadingState { message: "Loading event..." } },
                Loadable::Failed(message) => rsx! {
                    ErrorState {
                        title: "Something went wrong",
                        message,
                        on_retry: move |_| loader.restart(),
                        on_back: move |_| on_navigate.call(Destination::Events),
                        back_label: "Back to Events",
                    }
                },
                Loadable::Ready(None) => rsx! {
                    EmptyState {
                        title: "Event not found",
                        message: "This event may have been removed.",
                        button {
                            class: "btn btn-primary",
                            onclick: back,
                            "Back to Events"
                        }
                    }
                },
                Loadable::Ready(Some(event)) => {
                    let access = EventAccess::new(&event, &auth().credentials);
                    let fill = fill_percentage(&event);
                    let event_id = event.id.clone();
                    let roster_id = event.id.clone();
                    rsx! {
                        article {
                            class: "event-detail",
                            div {
                                class: "event-detail-head",
                                h1 { "{event.name}" }
                                if !event.category.is_empty() {
                                    span { class: "tag", "{event.category}" }
                                }
                                if access.is_full {
                                    span { class: "badge badge-full", "Full" }
                                }
                                if access.registered {
                                    span { class: "badge badge-registered", "Registered" }
                                }
                            }
                            p { class: "event-detail-description", "{event.description}" }

                            ul {
                                class: "event-meta event-meta-large",
                                li {
                                    Icon { icon: FaCalendarDays, width: 14, height: 14 }
                                    span { {long_datetime(&event.date_time)} }
                                }
                                li {
                                    Icon { icon: FaLocationDot, width: 14, height: 14 }
                                    span { {location_or_tbd(&event.location)} }
                                }
                                if !event.organizer.is_empty() {
                                    li {
                                        Icon { icon: FaUser, width: 14, height: 14 }
                                        span { "Organized by {event.organizer}" }
                                    }
                                }
                                li {
                                    Icon { icon: FaUsers, width: 14, height: 14 }
                                    span { "{event.registered_count} registered of {event.capacity}" }
                                }
                            }

                            div {
                                class: "capacity-bar capacity-bar-large",
                                div {
                                    class: if access.is_full { "capacity-fill capacity-fill-full" } else { "capacity-fill" },
                                    style: "width: {fill}%",
                                }
                            }
                            p { class: "muted", {spots_left_label(&event)} }

                            div {
                                class: "detail-actions",
                                if !access.authenticated {
                                    div {
                                        class: "login-prompt",
                                        p { "Please login to register for this event." }
                                        button {
                                            class: "btn btn-primary",
                                            onclick: move |_| on_navigate.call(Destination::Login),
                                            "Login"
                                        }
                                    }
                                } else if access.registered {
                                    button {
                                        class: "btn btn-outline",
                                        disabled: !access.can_cancel(busy()),
                                        onclick: handle_cancel,
                                        if busy() { "Cancelling..." } else { "Cancel Registration" }
                                    }
                                } else {
                                    button {
                                        class: "btn btn-primary",
                                        disabled: !access.can_register(busy()),
                                        onclick: handle_register,
                                        if access.is_full {
                                            "Event Full"
                                        } else if busy() {
                                            "Registering..."
                                        } else {
                                            "Register for Event"
                                        }
                                    }
                                }
                            }

                            if access.is_owner {
                                div {
                                    class: "owner-actions",
                                    h2 { "Manage event" }
                                    button {
                                        class: "btn btn-outline",
                                        onclick: move |_| on_navigate.call(Destination::EditEvent(event_id.clone())),
                                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                                        span { "Edit Event" }
                                    }
                                    button {
                                        class: "btn btn-outline",
                                        onclick: move |_| on_navigate.call(Destination::EventRegistrations(roster_id.clone())),
                                        Icon { icon: FaUsers, width: 14, height: 14 }
                                        span { "View Registrations" }
                                    }
                                    button {
                                        class: "btn btn-danger",
                                        onclick: handle_delete,
                                        Icon { icon: FaTrashCan, width: 14, height: 14 }
                                        span { "Delete Event" }
                                    }
                                }
                            }
                        }
                    }
                }
            }}
        }
    }
}

fn apply_outcome(
    outcome: ActionOutcome,
    mut state: Signal<Loadable<Option<Event>>>,
    mut loader: Resource<()>,
    on_navigate: EventHandler<Destination>,
) {
    match outcome {
        ActionOutcome::Done(Some(event)) => state.set(Loadable::Ready(Some(event))),
        ActionOutcome::Done(None) => loader.restart(),
        ActionOutcome::LoginRequired => on_navigate.call(Destination::Login),
        ActionOutcome::Declined | ActionOutcome::Failed(_) => {}
    }
}
