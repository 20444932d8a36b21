use api::{EventFilter, EventPage, EventsApi};
use dioxus::prelude::*;

use crate::auth::{expire_if_unauthorized, use_auth, use_client, LogoutButton};
use crate::flows::EVENTS_LOAD_FAILED;
use crate::icons::{FaChevronLeft, FaChevronRight, FaClipboardList, FaPlus};
use crate::listing::{ListQuery, Loadable};
use crate::navigation::Destination;
use crate::views::{EmptyState, ErrorState, EventCard, LoadingState};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Paginated, filterable event grid.
#[component]
pub fn EventsView(on_navigate: EventHandler<Destination>) -> Element {
    let mut auth = use_auth();
    let client = use_client();
    let mut query = use_signal(ListQuery::default);
    let mut listing = use_signal(|| Loadable::<EventPage>::Loading);

    let mut loader = use_resource(move || {
        let client = client.clone();
        let current = query();
        async move {
            listing.set(Loadable::Loading);
            tracing::debug!("Loading events page {} ({})", current.page, current.filter.as_str());
            match client.list_events(current.page, current.filter).await {
                Ok(result) => listing.set(Loadable::Ready(result)),
                Err(e) => {
                    tracing::error!("Failed to fetch events: {}", e);
                    // The route guard redirects once the identity is cleared.
                    if expire_if_unauthorized(&mut auth, &e) {
                        return;
                    }
                    listing.set(Loadable::Failed(EVENTS_LOAD_FAILED.to_string()));
                }
            }
        }
    });

    let total = listing().ready().map(EventPage::total);

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page",
            header {
                class: "page-header",
                h1 { "Events" }
                div {
                    class: "header-actions",
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| on_navigate.call(Destination::CreateEvent),
                        Icon { icon: FaPlus, width: 14, height: 14 }
                        span { "Create Event" }
                    }
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| on_navigate.call(Destination::MyRegistrations),
                        Icon { icon: FaClipboardList, width: 14, height: 14 }
                        span { "My Registrations" }
                    }
                    LogoutButton {
                        class: "btn btn-ghost",
                        on_logged_out: move |_| on_navigate.call(Destination::Login),
                    }
                }
            }

            nav {
                class: "stats-bar",
                for option in EventFilter::ALL {
                    button {
                        key: "{option.as_str()}",
                        class: if query().filter == option { "filter-tab filter-tab-active" } else { "filter-tab" },
                        onclick: move |_| {
                            if let Some(next) = query().with_filter(option) {
                                query.set(next);
                            }
                        },
                        "{option.label()}"
                        if option == EventFilter::All {
                            if let Some(count) = total {
                                span { class: "count", "{count}" }
                            }
                        }
                    }
                }
            }

            {match listing() {
                Loadable::Loading => rsx! { LoadingState { message: "Loading events..." } },
                Loadable::Failed(message) => rsx! {
                    ErrorState {
                        title: "Something went wrong",
                        message,
                        on_retry: move |_| loader.restart(),
                    }
                },
                Loadable::Ready(result) if result.events.is_empty() => rsx! {
                    EmptyState {
                        title: "No events found",
                        message: "There are no events here yet.",
                        button {
                            class: "btn btn-primary",
                            onclick: move |_| on_navigate.call(Destination::CreateEvent),
                            "Create Your First Event"
                        }
                    }
                },
                Loadable::Ready(result) => {
                    let total_pages = result.total_pages;
                    let pager = query().pager(total_pages);
                    rsx! {
                        div {
                            class: "event-grid",
                            for event in result.events {
                                EventCard {
                                    key: "{event.id}",
                                    event: event.clone(),
                                    on_select: move |id: String| on_navigate.call(Destination::EventDetail(id)),
                                }
                            }
                        }
                        if pager.is_visible() {
                            div {
                                class: "pager",
                                button {
                                    class: "btn btn-outline",
                                    disabled: !pager.has_prev(),
                                    onclick: move |_| {
                                        if let Some(previous) = query().previous(total_pages) {
                                            query.set(previous);
                                        }
                                    },
                                    Icon { icon: FaChevronLeft, width: 12, height: 12 }
                                    span { "Previous" }
                                }
                                span { "Page {pager.page()} of {pager.total_pages()}" }
                                button {
                                    class: "btn btn-outline",
                                    disabled: !pager.has_next(),
                                    onclick: move |_| {
                                        if let Some(next) = query().next(total_pages) {
                                            query.set(next);
                                        }
                                    },
                                    span { "Next" }
                                    Icon { icon: FaChevronRight, width: 12, height: 12 }
                                }
                            }
                        }
                    }
                }
            }}
        }
    }
}
