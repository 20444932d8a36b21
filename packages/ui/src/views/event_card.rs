use api::Event;
use dioxus::prelude::*;

use crate::display::{fill_percentage, initials, location_or_tbd, short_date};
use crate::icons::{FaCalendarDays, FaLocationDot, FaUsers};
use crate::Icon;

/// Summary tile for the event grid.
#[component]
pub fn EventCard(event: Event, on_select: EventHandler<String>) -> Element {
    let id = event.id.clone();
    let fill = fill_percentage(&event);
    let full = event.is_full();

    rsx! {
        article {
            class: "event-card",
            onclick: move |_| on_select.call(id.clone()),
            div {
                class: "event-card-head",
                div { class: "avatar", {initials(&event.name)} }
                div {
                    h3 { "{event.name}" }
                    if !event.category.is_empty() {
                        span { class: "tag", "{event.category}" }
                    }
                }
                if full {
                    span { class: "badge badge-full", "Full" }
                }
            }
            p { class: "event-card-description", "{event.description}" }
            ul {
                class: "event-meta",
                li {
                    Icon { icon: FaCalendarDays, width: 12, height: 12 }
                    span { {short_date(&event.date_time)} }
                }
                li {
                    Icon { icon: FaLocationDot, width: 12, height: 12 }
                    span { {location_or_tbd(&event.location)} }
                }
                li {
                    Icon { icon: FaUsers, width: 12, height: 12 }
                    span { "{event.registered_count} / {event.capacity}" }
                }
            }
            div {
                class: "capacity-bar",
                div {
                    class: if full { "capacity-fill capacity-fill-full" } else { "capacity-fill" },
                    style: "width: {fill}%",
                }
            }
        }
    }
}
