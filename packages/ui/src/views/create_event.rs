use dioxus::prelude::*;

use crate::auth::use_client;
use crate::flows::{self, SubmitOutcome};
use crate::forms::{local_now, EventDraft, FieldErrors};
use crate::icons::FaArrowLeft;
use crate::navigation::Destination;
use crate::notify::BrowserNotifier;
use crate::views::{Banner, EventFormFields};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// New event form.
#[component]
pub fn CreateEventView(on_navigate: EventHandler<Destination>) -> Element {
    let client = use_client();
    let draft = use_signal(EventDraft::default);
    let mut errors = use_signal(FieldErrors::default);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let client = client.clone();
        banner.set(None);
        submitting.set(true);
        spawn(async move {
            match flows::submit_new_event(&client, &BrowserNotifier, &draft(), local_now()).await {
                SubmitOutcome::Saved => on_navigate.call(Destination::Events),
                SubmitOutcome::Invalid(field_errors) => errors.set(field_errors),
                SubmitOutcome::Failed(message) => banner.set(Some(message)),
                SubmitOutcome::Unchanged => {}
            }
            submitting.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page page-narrow",
            header {
                class: "page-header",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_navigate.call(Destination::Events),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    span { "Back to Events" }
                }
                h1 { "Create Event" }
            }

            if let Some(message) = banner() {
                Banner { message }
            }

            form {
                class: "event-form",
                onsubmit: handle_submit,
                EventFormFields { draft, errors }
                div {
                    class: "form-actions",
                    button {
                        class: "btn btn-outline",
                        r#type: "button",
                        onclick: move |_| on_navigate.call(Destination::Events),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: submitting(),
                        if submitting() { "Creating..." } else { "Create Event" }
                    }
                }
            }
        }
    }
}
