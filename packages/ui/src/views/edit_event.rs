use dioxus::prelude::*;

use crate::auth::{expire_if_unauthorized, use_auth, use_client, use_config};
use crate::display::short_id;
use crate::flows::{self, SubmitOutcome, EDIT_LOAD_FAILED, UPDATE_SUCCESS, UPDATE_UNCHANGED};
use crate::forms::{edit_submit_disabled, local_now, EventDraft, FieldErrors};
use crate::icons::{FaArrowLeft, FaTrashCan};
use crate::listing::Loadable;
use crate::navigation::Destination;
use crate::notify::BrowserNotifier;
use crate::platform::sleep_ms;
use crate::views::{Banner, ErrorState, EventFormFields, LoadingState};
use crate::Icon;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Edit form for an existing event.
///
/// The loaded event is kept as a snapshot; submit stays disabled until the
/// draft differs from it, and a successful save becomes the new snapshot.
#[component]
pub fn EditEventView(event_id: String, on_navigate: EventHandler<Destination>) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| event_id.clone());
    if *id_signal.peek() != event_id {
        id_signal.set(event_id.clone());
    }

    let mut auth = use_auth();
    let client = use_client();
    let redirect_delay = use_config().ui.redirect_delay_ms;

    let mut draft = use_signal(EventDraft::default);
    let mut snapshot = use_signal(|| Option::<EventDraft>::None);
    let mut errors = use_signal(FieldErrors::default);
    let mut load_state = use_signal(|| Loadable::<()>::Loading);
    let mut banner = use_signal(|| Option::<String>::None);
    let mut notice = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let loader_client = client.clone();
    let mut loader = use_resource(move || {
        let client = loader_client.clone();
        let id = id_signal();
        async move {
            load_state.set(Loadable::Loading);
            match flows::load_edit_draft(&client, &id).await {
                Ok(loaded) => {
                    draft.set(loaded.clone());
                    snapshot.set(Some(loaded));
                    load_state.set(Loadable::Ready(()));
                }
                Err(e) => {
                    tracing::error!("Failed to load event {}: {}", id, e);
                    // The route guard redirects once the identity is cleared.
                    if expire_if_unauthorized(&mut auth, &e) {
                        return;
                    }
                    load_state.set(Loadable::Failed(EDIT_LOAD_FAILED.to_string()));
                }
            }
        }
    });

    let submit_client = client.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        let client = submit_client.clone();
        let id = id_signal();
        let submitted = draft();
        let baseline = snapshot();
        banner.set(None);
        notice.set(None);
        submitting.set(true);
        spawn(async move {
            let outcome =
                flows::submit_event_update(&client, &id, &submitted, baseline.as_ref(), local_now()).await;
            match outcome {
                SubmitOutcome::Invalid(field_errors) => {
                    errors.set(field_errors);
                    submitting.set(false);
                }
                SubmitOutcome::Failed(message) => {
                    banner.set(Some(message));
                    submitting.set(false);
                }
                SubmitOutcome::Unchanged => {
                    notice.set(Some(UPDATE_UNCHANGED.to_string()));
                    sleep_ms(redirect_delay).await;
                    on_navigate.call(Destination::EventDetail(id));
                }
                SubmitOutcome::Saved => {
                    notice.set(Some(UPDATE_SUCCESS.to_string()));
                    snapshot.set(Some(submitted));
                    sleep_ms(redirect_delay).await;
                    on_navigate.call(Destination::EventDetail(id));
                }
            }
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

    let disabled = edit_submit_disabled(&draft(), snapshot().as_ref(), submitting());
    let id = id_signal();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "page page-narrow",
            header {
                class: "page-header",
                button {
                    class: "btn btn-ghost",
                    onclick: move |_| on_navigate.call(Destination::Back),
                    Icon { icon: FaArrowLeft, width: 14, height: 14 }
                    span { "Back" }
                }
                h1 { "Edit Event" }
                span { class: "muted mono", "#{short_id(&id)}" }
            }

            {match load_state() {
                Loadable::Loading => rsx! { LoadingState { message: "Loading event..." } },
                Loadable::Failed(message) => rsx! {
                    ErrorState {
                        title: "Could not load event",
                        message,
                        on_retry: move |_| loader.restart(),
                        on_back: move |_| on_navigate.call(Destination::Events),
                        back_label: "Back to Events",
                    }
                },
                Loadable::Ready(()) => rsx! {
                    if let Some(message) = banner() {
                        Banner { message }
                    }
                    if let Some(message) = notice() {
                        Banner { message, success: true }
                    }

                    form {
                        class: "event-form",
                        onsubmit: handle_submit,
                        EventFormFields {
                            draft,
                            errors,
                            on_edit: move |_| notice.set(None),
                        }
                        div {
                            class: "form-actions",
                            button {
                                class: "btn btn-danger",
                                r#type: "button",
                                onclick: handle_delete,
                                Icon { icon: FaTrashCan, width: 14, height: 14 }
                                span { "Delete Event" }
                            }
                            button {
                                class: "btn btn-outline",
                                r#type: "button",
                                onclick: move |_| on_navigate.call(Destination::EventDetail(id_signal())),
                                "Cancel"
                            }
                            button {
                                class: "btn btn-primary",
                                r#type: "submit",
                                disabled,
                                if submitting() { "Saving..." } else { "Save Changes" }
                            }
                        }
                    }
                },
            }}
        }
    }
}
