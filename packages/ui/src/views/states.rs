use dioxus::prelude::*;

use crate::icons::FaTriangleExclamation;
use crate::Icon;

/// Spinner with a caption, shown while a view's data is loading.
#[component]
pub fn LoadingState(#[props(default = "Loading...".to_string())] message: String) -> Element {
    rsx! {
        div {
            class: "state state-loading",
            div { class: "spinner" }
            p { "{message}" }
        }
    }
}

/// A failed load, with optional recovery actions.
#[component]
pub fn ErrorState(
    title: String,
    message: String,
    on_retry: Option<EventHandler<()>>,
    on_back: Option<EventHandler<()>>,
    #[props(default = "Go back".to_string())] back_label: String,
) -> Element {
    rsx! {
        div {
            class: "state state-error",
            Icon { icon: FaTriangleExclamation, width: 32, height: 32 }
            h2 { "{title}" }
            p { "{message}" }
            div {
                class: "state-actions",
                if let Some(retry) = on_retry {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| retry.call(()),
                        "Try again"
                    }
                }
                if let Some(back) = on_back {
                    button {
                        class: "btn btn-outline",
                        onclick: move |_| back.call(()),
                        "{back_label}"
                    }
                }
            }
        }
    }
}

/// Nothing to show; children carry the call to action.
#[component]
pub fn EmptyState(title: String, message: String, children: Element) -> Element {
    rsx! {
        div {
            class: "state state-empty",
            h2 { "{title}" }
            p { "{message}" }
            {children}
        }
    }
}

/// Inline message above a form or page body.
#[component]
pub fn Banner(message: String, #[props(default = false)] success: bool) -> Element {
    let class = if success { "banner banner-success" } else { "banner banner-error" };
    rsx! {
        div { class: "{class}", role: "alert", "{message}" }
    }
}
