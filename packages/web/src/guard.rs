//! Route guard for pages that need a signed-in user.

use dioxus::prelude::*;
use ui::{guard_decision, use_auth, GuardDecision};

use crate::Route;

/// Render `children` when a token is held, otherwise replace the current
/// route with the destination the guard names (the login page).
#[component]
pub fn Protected(children: Element) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    match guard_decision(&auth().credentials) {
        GuardDecision::Render => rsx! {
            {children}
        },
        GuardDecision::Redirect(destination) => {
            if let Some(route) = Route::from_destination(destination) {
                nav.replace(route);
            }
            rsx! {}
        }
    }
}
