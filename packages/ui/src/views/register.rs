use dioxus::prelude::*;

use crate::auth::{use_auth, use_client};
use crate::flows;
use crate::forms::SignupForm;
use crate::navigation::Destination;
use crate::notify::BrowserNotifier;
use crate::views::Banner;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Account creation. Success leads to the login page, not into the app.
#[component]
pub fn RegisterView(on_navigate: EventHandler<Destination>) -> Element {
    let auth = use_auth();
    let client = use_client();
    let mut form = use_signal(SignupForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if auth.peek().is_authenticated() {
            on_navigate.call(Destination::Events);
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if loading() {
            return;
        }
        let client = client.clone();
        error.set(None);
        loading.set(true);
        spawn(async move {
            match flows::submit_signup(&client, &BrowserNotifier, &form()).await {
                Ok(()) => on_navigate.call(Destination::Login),
                Err(message) => error.set(Some(message)),
            }
            loading.set(false);
        });
    };

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        div {
            class: "auth-page",
            div {
                class: "auth-card",
                h1 { "Create an account" }
                p { class: "muted", "Join to register for upcoming events." }

                if let Some(err) = error() {
                    Banner { message: err }
                }

                form {
                    onsubmit: handle_submit,
                    label { r#for: "register-name", "Name" }
                    input {
                        id: "register-name",
                        r#type: "text",
                        required: true,
                        value: form().name,
                        oninput: move |evt: FormEvent| form.write().name = evt.value(),
                    }
                    label { r#for: "register-email", "Email" }
                    input {
                        id: "register-email",
                        r#type: "email",
                        required: true,
                        placeholder: "you@example.com",
                        value: form().email,
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    label { r#for: "register-password", "Password" }
                    input {
                        id: "register-password",
                        r#type: "password",
                        required: true,
                        value: form().password,
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Creating account..." } else { "Register" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Already have an account? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(Destination::Login);
                        },
                        "Login"
                    }
                }
            }
        }
    }
}
