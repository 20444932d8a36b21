use dioxus::prelude::*;

use crate::auth::{sign_in, use_auth, use_client};
use crate::flows;
use crate::forms::LoginForm;
use crate::navigation::Destination;
use crate::notify::BrowserNotifier;
use crate::platform::make_credential_store;
use crate::views::Banner;

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Email/password sign-in.
#[component]
pub fn LoginView(on_navigate: EventHandler<Destination>) -> Element {
    let mut auth = use_auth();
    let client = use_client();
    let mut form = use_signal(LoginForm::default);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Already signed in: skip the form
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
            let store = make_credential_store();
            match flows::submit_login(&client, &store, &BrowserNotifier, &form()).await {
                Ok(credentials) => {
                    sign_in(&mut auth, credentials);
                    on_navigate.call(Destination::Events);
                }
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
                h1 { "Welcome back" }
                p { class: "muted", "Sign in to manage and join events." }

                if let Some(err) = error() {
                    Banner { message: err }
                }

                form {
                    onsubmit: handle_submit,
                    label { r#for: "login-email", "Email" }
                    input {
                        id: "login-email",
                        r#type: "email",
                        required: true,
                        placeholder: "you@example.com",
                        value: form().email,
                        oninput: move |evt: FormEvent| form.write().email = evt.value(),
                    }
                    label { r#for: "login-password", "Password" }
                    input {
                        id: "login-password",
                        r#type: "password",
                        required: true,
                        value: form().password,
                        oninput: move |evt: FormEvent| form.write().password = evt.value(),
                    }
                    button {
                        class: "btn btn-primary btn-block",
                        r#type: "submit",
                        disabled: loading(),
                        if loading() { "Signing in..." } else { "Login" }
                    }
                }

                p {
                    class: "auth-switch",
                    "Don't have an account? "
                    a {
                        href: "#",
                        onclick: move |evt: MouseEvent| {
                            evt.prevent_default();
                            on_navigate.call(Destination::Register);
                        },
                        "Register"
                    }
                }
            }
        }
    }
}
