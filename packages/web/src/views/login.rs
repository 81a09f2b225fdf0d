//! Login page: email and password.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, CardContent, CardHeader, Input, Label};
use ui::forms::LoginForm;
use ui::icons::FaBookOpen;
use ui::submit::submit_login;
use ui::{use_app, use_auth, use_handoff, Icon};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let app = use_app();
    let mut auth = use_auth();
    let mut handoff = use_handoff();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // Left by the reset flow; shown once
    let mut flash = use_signal(|| Option::<String>::None);
    use_effect(move || {
        if let Some(message) = handoff.write().take_flash() {
            flash.set(Some(message));
        }
    });

    // If already logged in, go to the library
    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::Library {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let form = LoginForm {
                email: email(),
                password: password(),
            };
            match submit_login(&app.client, &app.store, &form).await {
                Ok(state) => {
                    auth.set(state);
                    nav.replace(Route::Library {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.message_or("Invalid email or password")));
                }
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            Card {
                class: "auth-card",
                div {
                    class: "auth-logo",
                    Icon { icon: FaBookOpen, width: 48, height: 48 }
                }
                CardHeader {
                    title: "Welcome Back",
                    description: "Sign in to your reading journal",
                }
                CardContent {
                    form {
                        class: "auth-form",
                        onsubmit: handle_login,

                        if let Some(message) = flash() {
                            p { class: "form-flash", "{message}" }
                        }

                        div {
                            class: "form-field",
                            Label { html_for: "email", "Email" }
                            Input {
                                id: "email",
                                r#type: "email",
                                placeholder: "your@email.com",
                                value: email(),
                                required: true,
                                autofocus: true,
                                oninput: move |evt: FormEvent| email.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            Label { html_for: "password", "Password" }
                            Input {
                                id: "password",
                                r#type: "password",
                                value: password(),
                                required: true,
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }

                        if let Some(err) = error() {
                            p { class: "form-error", "{err}" }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Signing in..." } else { "Sign In" }
                        }

                        div {
                            class: "auth-links",
                            Link { to: Route::ForgotPassword {}, "Forgot password?" }
                            Link { to: Route::Signup {}, "Create an account" }
                        }
                    }
                }
            }
        }
    }
}
