//! Signup page. Creates nothing yet: the account exists once the emailed code
//! is verified on the next page.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, CardContent, CardHeader, Input, Label};
use ui::forms::{SignupForm, MIN_PASSWORD_LEN};
use ui::icons::FaBookOpen;
use ui::submit::submit_signup;
use ui::{use_app, use_auth, use_handoff, Icon};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let app = use_app();
    let auth = use_auth();
    let mut handoff = use_handoff();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    use_effect(move || {
        if auth().is_authenticated() {
            nav.replace(Route::Library {});
        }
    });

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);

            let form = SignupForm {
                email: email(),
                password: password(),
                confirm_password: confirm_password(),
            };
            loading.set(true);
            match submit_signup(&app.client, &app.store, &form).await {
                Ok(_) => {
                    handoff
                        .write()
                        .begin_signup(form.email(), form.password.clone());
                    nav.push(Route::VerifyOtp {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.message_or("Failed to send verification code")));
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
                    title: "Create Account",
                    description: "Start your reading journal",
                }
                CardContent {
                    form {
                        class: "auth-form",
                        onsubmit: handle_signup,

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
                                placeholder: "At least {MIN_PASSWORD_LEN} characters",
                                value: password(),
                                required: true,
                                oninput: move |evt: FormEvent| password.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            Label { html_for: "confirmPassword", "Confirm Password" }
                            Input {
                                id: "confirmPassword",
                                r#type: "password",
                                placeholder: "Re-enter password",
                                value: confirm_password(),
                                required: true,
                                oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                            }
                        }

                        if let Some(err) = error() {
                            p { class: "form-error", "{err}" }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Sending code..." } else { "Sign Up" }
                        }

                        p {
                            class: "muted",
                            "Already have an account? "
                            Link { to: Route::Login {}, "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
