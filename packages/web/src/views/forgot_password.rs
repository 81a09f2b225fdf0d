use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, CardContent, CardHeader, Input, Label};
use ui::forms::ForgotForm;
use ui::icons::FaBookOpen;
use ui::submit::submit_forgot;
use ui::{use_app, use_handoff, Icon};

use crate::Route;

#[component]
pub fn ForgotPassword() -> Element {
    let app = use_app();
    let mut handoff = use_handoff();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let form = ForgotForm { email: email() };
            match submit_forgot(&app.client, &app.store, &form).await {
                Ok(_) => {
                    handoff.write().begin_reset(form.email.trim());
                    nav.push(Route::ResetPassword {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.message_or("Failed to send reset code")));
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
                    title: "Reset Your Password",
                    description: "Enter your email and we'll send you a verification code",
                }
                CardContent {
                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

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

                        if let Some(err) = error() {
                            p { class: "form-error", "{err}" }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading(),
                            if loading() { "Sending code..." } else { "Send Reset Code" }
                        }

                        p {
                            class: "muted",
                            "Remember your password? "
                            Link { to: Route::Login {}, "Sign In" }
                        }
                    }
                }
            }
        }
    }
}
