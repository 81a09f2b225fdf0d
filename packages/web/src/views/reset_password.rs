use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, CardContent, Input, Label};
use ui::forms::{sanitize_otp, ResetForm, MIN_PASSWORD_LEN, OTP_LENGTH};
use ui::icons::FaBookOpen;
use ui::submit::submit_reset;
use ui::{use_app, use_handoff, Icon};

use crate::Route;

const RESET_SUCCESS: &str = "Password reset successful! Please log in.";

#[component]
pub fn ResetPassword() -> Element {
    let app = use_app();
    let mut handoff = use_handoff();
    let nav = use_navigator();
    let mut otp = use_signal(String::new);
    let mut new_password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut finished = use_signal(|| false);

    let email = handoff().reset_email().map(str::to_string);

    use_effect(move || {
        if handoff().reset_email().is_none() && !finished() {
            nav.replace(Route::ForgotPassword {});
        }
    });

    let Some(email) = email else {
        return rsx! {};
    };

    let submit_email = email.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let app = app.clone();
        let email = submit_email.clone();
        spawn(async move {
            error.set(None);

            let form = ResetForm {
                otp: otp(),
                new_password: new_password(),
                confirm_password: confirm_password(),
            };
            loading.set(true);
            match submit_reset(&app.client, &app.store, &email, &form).await {
                Ok(_) => {
                    finished.set(true);
                    handoff.write().finish_reset(RESET_SUCCESS);
                    nav.replace(Route::Login {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.message_or("Failed to reset password")));
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
                div {
                    class: "card-header",
                    h2 { class: "card-title", "Reset Your Password" }
                    p {
                        class: "card-description",
                        "Enter the code sent to"
                        br {}
                        strong { "{email}" }
                    }
                }
                CardContent {
                    form {
                        class: "auth-form",
                        onsubmit: handle_submit,

                        div {
                            class: "form-field",
                            Label { html_for: "otp", "Verification Code" }
                            Input {
                                id: "otp",
                                class: "otp-input",
                                r#type: "text",
                                inputmode: "numeric",
                                maxlength: OTP_LENGTH as u32,
                                placeholder: "000000",
                                value: otp(),
                                required: true,
                                autofocus: true,
                                oninput: move |evt: FormEvent| otp.set(sanitize_otp(&evt.value())),
                            }
                        }

                        div {
                            class: "form-field",
                            Label { html_for: "newPassword", "New Password" }
                            Input {
                                id: "newPassword",
                                r#type: "password",
                                placeholder: "At least {MIN_PASSWORD_LEN} characters",
                                value: new_password(),
                                required: true,
                                oninput: move |evt: FormEvent| new_password.set(evt.value()),
                            }
                        }

                        div {
                            class: "form-field",
                            Label { html_for: "confirmPassword", "Confirm Password" }
                            Input {
                                id: "confirmPassword",
                                r#type: "password",
                                placeholder: "Re-enter new password",
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
                            if loading() { "Resetting password..." } else { "Reset Password" }
                        }
                    }
                }
            }
        }
    }
}
