//! Signup code entry with a resend countdown.

use dioxus::prelude::*;
use ui::components::{Button, ButtonVariant, Card, CardContent, Input};
use ui::forms::{sanitize_otp, OTP_LENGTH};
use ui::icons::FaBookOpen;
use ui::submit::{resend_code, submit_verification};
use ui::{use_app, use_auth, use_handoff, use_resend_timer, Icon};

use crate::Route;

#[component]
pub fn VerifyOtp() -> Element {
    let app = use_app();
    let mut auth = use_auth();
    let mut handoff = use_handoff();
    let nav = use_navigator();
    let mut otp = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);
    let mut resending = use_signal(|| false);
    let mut timer = use_resend_timer();

    // Nothing to verify without a pending signup
    use_effect(move || {
        if handoff().signup().is_none() && !auth().is_authenticated() {
            nav.replace(Route::Signup {});
        }
    });

    let Some(pending) = handoff().signup().cloned() else {
        return rsx! {};
    };

    let email = pending.email.clone();
    let verify_app = app.clone();
    let verify_email = pending.email.clone();
    let handle_verify = move |evt: FormEvent| {
        evt.prevent_default();
        let app = verify_app.clone();
        let email = verify_email.clone();
        spawn(async move {
            error.set(None);
            loading.set(true);
            match submit_verification(&app.client, &app.store, &email, &otp()).await {
                Ok(state) => {
                    auth.set(state);
                    // Drop the pending password once the account exists
                    handoff.write().finish_signup();
                    nav.replace(Route::Library {});
                }
                Err(e) => {
                    loading.set(false);
                    error.set(Some(e.message_or("Invalid verification code")));
                }
            }
        });
    };

    let handle_resend = move |_| {
        let app = app.clone();
        let pending = pending.clone();
        spawn(async move {
            resending.set(true);
            error.set(None);
            match resend_code(&app.client, &app.store, &pending.email, &pending.password).await {
                Ok(_) => timer.write().reset(),
                Err(e) => {
                    tracing::warn!("resend failed: {e}");
                    error.set(Some("Failed to resend code".to_string()));
                }
            }
            resending.set(false);
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
                    h2 { class: "card-title", "Enter Verification Code" }
                    p {
                        class: "card-description",
                        "We sent a {OTP_LENGTH}-digit code to"
                        br {}
                        strong { "{email}" }
                    }
                }
                CardContent {
                    form {
                        class: "auth-form",
                        onsubmit: handle_verify,

                        div {
                            class: "form-field",
                            Input {
                                class: "otp-input",
                                r#type: "text",
                                inputmode: "numeric",
                                maxlength: OTP_LENGTH as u32,
                                placeholder: "000000",
                                value: otp(),
                                autofocus: true,
                                oninput: move |evt: FormEvent| otp.set(sanitize_otp(&evt.value())),
                            }
                            p { class: "form-hint", "Code expires in 5 minutes" }
                        }

                        if let Some(err) = error() {
                            p { class: "form-error", "{err}" }
                        }

                        Button {
                            variant: ButtonVariant::Primary,
                            r#type: "submit",
                            disabled: loading() || otp().len() != OTP_LENGTH,
                            if loading() { "Verifying..." } else { "Verify Email" }
                        }

                        Button {
                            variant: ButtonVariant::Ghost,
                            disabled: !timer().can_resend() || resending(),
                            onclick: handle_resend,
                            if resending() { "Sending..." } else { "{timer().label()}" }
                        }
                    }
                }
            }
        }
    }
}
