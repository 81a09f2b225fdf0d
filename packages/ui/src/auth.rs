//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the one `Signal<AuthState>` of the application.
//! Views read it through [`use_auth`]; the only writers are the initial
//! resolution, [`recheck_session`] and [`LogoutButton`]. Nothing polls the
//! backend in the background.

use api::session::{resolve_session, sign_out};
use api::AuthState;
use dioxus::prelude::*;

use crate::components::{Button, ButtonVariant};
use crate::context::{use_app, AppContext};
use crate::handoff::{use_handoff, AuthHandoff};
use crate::icons::FaRightFromBracket;
use crate::Icon;

/// Get the current authentication state.
/// Returns a signal that updates when the user logs in or out.
pub fn use_auth() -> Signal<AuthState> {
    use_context::<Signal<AuthState>>()
}

/// Ask the backend again who is signed in and publish the answer.
pub async fn recheck_session(mut auth: Signal<AuthState>, app: &AppContext) -> AuthState {
    let state = resolve_session(&app.client, &app.store).await;
    auth.set(state.clone());
    state
}

/// Provider component that manages authentication state.
/// Also provides the [`AuthHandoff`] used between the auth pages.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let app = use_app();
    let auth_state = use_context_provider(|| Signal::new(AuthState::default()));
    use_context_provider(|| Signal::new(AuthHandoff::default()));

    // Resolve the session on mount
    let _ = use_resource(move || {
        let app = app.clone();
        async move {
            recheck_session(auth_state, &app).await;
        }
    });

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Log out".to_string())] label: String,
    #[props(default)] class: String,
    on_logged_out: EventHandler<()>,
) -> Element {
    let mut auth_state = use_auth();
    let mut handoff = use_handoff();
    let app = use_app();

    let onclick = move |_| {
        let app = app.clone();
        spawn(async move {
            // The local credential is gone either way
            if let Err(e) = sign_out(&app.client, &app.store).await {
                tracing::warn!("logout request failed: {e}");
            }
            handoff.write().clear();
            auth_state.set(AuthState::anonymous());
            on_logged_out.call(());
        });
    };

    rsx! {
        Button {
            variant: ButtonVariant::Ghost,
            class: "{class}",
            onclick: onclick,
            Icon { icon: FaRightFromBracket, width: 14, height: 14 }
            span { "{label}" }
        }
    }
}
