//! Gate for pages that need a signed-in user.

use api::AuthState;
use dioxus::prelude::*;

use crate::auth::use_auth;

/// What the guard does for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session resolution still pending.
    Loading,
    /// No user: leave for the login page.
    Redirect,
    Render,
}

impl GuardDecision {
    pub fn for_state(state: &AuthState) -> Self {
        if state.loading {
            GuardDecision::Loading
        } else if state.is_authenticated() {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect
        }
    }
}

/// Renders `children` only for a signed-in user.
///
/// The router lives in the platform crate, so redirecting is delegated to
/// `on_unauthenticated`, which should replace the current history entry.
#[component]
pub fn RouteGuard(on_unauthenticated: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth();

    use_effect(move || {
        if GuardDecision::for_state(&auth()) == GuardDecision::Redirect {
            tracing::debug!("no session, leaving guarded page");
            on_unauthenticated.call(());
        }
    });

    match GuardDecision::for_state(&auth()) {
        GuardDecision::Loading => rsx! {
            div { class: "page-status", "Loading..." }
        },
        GuardDecision::Redirect => rsx! {},
        GuardDecision::Render => rsx! {
            {children}
        },
    }
}
