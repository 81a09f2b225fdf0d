//! This crate contains all shared UI for the workspace: primitive components,
//! session wiring, the signed-in shell, and the view logic the pages run.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod views;

pub const THEME_CSS: Asset = asset!("/assets/theme.css");

mod context;
pub use context::{use_app, AppContext, PlatformStore};

mod auth;
pub use auth::{recheck_session, use_auth, LogoutButton, SessionProvider};
pub use api::AuthState;

mod guard;
pub use guard::{GuardDecision, RouteGuard};

mod handoff;
pub use handoff::{use_handoff, AuthHandoff, PendingSignup};

pub mod forms;
pub mod submit;
pub mod library;

mod otp_timer;
pub use otp_timer::{use_resend_timer, ResendTimer, RESEND_COOLDOWN_SECS};

mod theme;
pub use theme::{apply_theme, ThemeProvider, ThemeSignal, ThemeToggle};

mod sidebar;
pub use sidebar::{AppSidebar, NavItem};

mod time;
