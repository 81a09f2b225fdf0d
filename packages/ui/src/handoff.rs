//! Values the auth pages pass to each other across navigation.
//!
//! Signup hands the email and password to the code page, forgot-password
//! hands the email to the reset page, and reset hands a one-shot message to
//! the login page. Nothing here is persisted; a reload starts over.

use dioxus::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSignup {
    pub email: String,
    /// Kept so the code can be re-sent.
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthHandoff {
    signup: Option<PendingSignup>,
    reset_email: Option<String>,
    flash: Option<String>,
}

impl AuthHandoff {
    pub fn begin_signup(&mut self, email: impl Into<String>, password: impl Into<String>) {
        self.signup = Some(PendingSignup {
            email: email.into(),
            password: password.into(),
        });
    }

    pub fn signup(&self) -> Option<&PendingSignup> {
        self.signup.as_ref()
    }

    pub fn finish_signup(&mut self) {
        self.signup = None;
    }

    pub fn begin_reset(&mut self, email: impl Into<String>) {
        self.reset_email = Some(email.into());
    }

    pub fn reset_email(&self) -> Option<&str> {
        self.reset_email.as_deref()
    }

    /// Close the reset flow and leave a message for the login page.
    pub fn finish_reset(&mut self, flash: impl Into<String>) {
        self.reset_email = None;
        self.flash = Some(flash.into());
    }

    /// Forget everything in flight, e.g. on logout.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// The pending flash message, removed on read.
    pub fn take_flash(&mut self) -> Option<String> {
        self.flash.take()
    }
}

pub fn use_handoff() -> Signal<AuthHandoff> {
    use_context::<Signal<AuthHandoff>>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finished_signup_forgets_password() {
        let mut handoff = AuthHandoff::default();
        handoff.begin_signup("ada@example.com", "hunter22");
        handoff.finish_signup();
        assert_eq!(handoff.signup(), None);
    }

    #[test]
    fn test_clear_drops_everything() {
        let mut handoff = AuthHandoff::default();
        handoff.begin_signup("ada@example.com", "hunter22");
        handoff.begin_reset("ada@example.com");
        handoff.finish_reset("done");
        handoff.clear();
        assert_eq!(handoff, AuthHandoff::default());
    }

    #[test]
    fn test_flash_is_shown_once() {
        let mut handoff = AuthHandoff::default();
        handoff.begin_reset("ada@example.com");
        assert_eq!(handoff.reset_email(), Some("ada@example.com"));

        handoff.finish_reset("Password reset successful! Please log in.");
        assert_eq!(handoff.reset_email(), None);
        assert_eq!(
            handoff.take_flash().as_deref(),
            Some("Password reset successful! Please log in.")
        );
        assert_eq!(handoff.take_flash(), None);
    }

    #[test]
    fn test_signup_handoff() {
        let mut handoff = AuthHandoff::default();
        assert!(handoff.signup().is_none());
        handoff.begin_signup("ada@example.com", "hunter22");
        assert_eq!(handoff.signup().unwrap().password, "hunter22");
        handoff.finish_signup();
        assert!(handoff.signup().is_none());
    }
}
