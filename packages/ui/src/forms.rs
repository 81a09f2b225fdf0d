//! # Client-side form validation
//!
//! Each form is a plain struct mirroring its inputs. `validate` runs the same
//! checks, in the same order, that the page shows to the user; the submit
//! flows in [`crate::submit`] call it before any request is built, so an
//! invalid form never reaches the backend.
//!
//! | Form | Checks, in order |
//! |------|------------------|
//! | [`LoginForm`] | email present, password present |
//! | [`SignupForm`] | email present, passwords match, password length |
//! | [`ResetForm`] | code length, passwords match, password length |
//! | [`NoteForm`] | content present, page number positive |
//!
//! Verification codes go through [`validate_otp`] and are cleaned as typed by
//! [`sanitize_otp`].

use api::{ApiError, NoteInput};
use thiserror::Error;

/// Digits in a one-time code.
pub const OTP_LENGTH: usize = 6;
/// Shortest password accepted at signup and reset.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A validation failure. The message is shown as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Email is required")]
    EmailRequired,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Please enter 6-digit code")]
    OtpLength,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Note content is required")]
    ContentRequired,
    #[error("Page number must be a positive whole number")]
    InvalidPage,
    #[error("Tag name is required")]
    TagNameRequired,
}

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Rejected before any request was sent.
    #[error(transparent)]
    Invalid(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl SubmitError {
    /// Text for the inline error slot: validation messages verbatim, backend
    /// failures via [`ApiError::message_or`].
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            SubmitError::Invalid(e) => e.to_string(),
            SubmitError::Api(e) => e.message_or(fallback),
        }
    }
}

/// Keep the digits of `raw`, at most [`OTP_LENGTH`] of them.
pub fn sanitize_otp(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(OTP_LENGTH)
        .collect()
}

pub fn validate_otp(code: &str) -> Result<(), FormError> {
    if code.len() == OTP_LENGTH && code.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        Err(FormError::OtpLength)
    }
}

fn validate_new_password(password: &str, confirm: &str) -> Result<(), FormError> {
    if password != confirm {
        return Err(FormError::PasswordMismatch);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(FormError::PasswordTooShort);
    }
    Ok(())
}

fn required_email(email: &str) -> Result<&str, FormError> {
    let email = email.trim();
    if email.is_empty() {
        Err(FormError::EmailRequired)
    } else {
        Ok(email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), FormError> {
        required_email(&self.email)?;
        if self.password.is_empty() {
            return Err(FormError::PasswordRequired);
        }
        Ok(())
    }

    pub fn email(&self) -> &str {
        self.email.trim()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<(), FormError> {
        required_email(&self.email)?;
        validate_new_password(&self.password, &self.confirm_password)
    }

    pub fn email(&self) -> &str {
        self.email.trim()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForgotForm {
    pub email: String,
}

impl ForgotForm {
    pub fn validate(&self) -> Result<&str, FormError> {
        required_email(&self.email)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResetForm {
    pub otp: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ResetForm {
    pub fn validate(&self) -> Result<(), FormError> {
        validate_otp(&self.otp)?;
        validate_new_password(&self.new_password, &self.confirm_password)
    }
}

/// The add-note form. Optional fields are free text until converted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub content: String,
    pub emotion: String,
    pub page_number: String,
    pub tags: String,
}

impl NoteForm {
    /// Build the request body: trimmed content, blank emotion as `None`,
    /// an optional positive page number, and the parsed tag list.
    pub fn to_input(&self) -> Result<NoteInput, FormError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(FormError::ContentRequired);
        }

        let emotion = Some(self.emotion.trim())
            .filter(|e| !e.is_empty())
            .map(str::to_string);

        let page = self.page_number.trim();
        let page_number = if page.is_empty() {
            None
        } else {
            match page.parse::<u32>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(FormError::InvalidPage),
            }
        };

        Ok(NoteInput {
            content: content.to_string(),
            emotion,
            page_number,
            tags: parse_tags(&self.tags),
        })
    }

    /// Append `tag` to the comma-separated field unless already present.
    pub fn add_tag(&mut self, tag: &str) {
        let mut tags = parse_tags(&self.tags);
        if !tags.iter().any(|t| t.eq_ignore_ascii_case(tag)) {
            tags.push(tag.trim().to_string());
        }
        self.tags = tags.join(", ");
    }
}

/// Split a comma-separated tag field, trimming and dropping blanks.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_otp_keeps_six_digits() {
        assert_eq!(sanitize_otp("12a3-45 678"), "123456");
        assert_eq!(sanitize_otp("abc"), "");
        assert_eq!(sanitize_otp("０１2"), "2");
    }

    #[test]
    fn test_validate_otp() {
        assert_eq!(validate_otp("12345"), Err(FormError::OtpLength));
        assert_eq!(validate_otp("1234567"), Err(FormError::OtpLength));
        assert_eq!(validate_otp("12345a"), Err(FormError::OtpLength));
        assert_eq!(validate_otp("123456"), Ok(()));
    }

    #[test]
    fn test_reset_checks_run_in_order() {
        let mut form = ResetForm {
            otp: "123".into(),
            new_password: "abc".into(),
            confirm_password: "xyz".into(),
        };
        assert_eq!(form.validate(), Err(FormError::OtpLength));

        form.otp = "123456".into();
        assert_eq!(form.validate(), Err(FormError::PasswordMismatch));

        form.confirm_password = "abc".into();
        assert_eq!(form.validate(), Err(FormError::PasswordTooShort));

        form.new_password = "abcdef".into();
        form.confirm_password = "abcdef".into();
        assert_eq!(form.validate(), Ok(()));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FormError::OtpLength.to_string(), "Please enter 6-digit code");
        assert_eq!(
            FormError::PasswordMismatch.to_string(),
            "Passwords do not match"
        );
        assert_eq!(
            FormError::PasswordTooShort.to_string(),
            "Password must be at least 6 characters"
        );
    }

    #[test]
    fn test_signup_requires_email() {
        let form = SignupForm {
            email: "  ".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        };
        assert_eq!(form.validate(), Err(FormError::EmailRequired));
    }

    #[test]
    fn test_note_form_builds_input() {
        let form = NoteForm {
            content: "  Small habits compound.  ".into(),
            emotion: "   ".into(),
            page_number: "42".into(),
            tags: "habits, , mindset ,".into(),
        };
        let input = form.to_input().unwrap();
        assert_eq!(input.content, "Small habits compound.");
        assert_eq!(input.emotion, None);
        assert_eq!(input.page_number, Some(42));
        assert_eq!(input.tags, vec!["habits", "mindset"]);
    }

    #[test]
    fn test_note_form_rejects_blank_content_and_bad_page() {
        let mut form = NoteForm {
            content: "   ".into(),
            ..NoteForm::default()
        };
        assert_eq!(form.to_input(), Err(FormError::ContentRequired));

        form.content = "Quote".into();
        form.page_number = "0".into();
        assert_eq!(form.to_input(), Err(FormError::InvalidPage));
        form.page_number = "twelve".into();
        assert_eq!(form.to_input(), Err(FormError::InvalidPage));
    }

    #[test]
    fn test_add_tag_skips_duplicates() {
        let mut form = NoteForm {
            tags: "habits".into(),
            ..NoteForm::default()
        };
        form.add_tag("Habits");
        form.add_tag("focus");
        assert_eq!(form.tags, "habits, focus");
    }

    #[test]
    fn test_submit_error_message() {
        let invalid = SubmitError::from(FormError::PasswordMismatch);
        assert_eq!(invalid.message_or("Failed"), "Passwords do not match");

        let api = SubmitError::from(ApiError::Network("down".into()));
        assert_eq!(api.message_or("Failed to reset password"), "Failed to reset password");
    }
}
