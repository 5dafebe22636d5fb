//! Form validation. Every check runs and all failures are reported together.

use scribe_types::api::PostForm;

use crate::sanitize::strip_tags;

pub const USERNAME_MIN: usize = 3;
pub const USERNAME_MAX: usize = 12;
pub const PASSWORD_MIN: usize = 4;
pub const PASSWORD_MAX: usize = 12;

pub const USERNAME_TAKEN: &str = "That username is already taken.";
pub const INVALID_CREDENTIALS: &str = "Invalid username/password";

/// Check an already trimmed username for presence, length and charset.
/// Availability is checked against the store separately.
pub fn username_errors(username: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if username.is_empty() {
        errors.push("You must provide a username.".to_string());
        return errors;
    }

    let len = username.chars().count();
    if len < USERNAME_MIN {
        errors.push(format!("Username must be at least {USERNAME_MIN} characters."));
    }
    if len > USERNAME_MAX {
        errors.push(format!("Username cannot exceed {USERNAME_MAX} characters."));
    }
    if !username.chars().all(|c| c.is_ascii_alphanumeric()) {
        errors.push("Username can only contain letters and numbers.".to_string());
    }
    errors
}

pub fn password_errors(password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if password.is_empty() {
        errors.push("You must provide a password.".to_string());
        return errors;
    }

    let len = password.chars().count();
    if len < PASSWORD_MIN {
        errors.push(format!("Password must be at least {PASSWORD_MIN} characters."));
    }
    if len > PASSWORD_MAX {
        errors.push(format!("Password cannot exceed {PASSWORD_MAX} characters."));
    }
    errors
}

/// Login only checks presence; anything else is decided by the credential
/// lookup so both failure modes look the same.
pub fn login_errors(username: &str, password: &str) -> Vec<String> {
    if username.trim().is_empty() || password.is_empty() {
        vec![INVALID_CREDENTIALS.to_string()]
    } else {
        Vec::new()
    }
}

/// Sanitized post fields, ready to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostInput {
    pub title: String,
    pub body: String,
}

/// Strip markup from both fields and require each to be non-empty afterwards.
pub fn check_post(form: &PostForm) -> (PostInput, Vec<String>) {
    let input = PostInput {
        title: strip_tags(&form.title),
        body: strip_tags(&form.body),
    };

    let mut errors = Vec::new();
    if input.title.is_empty() {
        errors.push("You must provide a title.".to_string());
    }
    if input.body.is_empty() {
        errors.push("You must provide body content.".to_string());
    }
    (input, errors)
}
