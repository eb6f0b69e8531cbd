//! Field rules for the signup form. Each rule is a pure predicate; the ordered
//! check in [`ValidationRules::check`] stops at the first failure so the user
//! sees exactly one message.

use super::{credentials::Credentials, rejection::Rejection};
use regex::Regex;
use secrecy::ExposeSecret;
use std::sync::LazyLock;

/// Default minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 3;
/// Default minimum password length.
pub const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").ok());

// Optional +1 country code, area code with or without parentheses, then 3 and 4
// digits separated by nothing, a space, a dot or a dash.
static PHONE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r"^(\+?1[\s.-]?)?(\(\d{3}\)|\d{3})[\s.-]?\d{3}[\s.-]?\d{4}$").ok()
});

static USERNAME: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"^\S+$").ok());

/// Minimum lengths injected into the flow instead of hard-coded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_username_length: usize,
    pub min_password_length: usize,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_username_length: MIN_USERNAME_LENGTH,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl ValidationRules {
    #[must_use]
    pub const fn new(min_username_length: usize, min_password_length: usize) -> Self {
        Self {
            min_username_length,
            min_password_length,
        }
    }

    /// Runs the rules in order: email, phone, username, password.
    ///
    /// # Errors
    /// Returns the [`Rejection`] of the first rule that fails; later rules are
    /// not evaluated.
    pub fn check(&self, credentials: &Credentials) -> Result<(), Rejection> {
        if !valid_email(&credentials.email) {
            return Err(Rejection::InvalidEmail);
        }

        if !valid_phone(&credentials.phone) {
            return Err(Rejection::InvalidPhone);
        }

        if !valid_username(&credentials.username, self.min_username_length) {
            return Err(Rejection::InvalidUsername {
                min: self.min_username_length,
            });
        }

        if !valid_password(credentials.password.expose_secret(), self.min_password_length) {
            return Err(Rejection::InvalidPassword {
                min: self.min_password_length,
            });
        }

        Ok(())
    }
}

#[must_use]
pub fn valid_email(email: &str) -> bool {
    EMAIL.as_ref().is_some_and(|re| re.is_match(email))
}

#[must_use]
pub fn valid_phone(phone: &str) -> bool {
    PHONE.as_ref().is_some_and(|re| re.is_match(phone))
}

/// Non-empty, no whitespace anywhere, at least `min` characters.
#[must_use]
pub fn valid_username(username: &str, min: usize) -> bool {
    USERNAME.as_ref().is_some_and(|re| re.is_match(username)) && username.chars().count() >= min
}

/// Length is the only constraint on passwords.
#[must_use]
pub fn valid_password(password: &str, min: usize) -> bool {
    password.chars().count() >= min
}
