//! # Vitalis (Account Registration)
//!
//! `vitalis` drives the account-registration screen of the Vitalis fitness and
//! nutrition app. The screen collects an email first and, after "Get Started",
//! reveals the phone number, username and password fields.
//!
//! ## Registration Flow
//!
//! 1. **Email:** The user enters an email and advances. An empty email keeps the
//!    flow on the first step.
//! 2. **Details:** Phone, username and password are validated in a fixed order
//!    (email, phone, username, password). The first failing rule decides the
//!    message shown to the user and nothing is sent.
//! 3. **Submit:** Valid credentials are posted to the authentication API. A `403`
//!    means the email, phone or username is already registered; any other
//!    failure is reported with a generic message so server details never reach
//!    the user.
//! 4. **Login:** On success the navigator moves to the login screen carrying a
//!    `just_registered` flag.
//!
//! The flow does not render anything. The HTTP client and the navigator are
//! injected capabilities, and the terminal front end in [`cli`] is one way to
//! wire input events to it.

pub mod cli;
pub mod signup;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_app_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with(env!("CARGO_PKG_NAME")));
        assert!(APP_USER_AGENT.contains(env!("CARGO_PKG_VERSION")));
    }
}
