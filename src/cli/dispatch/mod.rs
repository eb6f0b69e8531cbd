//! Command-line argument dispatch.
//!
//! Maps validated CLI arguments to the register action with its client,
//! validation and navigation settings.

use crate::cli::actions::{Action, register::Args};
use crate::cli::commands::{api, rules};
use crate::signup::{ClientConfig, ValidationRules};
use anyhow::{Context, Result};
use std::time::Duration;
use url::Url;

/// Map validated CLI matches to the register action.
///
/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let api_opts = api::Options::parse(matches)?;
    let rules_opts = rules::Options::parse(matches)?;

    Url::parse(&api_opts.api_url).context("invalid --api-url")?;
    let login_url = Url::parse(&api_opts.login_url).context("invalid --login-url")?;

    Ok(Action::Register(Args {
        client: ClientConfig {
            api_base_url: api_opts.api_url,
            register_path: api_opts.register_path,
            timeout: Duration::from_secs(api_opts.timeout_seconds),
        },
        rules: ValidationRules::new(
            rules_opts.min_username_length,
            rules_opts.min_password_length,
        ),
        login_url,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR_VARS: [(&str, Option<&str>); 6] = [
        ("VITALIS_API_URL", None),
        ("VITALIS_REGISTER_PATH", None),
        ("VITALIS_LOGIN_URL", None),
        ("VITALIS_TIMEOUT", None),
        ("VITALIS_MIN_USERNAME_LENGTH", None),
        ("VITALIS_MIN_PASSWORD_LENGTH", None),
    ];

    #[test]
    fn defaults_build_register_action() {
        temp_env::with_vars(CLEAR_VARS, || {
            let matches = crate::cli::commands::new().get_matches_from(vec!["vitalis"]);
            let result = handler(&matches);
            assert!(result.is_ok());
            if let Ok(Action::Register(args)) = result {
                assert_eq!(
                    args.client.register_url(),
                    "http://localhost:8080/api/auth/register"
                );
                assert_eq!(args.client.timeout, Duration::from_secs(10));
                assert_eq!(args.rules, ValidationRules::default());
                assert_eq!(args.login_url.as_str(), "http://localhost:3000/");
            }
        });
    }

    #[test]
    fn zero_minimum_is_rejected() {
        temp_env::with_vars(CLEAR_VARS, || {
            let matches = crate::cli::commands::new()
                .get_matches_from(vec!["vitalis", "--min-password-length", "0"]);
            let result = handler(&matches);
            assert!(result.is_err());
            if let Err(err) = result {
                assert!(
                    err.to_string()
                        .contains("--min-password-length must be greater than zero")
                );
            }
        });
    }

    #[test]
    fn invalid_login_url_is_rejected() {
        temp_env::with_vars(CLEAR_VARS, || {
            let matches = crate::cli::commands::new()
                .get_matches_from(vec!["vitalis", "--login-url", "not a url"]);
            let result = handler(&matches);
            assert!(result.is_err());
            if let Err(err) = result {
                assert!(err.to_string().contains("invalid --login-url"));
            }
        });
    }

    #[test]
    fn blank_api_url_is_rejected() {
        temp_env::with_vars(CLEAR_VARS, || {
            let matches =
                crate::cli::commands::new().get_matches_from(vec!["vitalis", "--api-url", "  "]);
            let result = handler(&matches);
            assert!(result.is_err());
            if let Err(err) = result {
                assert!(
                    err.to_string()
                        .contains("missing required argument: --api-url")
                );
            }
        });
    }
}
