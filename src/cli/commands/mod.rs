pub mod api;
pub mod logging;
pub mod rules;

use clap::{
    ColorChoice, Command,
    builder::styling::{AnsiColor, Effects, Styles},
};

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("vitalis")
        .about("Create a Vitalis account")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles);

    let command = api::with_args(command);
    let command = rules::with_args(command);
    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::api::{ARG_API_URL, ARG_LOGIN_URL, ARG_REGISTER_PATH, ARG_TIMEOUT};
    use super::rules::{ARG_MIN_PASSWORD_LENGTH, ARG_MIN_USERNAME_LENGTH};
    use super::*;
    use crate::signup::{
        client::{DEFAULT_REGISTER_PATH, DEFAULT_TIMEOUT_SECONDS},
        validation::{MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH},
    };

    const VITALIS_VARS: [(&str, Option<&str>); 7] = [
        ("VITALIS_API_URL", None),
        ("VITALIS_REGISTER_PATH", None),
        ("VITALIS_LOGIN_URL", None),
        ("VITALIS_TIMEOUT", None),
        ("VITALIS_MIN_USERNAME_LENGTH", None),
        ("VITALIS_MIN_PASSWORD_LENGTH", None),
        ("VITALIS_LOG_LEVEL", None),
    ];

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "vitalis");
        assert_eq!(
            command.get_about().map(ToString::to_string),
            Some("Create a Vitalis account".to_string())
        );
        assert_eq!(
            command.get_version().map(ToString::to_string),
            Some(env!("CARGO_PKG_VERSION").to_string())
        );
    }

    #[test]
    fn test_defaults_match_library_constants() {
        temp_env::with_vars(VITALIS_VARS, || {
            let matches = new().get_matches_from(vec!["vitalis"]);

            assert_eq!(
                matches.get_one::<String>(ARG_API_URL).cloned(),
                Some("http://localhost:8080".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(ARG_REGISTER_PATH).cloned(),
                Some(DEFAULT_REGISTER_PATH.to_string())
            );
            assert_eq!(
                matches.get_one::<u64>(ARG_TIMEOUT).copied(),
                Some(DEFAULT_TIMEOUT_SECONDS)
            );
            assert_eq!(
                matches.get_one::<usize>(ARG_MIN_USERNAME_LENGTH).copied(),
                Some(MIN_USERNAME_LENGTH)
            );
            assert_eq!(
                matches.get_one::<usize>(ARG_MIN_PASSWORD_LENGTH).copied(),
                Some(MIN_PASSWORD_LENGTH)
            );
        });
    }

    #[test]
    fn test_check_args() {
        temp_env::with_vars(VITALIS_VARS, || {
            let matches = new().get_matches_from(vec![
                "vitalis",
                "--api-url",
                "https://api.vitalis.fit",
                "--register-path",
                "/v1/signup",
                "--login-url",
                "https://app.vitalis.fit",
                "--timeout",
                "30",
                "--min-username-length",
                "5",
                "--min-password-length",
                "12",
            ]);

            assert_eq!(
                matches.get_one::<String>(ARG_API_URL).cloned(),
                Some("https://api.vitalis.fit".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(ARG_REGISTER_PATH).cloned(),
                Some("/v1/signup".to_string())
            );
            assert_eq!(
                matches.get_one::<String>(ARG_LOGIN_URL).cloned(),
                Some("https://app.vitalis.fit".to_string())
            );
            assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(30));
            assert_eq!(
                matches.get_one::<usize>(ARG_MIN_USERNAME_LENGTH).copied(),
                Some(5)
            );
            assert_eq!(
                matches.get_one::<usize>(ARG_MIN_PASSWORD_LENGTH).copied(),
                Some(12)
            );
        });
    }

    #[test]
    fn test_check_env() {
        temp_env::with_vars(
            [
                ("VITALIS_API_URL", Some("https://api.vitalis.fit")),
                ("VITALIS_REGISTER_PATH", None),
                ("VITALIS_LOGIN_URL", None),
                ("VITALIS_TIMEOUT", Some("5")),
                ("VITALIS_MIN_USERNAME_LENGTH", None),
                ("VITALIS_MIN_PASSWORD_LENGTH", Some("10")),
                ("VITALIS_LOG_LEVEL", Some("info")),
            ],
            || {
                let matches = new().get_matches_from(vec!["vitalis"]);
                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).cloned(),
                    Some("https://api.vitalis.fit".to_string())
                );
                assert_eq!(matches.get_one::<u64>(ARG_TIMEOUT).copied(), Some(5));
                assert_eq!(
                    matches.get_one::<usize>(ARG_MIN_PASSWORD_LENGTH).copied(),
                    Some(10)
                );
                assert_eq!(
                    matches.get_one::<u8>(logging::ARG_VERBOSITY).copied(),
                    Some(2)
                );
            },
        );
    }

    #[test]
    fn test_zero_timeout_rejected() {
        temp_env::with_vars(VITALIS_VARS, || {
            let result = new().try_get_matches_from(vec!["vitalis", "--timeout", "0"]);
            assert!(result.is_err());
        });
    }
}
