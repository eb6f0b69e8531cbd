use crate::signup::client::{DEFAULT_REGISTER_PATH, DEFAULT_TIMEOUT_SECONDS};
use clap::{Arg, ArgMatches, Command};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_REGISTER_PATH: &str = "register-path";
pub const ARG_LOGIN_URL: &str = "login-url";
pub const ARG_TIMEOUT: &str = "timeout";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Base URL of the authentication API")
                .env("VITALIS_API_URL")
                .default_value("http://localhost:8080"),
        )
        .arg(
            Arg::new(ARG_REGISTER_PATH)
                .long(ARG_REGISTER_PATH)
                .help("Registration endpoint path, relative to --api-url")
                .env("VITALIS_REGISTER_PATH")
                .default_value(DEFAULT_REGISTER_PATH),
        )
        .arg(
            Arg::new(ARG_LOGIN_URL)
                .long(ARG_LOGIN_URL)
                .help("Base URL of the web app, used to point new users at the login screen")
                .env("VITALIS_LOGIN_URL")
                .default_value("http://localhost:3000"),
        )
        .arg(
            Arg::new(ARG_TIMEOUT)
                .long(ARG_TIMEOUT)
                .help("Registration request timeout in seconds")
                .env("VITALIS_TIMEOUT")
                .default_value("10")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}

#[derive(Debug)]
pub struct Options {
    pub api_url: String,
    pub register_path: String,
    pub login_url: String,
    pub timeout_seconds: u64,
}

impl Options {
    /// Parse API arguments from matches.
    ///
    /// # Errors
    /// Returns an error if required arguments are missing or empty.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let read_required = |id: &str| -> anyhow::Result<String> {
            matches
                .get_one::<String>(id)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| anyhow::anyhow!("missing required argument: --{id}"))
        };

        Ok(Self {
            api_url: read_required(ARG_API_URL)?,
            register_path: read_required(ARG_REGISTER_PATH)?,
            login_url: read_required(ARG_LOGIN_URL)?,
            timeout_seconds: matches
                .get_one::<u64>(ARG_TIMEOUT)
                .copied()
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        })
    }
}
