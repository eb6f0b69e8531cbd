use crate::signup::validation::{MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH};
use clap::{Arg, ArgMatches, Command};

pub const ARG_MIN_USERNAME_LENGTH: &str = "min-username-length";
pub const ARG_MIN_PASSWORD_LENGTH: &str = "min-password-length";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_MIN_USERNAME_LENGTH)
                .long(ARG_MIN_USERNAME_LENGTH)
                .help("Minimum username length")
                .env("VITALIS_MIN_USERNAME_LENGTH")
                .default_value("3")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new(ARG_MIN_PASSWORD_LENGTH)
                .long(ARG_MIN_PASSWORD_LENGTH)
                .help("Minimum password length")
                .env("VITALIS_MIN_PASSWORD_LENGTH")
                .default_value("8")
                .value_parser(clap::value_parser!(usize)),
        )
}

#[derive(Debug)]
pub struct Options {
    pub min_username_length: usize,
    pub min_password_length: usize,
}

impl Options {
    /// Parse validation arguments from matches.
    ///
    /// # Errors
    /// Returns an error if a minimum is zero.
    pub fn parse(matches: &ArgMatches) -> anyhow::Result<Self> {
        let read_minimum = |id: &str, default: usize| -> anyhow::Result<usize> {
            let value = matches.get_one::<usize>(id).copied().unwrap_or(default);
            if value == 0 {
                return Err(anyhow::anyhow!("--{id} must be greater than zero"));
            }
            Ok(value)
        };

        Ok(Self {
            min_username_length: read_minimum(ARG_MIN_USERNAME_LENGTH, MIN_USERNAME_LENGTH)?,
            min_password_length: read_minimum(ARG_MIN_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH)?,
        })
    }
}
