use std::fmt;

/// The single message shown under the signup form.
///
/// Local rule failures and remote failures both end up here; the screen never
/// shows more than one at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The server reported that the email, phone or username is taken (`403`).
    ExistingCredentials,
    InvalidEmail,
    InvalidPhone,
    InvalidUsername { min: usize },
    InvalidPassword { min: usize },
    /// Any other server status, transport failure or timeout.
    GenericServerError,
}

impl fmt::Display for Rejection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::ExistingCredentials => write!(
                formatter,
                "An account with this email, phone number, or username already exists."
            ),
            Rejection::InvalidEmail => write!(formatter, "Please enter a valid email address."),
            Rejection::InvalidPhone => write!(formatter, "Please enter a valid phone number."),
            Rejection::InvalidUsername { min } => write!(
                formatter,
                "Username must be at least {min} characters and cannot contain spaces."
            ),
            Rejection::InvalidPassword { min } => {
                write!(formatter, "Password must be at least {min} characters.")
            }
            Rejection::GenericServerError => {
                write!(formatter, "Something went wrong on our end. Please try again.")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Rejection;

    #[test]
    fn minimums_are_part_of_the_message() {
        assert_eq!(
            Rejection::InvalidPassword { min: 8 }.to_string(),
            "Password must be at least 8 characters."
        );
        assert!(
            Rejection::InvalidUsername { min: 5 }
                .to_string()
                .contains("at least 5 characters")
        );
    }

    #[test]
    fn server_error_message_has_no_detail() {
        let message = Rejection::GenericServerError.to_string();
        assert!(!message.contains("500"));
        assert!(!message.to_lowercase().contains("status"));
    }
}
