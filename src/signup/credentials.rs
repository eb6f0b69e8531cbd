//! Credentials captured for one submission attempt. The password is wrapped in
//! a [`SecretString`] so `Debug` output and tracing fields never carry it; it is
//! exposed only while building the request body.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

/// Snapshot of the form taken when a submission passes validation.
#[derive(Debug)]
pub struct Credentials {
    pub email: String,
    pub phone: String,
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    #[must_use]
    pub fn new(
        email: impl Into<String>,
        phone: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            phone: phone.into(),
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Borrows the credentials as the JSON body expected by the registration endpoint.
    #[must_use]
    pub fn request(&self) -> RegisterRequest<'_> {
        RegisterRequest {
            username: &self.username,
            email: &self.email,
            phone: &self.phone,
            password: self.password.expose_secret(),
        }
    }
}

/// Wire body for `POST` to the registration endpoint.
/// Must never be logged.
#[derive(Serialize)]
pub struct RegisterRequest<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub password: &'a str,
}

#[cfg(test)]
mod tests {
    use super::Credentials;
    use serde_json::json;

    #[test]
    fn debug_output_redacts_password() {
        let credentials = Credentials::new("user@example.com", "5551234567", "runner", "hunter22");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("runner"));
        assert!(!debug.contains("hunter22"));
    }

    #[test]
    fn request_serializes_all_four_fields() -> serde_json::Result<()> {
        let credentials = Credentials::new("user@example.com", "5551234567", "runner", "hunter22");
        let body = serde_json::to_value(credentials.request())?;
        assert_eq!(
            body,
            json!({
                "username": "runner",
                "email": "user@example.com",
                "phone": "5551234567",
                "password": "hunter22",
            })
        );
        Ok(())
    }
}
