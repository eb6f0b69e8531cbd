//! Registration flow for the signup screen. The flow owns the two-step form
//! state, runs the field rules before anything leaves the process, and reduces
//! every failure to one user-facing [`Rejection`].
//!
//! Flow Overview: collect the email, reveal the detail fields, validate in
//! order, post the credentials, then navigate to login or show the message.
//! Credentials carry a password and nothing in this module logs it.

pub mod client;
pub mod credentials;
pub mod flow;
pub mod navigator;
pub mod rejection;
pub mod validation;

pub use client::{ClientConfig, ClientError, HttpRegistrationClient, RegistrationClient};
pub use credentials::{Credentials, RegisterRequest};
pub use flow::{FlowState, RegistrationFlow};
pub use navigator::{Destination, NavigationPayload, Navigator};
pub use rejection::Rejection;
pub use validation::ValidationRules;
