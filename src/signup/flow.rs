//! Two-step signup state machine. The flow collects the email first, reveals
//! the detail fields on "Get Started", then validates and submits. All state
//! changes happen on explicit calls so the rendering layer only forwards input
//! events and reads [`FlowState`].
//!
//! Flow Overview: `CollectingEmail` → `CollectingDetails` → `Submitting` →
//! `Registered`, with `Rejected` reachable from validation or the server
//! response. Only one submission may be in flight; extra submit calls while
//! `Submitting` are ignored.

use super::{
    client::{ClientError, RegistrationClient},
    credentials::Credentials,
    navigator::{Destination, NavigationPayload, Navigator},
    rejection::Rejection,
    validation::ValidationRules,
};
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, info, instrument, warn};

/// Status code the registration API uses for an already registered identity.
const STATUS_EXISTING_CREDENTIALS: u16 = 403;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlowState {
    CollectingEmail,
    CollectingDetails,
    Submitting,
    Rejected(Rejection),
    /// Navigation to login has been requested; the flow is finished.
    Registered,
}

/// Current field values as typed by the user.
#[derive(Debug, Default)]
struct SignupForm {
    email: String,
    phone: String,
    username: String,
    password: SecretString,
}

/// Drives the signup screen against an injected client and navigator.
pub struct RegistrationFlow<C, N> {
    rules: ValidationRules,
    client: C,
    navigator: N,
    form: SignupForm,
    details_revealed: bool,
    state: FlowState,
}

impl<C, N> RegistrationFlow<C, N>
where
    C: RegistrationClient,
    N: Navigator,
{
    #[must_use]
    pub fn new(rules: ValidationRules, client: C, navigator: N) -> Self {
        Self {
            rules,
            client,
            navigator,
            form: SignupForm::default(),
            details_revealed: false,
            state: FlowState::CollectingEmail,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &FlowState {
        &self.state
    }

    #[must_use]
    pub const fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Whether phone, username and password should be shown.
    #[must_use]
    pub fn details_visible(&self) -> bool {
        self.details_revealed && !self.form.email.trim().is_empty()
    }

    /// The message to display, present only while `Rejected`.
    #[must_use]
    pub const fn rejection(&self) -> Option<&Rejection> {
        match &self.state {
            FlowState::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.state, FlowState::Submitting)
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        self.form.phone = value.into();
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.form.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = SecretString::from(value.into());
    }

    /// "Get Started" / Enter handler.
    ///
    /// Does nothing while the email is empty. On the email step it reveals the
    /// detail fields; once they are revealed it submits.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub async fn advance(&mut self) -> &FlowState {
        if matches!(self.state, FlowState::Submitting | FlowState::Registered) {
            debug!("advance ignored");
            return &self.state;
        }

        if self.form.email.trim().is_empty() {
            debug!("email is empty, nothing to advance");
            return &self.state;
        }

        if self.details_revealed {
            return self.submit().await;
        }

        self.details_revealed = true;
        self.state = FlowState::CollectingDetails;
        debug!("details revealed");
        &self.state
    }

    /// Validates the form and, if every rule passes, registers the credentials.
    ///
    /// Ignored until [`advance`](Self::advance) has revealed the detail fields.
    #[instrument(skip(self), fields(state = ?self.state))]
    pub async fn submit(&mut self) -> &FlowState {
        let Some(credentials) = self.prepare_submission() else {
            return &self.state;
        };

        let result = self.client.register(&credentials).await;
        self.complete_submission(result);
        &self.state
    }

    /// First half of [`submit`](Self::submit): clears the previous message,
    /// validates, and enters `Submitting`.
    ///
    /// Returns the credentials to send, or `None` when the details are not
    /// revealed yet, validation failed, or a submission is already in flight
    /// (or finished). For UIs that run the
    /// request on their own task and report back through
    /// [`complete_submission`](Self::complete_submission).
    pub fn prepare_submission(&mut self) -> Option<Credentials> {
        match self.state {
            FlowState::Submitting => {
                debug!("submission already in flight, ignoring");
                return None;
            }
            FlowState::Registered => {
                debug!("already registered, ignoring");
                return None;
            }
            _ => {}
        }

        if !self.details_revealed {
            debug!("details not revealed yet, ignoring submit");
            return None;
        }

        self.state = FlowState::CollectingDetails;

        let credentials = Credentials {
            email: self.form.email.clone(),
            phone: self.form.phone.clone(),
            username: self.form.username.clone(),
            password: SecretString::from(self.form.password.expose_secret().to_owned()),
        };

        if let Err(rejection) = self.rules.check(&credentials) {
            info!("signup rejected locally: {:?}", rejection);
            self.state = FlowState::Rejected(rejection);
            return None;
        }

        self.state = FlowState::Submitting;
        debug!(username = %credentials.username, "submitting registration");
        Some(credentials)
    }

    /// Second half of [`submit`](Self::submit): maps the server outcome and
    /// navigates to login on success. Ignored unless `Submitting`.
    pub fn complete_submission(&mut self, result: Result<(), ClientError>) {
        if !self.is_submitting() {
            warn!("submission result received outside of submitting state, ignoring");
            return;
        }

        match result {
            Ok(()) => {
                info!("registration succeeded");
                self.navigator.go_to(
                    Destination::Login,
                    NavigationPayload {
                        just_registered: true,
                    },
                );
                self.state = FlowState::Registered;
            }
            Err(err) => {
                let rejection = rejection_for(&err);
                warn!("registration failed: {err}");
                self.state = FlowState::Rejected(rejection);
            }
        }
    }
}

/// Reduces a client failure to the message shown to the user.
fn rejection_for(err: &ClientError) -> Rejection {
    match err.status() {
        Some(STATUS_EXISTING_CREDENTIALS) => Rejection::ExistingCredentials,
        _ => Rejection::GenericServerError,
    }
}
