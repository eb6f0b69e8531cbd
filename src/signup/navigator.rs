use serde::Serialize;

/// Screens the signup flow can hand off to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Login,
}

impl Destination {
    /// Route path of the destination, relative to the app root.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Destination::Login => "/login",
        }
    }
}

/// State carried along with a navigation request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct NavigationPayload {
    /// Tells the login screen to acknowledge a fresh registration.
    pub just_registered: bool,
}

/// Router capability used by the flow once registration succeeds.
pub trait Navigator {
    fn go_to(&self, destination: Destination, payload: NavigationPayload);

    /// Message left by the last navigation for the front end to display, if any.
    /// Taking it clears it.
    fn take_notice(&self) -> Option<String> {
        None
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn go_to(&self, destination: Destination, payload: NavigationPayload) {
        (**self).go_to(destination, payload);
    }

    fn take_notice(&self) -> Option<String> {
        (**self).take_notice()
    }
}

#[cfg(test)]
mod tests {
    use super::{Destination, NavigationPayload};
    use serde_json::json;

    #[test]
    fn login_path() {
        assert_eq!(Destination::Login.path(), "/login");
    }

    #[test]
    fn payload_serializes_flag() -> serde_json::Result<()> {
        let payload = NavigationPayload {
            just_registered: true,
        };
        assert_eq!(
            serde_json::to_value(payload)?,
            json!({ "just_registered": true })
        );
        Ok(())
    }
}
