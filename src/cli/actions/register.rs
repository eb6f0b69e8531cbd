use crate::cli::session;
use crate::signup::{
    ClientConfig, Destination, HttpRegistrationClient, NavigationPayload, Navigator,
    RegistrationFlow, ValidationRules,
};
use anyhow::{Context, Result};
use std::sync::Mutex;
use tokio::io::{BufReader, stdin, stdout};
use tracing::{info, warn};
use url::Url;

#[derive(Debug)]
pub struct Args {
    pub client: ClientConfig,
    pub rules: ValidationRules,
    pub login_url: Url,
}

/// Execute the register action.
/// # Errors
/// Returns an error if the HTTP client cannot be built or the terminal fails.
pub async fn execute(args: Args) -> Result<()> {
    let client =
        HttpRegistrationClient::new(&args.client).context("Failed to build registration client")?;
    info!("registering against {}", client.url());

    let navigator = ConsoleNavigator::new(args.login_url);
    let mut flow = RegistrationFlow::new(args.rules, client, navigator);

    let registered = session::run(&mut flow, BufReader::new(stdin()), stdout()).await?;
    if !registered {
        warn!("input closed before registration completed");
    }

    Ok(())
}

/// Navigator for the terminal: leaves a notice telling the user where to
/// sign in, which the session prints on its own output.
#[derive(Debug)]
pub struct ConsoleNavigator {
    base_url: Url,
    notice: Mutex<Option<String>>,
}

impl ConsoleNavigator {
    #[must_use]
    pub fn new(mut base_url: Url) -> Self {
        // a base without a trailing slash would lose its last path segment on join
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        Self {
            base_url,
            notice: Mutex::new(None),
        }
    }

    /// Absolute URL of a destination under the web app base URL.
    #[must_use]
    pub fn url_for(&self, destination: Destination) -> String {
        let relative = destination.path().trim_start_matches('/');
        self.base_url
            .join(relative)
            .map_or_else(|_| destination.path().to_string(), |url| url.to_string())
    }
}

impl Navigator for ConsoleNavigator {
    fn go_to(&self, destination: Destination, payload: NavigationPayload) {
        let url = self.url_for(destination);
        info!(?destination, just_registered = payload.just_registered, "navigating");
        let message = if payload.just_registered {
            format!("Account created! Sign in at {url}")
        } else {
            format!("Continue at {url}")
        };
        if let Ok(mut notice) = self.notice.lock() {
            *notice = Some(message);
        }
    }

    fn take_notice(&self) -> Option<String> {
        self.notice.lock().ok().and_then(|mut notice| notice.take())
    }
}
