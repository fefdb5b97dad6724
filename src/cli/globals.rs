use crate::{
    client::{ClientConfig, HttpClient},
    notify::StderrNotifier,
    session::Session,
};
use anyhow::{Result, anyhow};
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

#[derive(Clone)]
pub struct GlobalArgs {
    pub base_url: String,
    pub timeout: Duration,
    pub token: Option<SecretString>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(base_url: String, timeout: Duration) -> Self {
        Self {
            base_url,
            timeout,
            token: None,
        }
    }

    pub fn set_token(&mut self, token: SecretString) {
        self.token = Some(token);
    }

    /// Session seeded with the token given on the command line, if any.
    #[must_use]
    pub fn session(&self) -> Session {
        self.token.as_ref().map_or_else(Session::new, |token| {
            Session::with_token(token.expose_secret())
        })
    }

    /// Builds the HTTP client every action talks through.
    ///
    /// # Errors
    /// Returns an error if the base URL is invalid or the client cannot be built.
    pub fn client(&self) -> Result<HttpClient> {
        // Setup failures are never routed through the notifier, so keep them
        // out of the `ClientError` chain the binary treats as already reported.
        let config = ClientConfig::new(&self.base_url)
            .map_err(|e| anyhow!("invalid NOVELIST_BASE_URL: {e}"))?
            .with_timeout(self.timeout);

        HttpClient::builder(config)
            .session(self.session())
            .notifier(StderrNotifier)
            .build()
            .map_err(|e| anyhow!("failed to build HTTP client: {e}"))
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}
