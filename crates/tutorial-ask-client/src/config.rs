use std::time::Duration;

use crate::errors::ClientError;

/// Configuration for the search-and-ask client.
#[derive(Clone, Debug)]
pub struct AskClientConfig {
    /// Base URL of the tutorials API server.
    pub base_url: String,
    /// Default HTTP timeout for requests.
    pub timeout: Duration,
}

impl AskClientConfig {
    /// Creates a config with sensible defaults for a given server.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(120),
        }
    }

    /// Builds a config from `TUTORIAL_ASK_BASE_URL`.
    pub fn from_env() -> Result<Self, ClientError> {
        let base_url = std::env::var("TUTORIAL_ASK_BASE_URL").unwrap_or_default();
        if base_url.trim().is_empty() {
            return Err(ClientError::Config(
                "missing TUTORIAL_ASK_BASE_URL for ask client".into(),
            ));
        }
        Ok(Self::new(base_url))
    }

    /// Overrides the default HTTP timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn search_and_ask_url(&self) -> String {
        format!(
            "{}/tutorials/search-and-ask",
            self.base_url.trim_end_matches('/')
        )
    }
}
