//! Client configuration.
//!
//! `ClientConfig` is plain serde data so applications can embed it in their
//! own configuration files. Only the reqwest transport reads `timeout_secs`
//! and `user_agent`; the typed clients themselves impose no timeout.

use serde::Deserialize;

pub const DEFAULT_PETSTORE_URL: &str = "https://petstore3.swagger.io/api/v3";
pub const DEFAULT_SOCCER_TEAM_URL: &str = "https://api.soccerteam.example.com/v1";

/// Connection settings for one API surface.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: None,
            user_agent: None,
        }
    }

    pub fn petstore() -> Self {
        Self::new(DEFAULT_PETSTORE_URL)
    }

    pub fn soccer_team() -> Self {
        Self::new(DEFAULT_SOCCER_TEAM_URL)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
