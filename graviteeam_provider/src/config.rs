use serde::Deserialize;

use crate::error::{ProviderError, Result};

pub(crate) const ENDPOINT_ENV: &str = "GRAVITEEIO_AM_ENDPOINT";
pub(crate) const USERNAME_ENV: &str = "GRAVITEEIO_AM_USERNAME";
pub(crate) const PASSWORD_ENV: &str = "GRAVITEEIO_AM_PASSWORD";

const DEFAULT_ENDPOINT: &str = "http://localhost:8093";
const DEFAULT_USERNAME: &str = "admin";
const DEFAULT_PASSWORD: &str = "adminadmin";

/// Provider block as written by the user. Every setting is optional.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)]
pub struct ProviderModel {
    pub endpoint: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Settings used to connect to the management API.
///
/// Each value comes from the provider block, else from its environment
/// variable, else from the built-in default.
#[derive(Clone, PartialEq, Eq)]
pub struct AmConfig {
    pub endpoint: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for AmConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AmConfig")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl AmConfig {
    /// Resolve settings against the process environment.
    pub fn resolve(model: ProviderModel) -> Result<Self> {
        Self::resolve_with(model, |key| std::env::var(key).ok())
    }

    /// Resolve settings with a custom environment lookup.
    pub fn resolve_with<F>(model: ProviderModel, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pick = |explicit: Option<String>, key: &str, default: &str| {
            explicit
                .filter(|v| !v.is_empty())
                .or_else(|| env(key).filter(|v| !v.is_empty()))
                .unwrap_or_else(|| default.to_owned())
        };

        let config = AmConfig {
            endpoint: pick(model.endpoint, ENDPOINT_ENV, DEFAULT_ENDPOINT)
                .trim_end_matches('/')
                .to_owned(),
            username: pick(model.username, USERNAME_ENV, DEFAULT_USERNAME),
            password: pick(model.password, PASSWORD_ENV, DEFAULT_PASSWORD),
        };
        config.validate()?;
        Ok(config)
    }

    /// Perform simple field validation to catch bad input.
    fn validate(&self) -> Result<()> {
        if !(self.endpoint.starts_with("http://") || self.endpoint.starts_with("https://")) {
            return Err(ProviderError::Configuration(format!(
                "endpoint must be an http(s) URL, got {:?}",
                self.endpoint
            )));
        }
        Ok(())
    }
}
