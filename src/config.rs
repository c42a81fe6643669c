//! # Startup Configuration
//!
//! All settings come from the process environment and are read exactly once,
//! before anything touches the network. The resulting [`Config`] is handed by
//! reference to the credential exchange and the function fetcher.
//!
//! | Variable | Required | Default |
//! |----------|----------|---------|
//! | `QERNAL_TOKEN` | yes | |
//! | `QERNAL_PROJECT_ID` | yes | |
//! | `QERNAL_HOST_CHAOS` | no | `https://chaos.qernal.com` |
//! | `QERNAL_HOST_HYDRA` | no | `https://hydra.qernal.com` |

use crate::error::{Error, Result};

pub const TOKEN_VAR: &str = "QERNAL_TOKEN";
pub const PROJECT_VAR: &str = "QERNAL_PROJECT_ID";
pub const CHAOS_HOST_VAR: &str = "QERNAL_HOST_CHAOS";
pub const HYDRA_HOST_VAR: &str = "QERNAL_HOST_HYDRA";
pub const LOG_FILE_VAR: &str = "QERNAL_LOG_FILE";

pub const DEFAULT_CHAOS_HOST: &str = "https://chaos.qernal.com";
pub const DEFAULT_HYDRA_HOST: &str = "https://hydra.qernal.com";

#[derive(Clone)]
pub struct Config {
    /// Raw `clientId@clientSecret` token, parsed later by the auth module.
    pub token: String,
    pub project_id: String,
    /// Base URL of the resource API, without trailing slash.
    pub chaos_host: String,
    /// Base URL of the token issuer, without trailing slash.
    pub hydra_host: String,
}

impl Config {
    /// Build the configuration from a variable source, usually the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = lookup(TOKEN_VAR).ok_or(Error::MissingVar(TOKEN_VAR))?;
        let project_id = lookup(PROJECT_VAR).ok_or(Error::MissingVar(PROJECT_VAR))?;

        let host = |key: &str, fallback: &str| {
            lookup(key)
                .unwrap_or_else(|| fallback.to_string())
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            token,
            project_id,
            chaos_host: host(CHAOS_HOST_VAR, DEFAULT_CHAOS_HOST),
            hydra_host: host(HYDRA_HOST_VAR, DEFAULT_HYDRA_HOST),
        })
    }

    pub fn token_url(&self) -> String {
        format!("{}/oauth2/token", self.hydra_host)
    }

    pub fn api_base(&self) -> String {
        format!("{}/v1", self.chaos_host)
    }
}

// The token carries a secret, keep it out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("project_id", &self.project_id)
            .field("chaos_host", &self.chaos_host)
            .field("hydra_host", &self.hydra_host)
            .finish()
    }
}
