//! # Credential Resolver
//!
//! Turns the opaque `clientId@clientSecret` token into a bearer access token
//! using the OAuth2 client-credentials grant against the hydra token endpoint.

use crate::config::Config;
use crate::error::{Error, Result};
use serde::Deserialize;
use tracing::{debug, info};

#[derive(Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl ClientCredentials {
    /// Split a token on its single `@` separator.
    pub fn parse(token: &str) -> Result<Self> {
        let mut parts = token.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(client_id), Some(client_secret), None) => Ok(Self {
                client_id: client_id.to_string(),
                client_secret: client_secret.to_string(),
            }),
            _ => Err(Error::InvalidToken),
        }
    }
}

impl std::fmt::Debug for ClientCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientCredentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

/// Exchange the configured credentials for an access token.
pub async fn fetch_access_token(http: &reqwest::Client, config: &Config) -> Result<String> {
    let credentials = ClientCredentials::parse(&config.token)?;
    let url = config.token_url();
    debug!(client_id = %credentials.client_id, %url, "requesting access token");

    let response = http
        .post(&url)
        .basic_auth(&credentials.client_id, Some(&credentials.client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await
        .map_err(|e| Error::http(&url, e))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Auth { status, body });
    }

    let token: TokenResponse = response.json().await.map_err(|e| Error::http(&url, e))?;
    info!(expires_in = ?token.expires_in, "obtained access token");
    Ok(token.access_token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_token() {
        let creds = ClientCredentials::parse("abc@def").unwrap();
        assert_eq!(creds.client_id, "abc");
        assert_eq!(creds.client_secret, "def");
    }

    #[test]
    fn test_parse_without_separator() {
        assert!(matches!(
            ClientCredentials::parse("abcdef"),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn test_parse_with_two_separators() {
        assert!(matches!(
            ClientCredentials::parse("a@b@c"),
            Err(Error::InvalidToken)
        ));
    }

    #[test]
    fn test_parse_empty_halves_allowed() {
        let creds = ClientCredentials::parse("@").unwrap();
        assert_eq!(creds.client_id, "");
        assert_eq!(creds.client_secret, "");
    }

    #[test]
    fn test_debug_hides_secret() {
        let creds = ClientCredentials::parse("abc@topsecret").unwrap();
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("abc"));
        assert!(!rendered.contains("topsecret"));
    }
}
