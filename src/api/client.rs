use crate::api::models::{Function, FunctionList};
use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use tracing::{debug, info};

/// Authenticated client for the chaos resource API.
pub struct ChaosClient {
    http: reqwest::Client,
    base_url: String,
}

impl ChaosClient {
    pub fn new(config: &Config, access_token: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let mut auth_value = HeaderValue::from_str(&format!("Bearer {access_token}"))?;
        auth_value.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_value);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(Error::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.api_base(),
        })
    }

    /// List every function in a project, in the order the API returns them.
    pub async fn list_functions(&self, project_id: &str) -> Result<Vec<Function>> {
        let url = format!("{}/projects/{}/functions", self.base_url, project_id);
        debug!(%url, "listing functions");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::http(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Fetch { status, body });
        }

        let list: FunctionList = response.json().await.map_err(|e| Error::http(&url, e))?;
        info!(count = list.data.len(), project_id, "fetched functions");
        Ok(list.data)
    }
}
