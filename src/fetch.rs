//! # Fetch Phase
//!
//! Everything that has to happen before the table can be shown: exchange the
//! token for an access token, list the project's functions and flatten them
//! into display rows. Any failure here is fatal for the run.

use crate::api::ChaosClient;
use crate::auth;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::rows::{build_rows, DisplayRow};
use tracing::info;

pub async fn load_rows(config: &Config) -> Result<Vec<DisplayRow>> {
    let http = reqwest::Client::builder()
        .build()
        .map_err(Error::ClientBuild)?;

    let access_token = auth::fetch_access_token(&http, config).await?;
    let client = ChaosClient::new(config, &access_token)?;
    let functions = client.list_functions(&config.project_id).await?;

    let rows = build_rows(&functions);
    info!(rows = rows.len(), "built display rows");
    Ok(rows)
}
