//! Connection settings from flags, environment, and the config file.
//!
//! An explicit `--api-url` (or `DEPOT_API_URL`, via clap's env support)
//! beats the selected profile from the config file.

use std::sync::Arc;
use std::time::Duration;

use depot_api::ApiClient;
use depot_config::{load_or_default, resolve_profile};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Build the API client from global options.
pub fn build_client(global: &GlobalOpts) -> Result<Arc<ApiClient>, CliError> {
    let (api_url, timeout) = resolve_settings(global)?;
    let client = ApiClient::new(&api_url, timeout)?;
    Ok(Arc::new(client))
}

fn resolve_settings(global: &GlobalOpts) -> Result<(String, Duration), CliError> {
    if let Some(ref url) = global.api_url {
        tracing::debug!(url, "using back-office URL from flag/env");
        return Ok((url.clone(), Duration::from_secs(global.timeout)));
    }

    let config = load_or_default();
    if global.profile.is_none() && config.profiles.is_empty() {
        return Err(CliError::NoApiUrl);
    }

    let settings = resolve_profile(&config, global.profile.as_deref())?;
    Ok((settings.api_url, settings.timeout))
}
