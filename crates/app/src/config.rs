//! Client configuration: `config.toml` embedded at build time, with an
//! environment override for the API base URL on native builds.

use client::HttpApi;
use shared_types::{AppError, ClientConfig};

const EMBEDDED_CONFIG: &str = include_str!("../../../config.toml");

/// Parse the embedded config and apply `CASEDESK_API_URL` if set.
pub fn load() -> ClientConfig {
    let config = match ClientConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(error = %e, "invalid config.toml, using defaults");
            ClientConfig::default()
        }
    };
    config.with_base_url_override(base_url_override())
}

#[cfg(not(target_arch = "wasm32"))]
fn base_url_override() -> Option<String> {
    let _ = dotenvy::dotenv();
    std::env::var("CASEDESK_API_URL").ok()
}

#[cfg(target_arch = "wasm32")]
fn base_url_override() -> Option<String> {
    option_env!("CASEDESK_API_URL").map(str::to_string)
}

pub fn api_client() -> Result<HttpApi, AppError> {
    let config = load();
    tracing::info!(
        base_url = %config.api.base_url,
        timeout_secs = config.api.request_timeout_secs,
        "case API configured"
    );
    HttpApi::new(&config.api)
}
