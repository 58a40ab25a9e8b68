use orghooks_api::client::ApiClient;
use orghooks_api::host;

use crate::error::{self, Context};
use crate::transfer::ConfigError;

const PUBLIC_TOKEN_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];
const ENTERPRISE_TOKEN_VARS: [&str; 2] = ["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"];

pub fn token_vars(hostname: &str) -> &'static [&'static str] {
    if host::is_public(hostname) {
        &PUBLIC_TOKEN_VARS
    } else {
        &ENTERPRISE_TOKEN_VARS
    }
}

/// picks the given token or falls back to the environment for the host
pub fn resolve_token_with<F>(
    given: Option<String>,
    hostname: &str,
    mut lookup: F,
) -> Result<String, ConfigError>
where
    F: FnMut(&str) -> Option<String>
{
    if let Some(token) = given.filter(|v| !v.is_empty()) {
        return Ok(token);
    }

    for var in token_vars(hostname) {
        if let Some(token) = lookup(var).filter(|v| !v.is_empty()) {
            tracing::debug!("using token from {} for {}", var, hostname);

            return Ok(token);
        }
    }

    Err(ConfigError::MissingToken(hostname.to_owned()))
}

pub fn resolve_token(given: Option<String>, hostname: &str) -> Result<String, ConfigError> {
    resolve_token_with(given, hostname, |var| std::env::var(var).ok())
}

pub fn client_for(hostname: &str, token: String) -> error::Result<ApiClient> {
    let mut builder = ApiClient::builder();

    if !builder.host(hostname) {
        return Err(ConfigError::InvalidHost(hostname.to_owned()).into());
    }

    builder.token(token);

    let client = builder.build().context("failed to create api client")?;

    tracing::debug!("api url for {}: {}", hostname, client.info().url);

    Ok(client)
}
