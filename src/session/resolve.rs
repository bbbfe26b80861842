//! Org URL and client ID resolution from multiple sources
//!
//! Environment variables are already folded into the CLI values by clap
//! (`#[arg(env = ...)]`), so the order is: CLI flag / env var, then the
//! settings file.

use log::debug;

use crate::error::{OktaError, Result};

use super::models::normalize_org_url;
use super::store::Settings;

/// Resolve the org URL: explicit value first, then the settings file
pub fn resolve_org_url(cli_org: Option<&str>, settings: &Settings) -> Result<String> {
    if let Some(org) = cli_org {
        debug!("Using org URL from CLI/env: {}", org);
        return Ok(normalize_org_url(org));
    }

    if let Some(org) = settings.org_url.as_deref() {
        debug!("Using org URL from settings file: {}", org);
        return Ok(normalize_org_url(org));
    }

    Err(OktaError::Config(
        "No org URL configured. Use --login <org>, set OKTA_ORG_URL, or run --register"
            .to_string(),
    ))
}

/// Resolve the CLI application's client ID
pub fn resolve_client_id(cli_client_id: Option<&str>, settings: &Settings) -> Result<String> {
    if let Some(id) = cli_client_id {
        debug!("Using client ID from CLI/env");
        return Ok(id.to_string());
    }

    if let Some(id) = settings.client_id.as_deref() {
        debug!("Using client ID from settings file");
        return Ok(id.to_string());
    }

    Err(OktaError::Config(
        "No client ID configured. Use --client-id, set OKTA_CLIENT_ID, or run --register"
            .to_string(),
    ))
}
