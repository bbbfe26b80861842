//! Registration data models

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::polling;
use crate::okta::ErrorCause;
use crate::session::{normalize_org_url, AuthMode, Session};

/// Person registering a new org; becomes its first admin
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Registrant {
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub country: String,
}

/// Token identifying a pending registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionHandle {
    pub token: String,
}

/// Org URL and API token of a redeemed org
#[derive(Clone)]
pub struct OrgCredential {
    pub org_url: String,
    api_token: String,
}

impl OrgCredential {
    pub fn new(org_url: &str, api_token: impl Into<String>) -> Self {
        Self {
            org_url: normalize_org_url(org_url),
            api_token: api_token.into(),
        }
    }

    /// Static-token session for the new org
    pub fn session(&self) -> Session {
        Session::new(&self.org_url, AuthMode::StaticToken, self.api_token.clone())
    }
}

impl fmt::Debug for OrgCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrgCredential")
            .field("org_url", &self.org_url)
            .field("api_token", &"***")
            .finish()
    }
}

/// Result of bootstrap: what `--login` needs next time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliAppCredential {
    pub org_url: String,
    pub client_id: String,
    pub app_id: String,
}

/// Redemption polling budget
#[derive(Debug, Clone, Copy)]
pub struct RedeemOptions {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for RedeemOptions {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(polling::REDEEM_INTERVAL_SECS),
            max_attempts: polling::REDEEM_MAX_ATTEMPTS,
        }
    }
}

/// Registrar reply to `POST /create/org`
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum RegistrationResponse {
    Accepted {
        #[serde(rename = "developerOrgCliToken")]
        token: String,
    },
    Rejected {
        #[serde(rename = "errorSummary", default)]
        error_summary: Option<String>,
        #[serde(rename = "errorCauses")]
        error_causes: Vec<ErrorCause>,
    },
}

/// Registrar reply to `GET /create/org/{token}`
#[derive(Deserialize, Debug)]
pub(crate) struct RedemptionStatus {
    pub status: String,
    #[serde(rename = "orgUrl", default)]
    pub org_url: Option<String>,
    #[serde(rename = "apiToken", default)]
    pub api_token: Option<String>,
}
