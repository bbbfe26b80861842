//! Session data model

use std::fmt;

/// How the credential is presented to the API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// OAuth access token from the device flow
    Bearer,
    /// Long-lived API token (`SSWS` scheme)
    StaticToken,
}

impl AuthMode {
    /// Authorization scheme name for this mode
    pub fn scheme(&self) -> &'static str {
        match self {
            AuthMode::Bearer => "Bearer",
            AuthMode::StaticToken => "SSWS",
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Bearer => write!(f, "bearer"),
            AuthMode::StaticToken => write!(f, "static-token"),
        }
    }
}

/// Resolved org URL plus credential. Immutable once built.
#[derive(Clone)]
pub struct Session {
    base_url: String,
    auth_mode: AuthMode,
    credential: String,
}

impl Session {
    pub fn new(base_url: &str, auth_mode: AuthMode, credential: String) -> Self {
        Self {
            base_url: normalize_org_url(base_url),
            auth_mode,
            credential,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.auth_mode
    }

    /// Value for the `Authorization` header
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.auth_mode.scheme(), self.credential)
    }
}

// Keep the credential out of debug logs.
impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("auth_mode", &self.auth_mode)
            .field("credential", &"***")
            .finish()
    }
}

/// Turn `dev-123.okta.com` or `https://dev-123.okta.com/` into `https://dev-123.okta.com`
pub fn normalize_org_url(input: &str) -> String {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.starts_with("https://") || trimmed.starts_with("http://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    }
}
