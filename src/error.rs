use std::fmt;

use crate::provision::ProvisioningStep;

/// Custom error type for Okta operations
#[derive(Debug)]
pub enum OktaError {
    /// Transport-level failure (connect, DNS, timeout, TLS)
    Http(reqwest::Error),
    /// API returned an error response
    Api { status: u16, message: String },
    /// Response did not have the expected shape
    MalformedResponse(String),
    /// Device authorization expired before the operator approved it
    Expired,
    /// Operator denied the device authorization request
    Denied,
    /// Polling interrupted by the operator
    Cancelled,
    /// Remote service rejected the input, with its structured causes
    Validation { summary: String, causes: Vec<String> },
    /// Org redemption reached a terminal status other than active
    RedemptionFailed(String),
    /// Org redemption did not finish within the retry budget
    Timeout { attempts: u32 },
    /// Bootstrap failed after the application had been created
    PartialProvisioning {
        step: ProvisioningStep,
        app_id: String,
        source: Box<OktaError>,
    },
    /// Input source failed or was closed
    InputAborted(String),
    /// `next()` called on an exhausted collection
    NoMorePages,
    /// JSON parsing error
    Json(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for OktaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OktaError::Http(e) => write!(f, "HTTP request failed: {}", e),
            OktaError::Api { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            OktaError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            OktaError::Expired => write!(f, "Device authorization expired"),
            OktaError::Denied => write!(f, "Device authorization was denied"),
            OktaError::Cancelled => write!(f, "Cancelled"),
            OktaError::Validation { summary, causes } => {
                write!(f, "{}", summary)?;
                for cause in causes {
                    write!(f, "\n  - {}", cause)?;
                }
                Ok(())
            }
            OktaError::RedemptionFailed(status) => {
                write!(f, "Organization redemption failed (status: {})", status)
            }
            OktaError::Timeout { attempts } => write!(
                f,
                "Organization was not ready after {} status checks",
                attempts
            ),
            OktaError::PartialProvisioning {
                step,
                app_id,
                source,
            } => write!(
                f,
                "Provisioning stopped at {} (application {} was already created): {}",
                step, app_id, source
            ),
            OktaError::InputAborted(msg) => write!(f, "Input aborted: {}", msg),
            OktaError::NoMorePages => write!(f, "No more pages to fetch"),
            OktaError::Json(msg) => write!(f, "JSON error: {}", msg),
            OktaError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for OktaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OktaError::Http(e) => Some(e),
            OktaError::PartialProvisioning { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for OktaError {
    fn from(err: reqwest::Error) -> Self {
        OktaError::Http(err)
    }
}

impl From<serde_json::Error> for OktaError {
    fn from(err: serde_json::Error) -> Self {
        OktaError::Json(err.to_string())
    }
}

impl From<std::io::Error> for OktaError {
    fn from(err: std::io::Error) -> Self {
        OktaError::Config(err.to_string())
    }
}

/// Result type alias for Okta operations
pub type Result<T> = std::result::Result<T, OktaError>;
