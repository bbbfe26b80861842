//! Device authorization grant (RFC 8628)
//!
//! `initiate` asks the org for a device code, the operator approves it in a
//! browser, and `poll` exchanges the device code for an access token. Every
//! poll iteration is bounded by the ticket's `expires_at`.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::{debug, warn};
use reqwest::Client;
use serde::Deserialize;

use crate::config::{oauth, polling};
use crate::error::{OktaError, Result};
use crate::okta::build_http_client;
use crate::polling::{interrupt, or_cancel, sleep_or_cancel};
use crate::session::{normalize_org_url, AuthMode, Session};

/// Pending device authorization, consumed by polling
#[derive(Debug, Clone)]
pub struct DeviceAuthorizationTicket {
    pub device_code: String,
    pub user_code: String,
    pub verification_uri: String,
    pub expires_at: DateTime<Utc>,
    pub poll_interval: Duration,
}

impl DeviceAuthorizationTicket {
    /// Time left before the device code expires, `None` once it has
    pub fn remaining(&self) -> Option<Duration> {
        (self.expires_at - Utc::now())
            .to_std()
            .ok()
            .filter(|d| !d.is_zero())
    }
}

/// Access token issued by the token endpoint
#[derive(Clone, Deserialize)]
pub struct BearerToken {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
    #[serde(default)]
    expires_in: Option<u64>,
    #[serde(default)]
    scope: Option<String>,
}

impl BearerToken {
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn expires_in(&self) -> Option<u64> {
        self.expires_in
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    /// Bearer session for the org that issued this token
    pub fn into_session(self, org_url: &str) -> Session {
        Session::new(org_url, AuthMode::Bearer, self.access_token)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("access_token", &"***")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Deserialize, Debug)]
struct DeviceAuthorizationResponse {
    device_code: Option<String>,
    #[serde(default)]
    user_code: Option<String>,
    verification_uri: Option<String>,
    verification_uri_complete: Option<String>,
    expires_in: Option<u64>,
    interval: Option<u64>,
}

/// OAuth error body (`error`, `error_description`)
#[derive(Deserialize, Debug)]
struct OAuthErrorBody {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

impl OAuthErrorBody {
    fn message(&self) -> String {
        match &self.error_description {
            Some(desc) => format!("{}: {}", self.error, desc),
            None => self.error.clone(),
        }
    }
}

/// What one token request told us
#[derive(Debug)]
pub(crate) enum PollOutcome {
    Granted(BearerToken),
    Pending,
    SlowDown,
    Terminal(OktaError),
    Transient(String),
}

/// Classify a token endpoint reply
pub(crate) fn classify(status: u16, body: &str) -> PollOutcome {
    if (200..300).contains(&status) {
        return match serde_json::from_str::<BearerToken>(body) {
            Ok(token) => PollOutcome::Granted(token),
            Err(e) => PollOutcome::Terminal(OktaError::MalformedResponse(format!(
                "Token response without access_token: {}",
                e
            ))),
        };
    }

    match serde_json::from_str::<OAuthErrorBody>(body) {
        Ok(err) => match err.error.as_str() {
            "authorization_pending" => PollOutcome::Pending,
            "slow_down" => PollOutcome::SlowDown,
            "expired_token" => PollOutcome::Terminal(OktaError::Expired),
            "access_denied" => PollOutcome::Terminal(OktaError::Denied),
            _ => PollOutcome::Terminal(OktaError::Api {
                status,
                message: err.message(),
            }),
        },
        Err(_) => PollOutcome::Transient(format!("status {}", status)),
    }
}

/// Client for the device authorization endpoints of one org
pub struct DeviceAuthClient {
    http: Client,
    org_url: String,
}

impl DeviceAuthClient {
    pub fn new(org_url: &str) -> Self {
        Self {
            http: build_http_client(),
            org_url: normalize_org_url(org_url),
        }
    }

    pub fn org_url(&self) -> &str {
        &self.org_url
    }

    /// Request a device code for `client_id` and `scopes`
    pub async fn initiate(
        &self,
        client_id: &str,
        scopes: &[&str],
    ) -> Result<DeviceAuthorizationTicket> {
        let url = format!("{}{}", self.org_url, oauth::DEVICE_AUTHORIZE_PATH);
        let scope = scopes.join(" ");
        debug!("Requesting device authorization at {} (scope: {})", url, scope);

        let response = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[("client_id", client_id), ("scope", scope.as_str())])
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        if !(200..300).contains(&status) {
            let message = serde_json::from_str::<OAuthErrorBody>(&body)
                .map(|e| e.message())
                .unwrap_or_else(|_| "Failed to start device authorization".to_string());
            return Err(OktaError::Api { status, message });
        }

        let parsed: DeviceAuthorizationResponse = serde_json::from_str(&body).map_err(|e| {
            OktaError::MalformedResponse(format!("Invalid device authorization response: {}", e))
        })?;

        let device_code = parsed.device_code.ok_or_else(|| {
            OktaError::MalformedResponse("Device authorization response has no device_code".into())
        })?;
        let verification_uri = parsed
            .verification_uri_complete
            .or(parsed.verification_uri)
            .ok_or_else(|| {
                OktaError::MalformedResponse(
                    "Device authorization response has no verification URI".into(),
                )
            })?;

        let expires_in = parsed
            .expires_in
            .unwrap_or(polling::DEFAULT_DEVICE_EXPIRES_SECS);
        let interval = parsed
            .interval
            .unwrap_or(polling::DEFAULT_DEVICE_INTERVAL_SECS);
        let expires_at = i64::try_from(expires_in)
            .ok()
            .and_then(chrono::Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                OktaError::MalformedResponse(format!(
                    "Device authorization expires_in out of range: {}",
                    expires_in
                ))
            })?;

        Ok(DeviceAuthorizationTicket {
            device_code,
            user_code: parsed.user_code.unwrap_or_default(),
            verification_uri,
            expires_at,
            poll_interval: Duration::from_secs(interval),
        })
    }

    /// Poll until approved, denied, expired, or Ctrl-C
    pub async fn poll(
        &self,
        ticket: DeviceAuthorizationTicket,
        client_id: &str,
    ) -> Result<BearerToken> {
        self.poll_until(ticket, client_id, interrupt()).await
    }

    /// Poll until approved, denied, expired, or `cancel` resolves
    pub async fn poll_until<C>(
        &self,
        ticket: DeviceAuthorizationTicket,
        client_id: &str,
        cancel: C,
    ) -> Result<BearerToken>
    where
        C: Future<Output = ()>,
    {
        tokio::pin!(cancel);
        let mut interval = ticket.poll_interval;
        let mut attempt: u32 = 0;

        loop {
            let remaining = ticket.remaining().ok_or(OktaError::Expired)?;
            attempt += 1;

            let request = tokio::time::timeout(
                remaining,
                self.request_token(&ticket.device_code, client_id),
            );
            let outcome = match or_cancel(request, &mut cancel).await? {
                Err(_) => return Err(OktaError::Expired),
                Ok(Ok((status, body))) => classify(status, &body),
                Ok(Err(e)) => PollOutcome::Transient(e.to_string()),
            };

            match outcome {
                PollOutcome::Granted(token) => {
                    debug!("Device authorization granted after {} polls", attempt);
                    return Ok(token);
                }
                PollOutcome::Pending => debug!("Authorization pending (poll {})", attempt),
                PollOutcome::SlowDown => {
                    interval = interval
                        .saturating_add(Duration::from_secs(polling::SLOW_DOWN_INCREMENT_SECS));
                    debug!("Asked to slow down, interval now {:?}", interval);
                }
                PollOutcome::Terminal(err) => return Err(err),
                PollOutcome::Transient(msg) => {
                    warn!("Token request failed ({}), retrying", msg);
                }
            }

            let remaining = ticket.remaining().ok_or(OktaError::Expired)?;
            sleep_or_cancel(interval.min(remaining), &mut cancel).await?;
        }
    }

    async fn request_token(&self, device_code: &str, client_id: &str) -> Result<(u16, String)> {
        let url = format!("{}{}", self.org_url, oauth::TOKEN_PATH);
        let response = self
            .http
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&[
                ("grant_type", oauth::DEVICE_CODE_GRANT),
                ("device_code", device_code),
                ("client_id", client_id),
            ])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        Ok((status, body))
    }
}
