//! Register and redeem a self-service org

use std::future::Future;

use log::{debug, warn};
use reqwest::Client;

use crate::config::registration;
use crate::error::{OktaError, Result};
use crate::okta::build_http_client;
use crate::polling::{interrupt, or_cancel, sleep_or_cancel};

use super::models::{
    OrgCredential, RedeemOptions, RedemptionHandle, RedemptionStatus, Registrant,
    RegistrationResponse,
};
use super::state::ProvisioningState;

/// Drives one org registration from request to credentials
pub struct OrgProvisioner {
    http: Client,
    registrar_url: String,
    options: RedeemOptions,
    state: ProvisioningState,
}

impl Default for OrgProvisioner {
    fn default() -> Self {
        Self::new()
    }
}

impl OrgProvisioner {
    /// Provisioner for the registrar in `OKTACTL_REGISTRAR_URL`, or the public one
    pub fn new() -> Self {
        let url = std::env::var(registration::ENV_VAR)
            .unwrap_or_else(|_| registration::BASE_URL.to_string());
        Self::with_registrar(&url)
    }

    pub fn with_registrar(registrar_url: &str) -> Self {
        Self {
            http: build_http_client(),
            registrar_url: registrar_url.trim_end_matches('/').to_string(),
            options: RedeemOptions::default(),
            state: ProvisioningState::Requested,
        }
    }

    pub fn with_options(mut self, options: RedeemOptions) -> Self {
        self.options = options;
        self
    }

    pub fn state(&self) -> ProvisioningState {
        self.state
    }

    fn transition(&mut self, next: ProvisioningState) {
        let advanced = self.state.advance(next);
        if advanced != self.state {
            debug!("Provisioning state: {} -> {}", self.state, advanced);
        }
        self.state = advanced;
    }

    /// Submit the registration; rejected input comes back as `Validation`
    pub async fn register(&mut self, registrant: &Registrant) -> Result<RedemptionHandle> {
        let url = format!("{}{}", self.registrar_url, registration::CREATE_PATH);
        debug!("Registering org for {} at {}", registrant.email, url);

        let response = self.http.post(&url).json(registrant).send().await?;
        let status = response.status();
        let body = response.text().await?;

        match serde_json::from_str::<RegistrationResponse>(&body) {
            Ok(RegistrationResponse::Accepted { token }) if status.is_success() => {
                self.transition(ProvisioningState::Requested);
                Ok(RedemptionHandle { token })
            }
            Ok(RegistrationResponse::Rejected {
                error_summary,
                error_causes,
            }) => Err(OktaError::Validation {
                summary: error_summary
                    .unwrap_or_else(|| "Registration was rejected".to_string()),
                causes: error_causes.into_iter().map(|c| c.error_summary).collect(),
            }),
            _ if !status.is_success() => Err(OktaError::Api {
                status: status.as_u16(),
                message: "Failed to register org".to_string(),
            }),
            _ => Err(OktaError::MalformedResponse(
                "Registration response has neither a token nor error causes".to_string(),
            )),
        }
    }

    /// Wait for the org to become active; Ctrl-C cancels
    pub async fn redeem(&mut self, handle: &RedemptionHandle) -> Result<OrgCredential> {
        self.redeem_until(handle, interrupt()).await
    }

    /// Wait for the org to become active, or until `cancel` resolves
    pub async fn redeem_until<C>(
        &mut self,
        handle: &RedemptionHandle,
        cancel: C,
    ) -> Result<OrgCredential>
    where
        C: Future<Output = ()>,
    {
        tokio::pin!(cancel);
        let max_attempts = self.options.max_attempts;

        for attempt in 1..=max_attempts {
            match or_cancel(self.fetch_status(handle), &mut cancel).await? {
                Ok(reply) => match ProvisioningState::from_remote(&reply.status) {
                    ProvisioningState::Active => match (reply.org_url, reply.api_token) {
                        (Some(org_url), Some(api_token)) => {
                            self.transition(ProvisioningState::Active);
                            return Ok(OrgCredential::new(&org_url, api_token));
                        }
                        _ => {
                            self.transition(ProvisioningState::Failed);
                            return Err(OktaError::RedemptionFailed(
                                "ACTIVE without org credentials".to_string(),
                            ));
                        }
                    },
                    ProvisioningState::Failed => {
                        self.transition(ProvisioningState::Failed);
                        return Err(OktaError::RedemptionFailed(reply.status));
                    }
                    other => {
                        self.transition(other);
                        debug!("Org still pending (check {}/{})", attempt, max_attempts);
                    }
                },
                Err(e @ OktaError::Http(_)) => {
                    warn!("Status check {} failed: {}", attempt, e);
                }
                Err(OktaError::Api { status, message }) if status >= 500 => {
                    warn!("Status check {} failed ({}): {}", attempt, status, message);
                }
                Err(e) => return Err(e),
            }

            if attempt < max_attempts {
                sleep_or_cancel(self.options.interval, &mut cancel).await?;
            }
        }

        Err(OktaError::Timeout {
            attempts: max_attempts,
        })
    }

    async fn fetch_status(&self, handle: &RedemptionHandle) -> Result<RedemptionStatus> {
        let url = format!(
            "{}{}/{}",
            self.registrar_url,
            registration::CREATE_PATH,
            urlencoding::encode(&handle.token)
        );
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(OktaError::Api {
                status: status.as_u16(),
                message: "Failed to check org status".to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| OktaError::MalformedResponse(format!("Invalid org status: {}", e)))
    }
}
