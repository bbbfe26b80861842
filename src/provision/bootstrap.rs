//! Bootstrap a freshly redeemed org for CLI use
//!
//! Creates the CLI application, grants it the management scopes and attaches
//! the registrant to it. Once the application exists, any failure is
//! reported as `PartialProvisioning` so the operator knows what to clean up.

use log::{debug, info};

use crate::collector::AttributeSet;
use crate::config::{oauth, registration};
use crate::error::{OktaError, Result};
use crate::okta::{AppSpec, OktaClient, User};

use super::models::{CliAppCredential, OrgCredential, Registrant};
use super::registration::OrgProvisioner;
use super::state::ProvisioningStep;

impl OrgProvisioner {
    /// Create and wire the CLI application in the new org
    pub async fn bootstrap(
        &self,
        credential: &OrgCredential,
        registrant: &Registrant,
    ) -> Result<CliAppCredential> {
        let client = OktaClient::new(credential.session());
        bootstrap_org(&client, registrant).await
    }
}

pub(crate) async fn bootstrap_org(
    client: &OktaClient,
    registrant: &Registrant,
) -> Result<CliAppCredential> {
    let spec = AppSpec::cli_native(
        registration::CLI_APP_LABEL,
        registration::CLI_APP_REDIRECT_URI,
    );
    let app = client.create_app(&spec).await?;
    info!("Created application '{}' ({})", app.label(), app.id);

    let partial = |step: ProvisioningStep, source: OktaError| OktaError::PartialProvisioning {
        step,
        app_id: app.id.clone(),
        source: Box::new(source),
    };

    for scope in oauth::ADMIN_SCOPES {
        client
            .grant_scope(&app.id, client.org_url(), scope)
            .await
            .map_err(|e| partial(ProvisioningStep::GrantScope(scope.to_string()), e))?;
        debug!("Granted {} to {}", scope, app.id);
    }

    let user = find_or_create_admin(client, registrant)
        .await
        .map_err(|e| partial(ProvisioningStep::AttachUser, e))?;
    client
        .assign_user_to_app(&app.id, &user.id)
        .await
        .map_err(|e| partial(ProvisioningStep::AttachUser, e))?;
    debug!("Assigned {} to {}", user.login(), app.id);

    Ok(CliAppCredential {
        org_url: client.org_url().to_string(),
        client_id: app.client_id().to_string(),
        app_id: app.id.clone(),
    })
}

async fn find_or_create_admin(client: &OktaClient, registrant: &Registrant) -> Result<User> {
    if let Some(user) = client.get_user(&registrant.email).await? {
        return Ok(user);
    }

    let profile: AttributeSet = [
        ("firstName", registrant.first_name.as_str()),
        ("lastName", registrant.last_name.as_str()),
        ("email", registrant.email.as_str()),
        ("login", registrant.email.as_str()),
    ]
    .into_iter()
    .collect();
    client.create_user(&profile, true).await
}
