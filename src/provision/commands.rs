//! `--register`: create a new org and set it up for this CLI

use log::{debug, warn};

use crate::collector::{prompt_required, InputSource};
use crate::error::Result;
use crate::session::{Session, Settings, SettingsStore};
use crate::ui::{clear_spinner, create_spinner, finish_spinner, update_spinner};

use super::models::Registrant;
use super::registration::OrgProvisioner;

pub fn prompt_registrant(input: &mut dyn InputSource) -> Result<Registrant> {
    Ok(Registrant {
        first_name: prompt_required(input, "First name")?,
        last_name: prompt_required(input, "Last name")?,
        email: prompt_required(input, "Email address")?,
        country: prompt_required(input, "Country")?,
    })
}

/// Register, wait for the org, bootstrap the CLI app, and remember the result
///
/// Returns an API-token session for the new org.
pub async fn run_register_command(
    provisioner: &mut OrgProvisioner,
    store: &SettingsStore,
    input: &mut dyn InputSource,
    quiet: bool,
) -> Result<Session> {
    let registrant = prompt_registrant(input)?;

    let handle = provisioner.register(&registrant).await?;
    println!(
        "Registration accepted. Check {} to activate your account.",
        registrant.email
    );

    let spinner = create_spinner("Waiting for the org to become active...", quiet);
    let credential = match provisioner.redeem(&handle).await {
        Ok(credential) => credential,
        Err(e) => {
            clear_spinner(spinner);
            return Err(e);
        }
    };
    update_spinner(&spinner, "Creating the CLI application...");
    println!("Your org is ready: {}", credential.org_url);

    let mut settings = Settings {
        org_url: Some(credential.org_url.clone()),
        client_id: None,
    };
    if let Err(e) = store.save(&settings) {
        warn!("Failed to remember org URL: {}", e);
    }

    let app = match provisioner.bootstrap(&credential, &registrant).await {
        Ok(app) => app,
        Err(e) => {
            clear_spinner(spinner);
            return Err(e);
        }
    };
    finish_spinner(spinner, "Org provisioned");

    settings.client_id = Some(app.client_id.clone());
    store.save(&settings)?;
    debug!("Saved settings for {}", app.org_url);

    println!("CLI application client ID: {}", app.client_id);
    println!("Next time, run: oktactl --login {}", app.org_url);

    Ok(credential.session())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::ScriptedInput;
    use crate::error::OktaError;

    #[test]
    fn test_prompt_registrant_reasks_empty_answers() {
        let mut input = ScriptedInput::new(["Jane", "", " Doe ", "jane@example.com", "US"]);
        let registrant = prompt_registrant(&mut input).unwrap();
        assert_eq!(registrant.last_name, "Doe");
        assert_eq!(registrant.country, "US");
        assert_eq!(input.asked().len(), 5);
    }

    #[test]
    fn test_prompt_registrant_aborts() {
        let mut input = ScriptedInput::new(["Jane"]);
        assert!(matches!(
            prompt_registrant(&mut input),
            Err(OktaError::InputAborted(_))
        ));
    }
}
