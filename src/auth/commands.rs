//! Login command: static API token or device authorization

use log::{debug, info};

use crate::cli::Cli;
use crate::config::oauth;
use crate::error::Result;
use crate::session::{resolve_client_id, resolve_org_url, AuthMode, Session, Settings};
use crate::ui::{clear_spinner, create_spinner, finish_spinner};

use super::device::DeviceAuthClient;

/// Establish a session from the CLI flags and saved settings
///
/// An explicit API token skips the device flow entirely.
pub async fn run_login_command(cli: &Cli, settings: &Settings) -> Result<Session> {
    let org_url = resolve_org_url(cli.login.as_deref(), settings)?;

    if let Some(token) = &cli.token {
        debug!("Using API token for {}", org_url);
        return Ok(Session::new(&org_url, AuthMode::StaticToken, token.clone()));
    }

    let client_id = resolve_client_id(cli.client_id.as_deref(), settings)?;
    let client = DeviceAuthClient::new(&org_url);
    let ticket = client.initiate(&client_id, oauth::LOGIN_SCOPES).await?;

    println!(
        "Open your browser and navigate to the following URL to authorize this device: {}",
        ticket.verification_uri
    );
    if !ticket.user_code.is_empty() {
        println!("Confirm the code {} when prompted.", ticket.user_code);
    }

    let spinner = create_spinner("Waiting for authorization (Ctrl-C to cancel)...", cli.batch);
    match client.poll(ticket, &client_id).await {
        Ok(token) => {
            finish_spinner(spinner, "Authorized");
            info!("Logged in to {}", org_url);
            Ok(token.into_session(client.org_url()))
        }
        Err(e) => {
            clear_spinner(spinner);
            Err(e)
        }
    }
}
