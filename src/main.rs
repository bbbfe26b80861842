//! oktactl - main entry point

use std::process::ExitCode;

use clap::Parser;
use log::{debug, info, warn};

use oktactl::cli::repl::{dispatch_until, run_repl, ReplExit};
use oktactl::polling::interrupt;
use oktactl::{
    run_login_command, run_register_command, AuthMode, Cli, ConsoleInput, OktaClient,
    OrgProvisioner, Session, Settings, SettingsStore,
};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level))
        .init();

    info!("Starting oktactl v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        "CLI args: login={:?}, register={}, output={}, batch={}, command={:?}",
        cli.login, cli.register, cli.output, cli.batch, cli.command
    );

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> oktactl::Result<()> {
    let store = SettingsStore::new();
    let settings = store.load()?;
    let mut input = ConsoleInput::new();
    let options = cli.output_options();

    let session = if cli.register {
        let mut provisioner = OrgProvisioner::new();
        run_register_command(&mut provisioner, &store, &mut input, cli.batch).await?
    } else {
        let session = run_login_command(&cli, &settings).await?;
        remember_login(&store, &settings, &cli, &session);
        session
    };

    let client = OktaClient::new(session);
    match &cli.command {
        Some(command) => {
            dispatch_until(&client, command, &mut input, &options, interrupt()).await
        }
        None => {
            if run_repl(&client, &mut input, &options).await? == ReplExit::Logout {
                debug!("Session discarded");
            }
            Ok(())
        }
    }
}

/// Save the org and client ID of a successful device login for next time
fn remember_login(store: &SettingsStore, saved: &Settings, cli: &Cli, session: &Session) {
    if session.auth_mode() != AuthMode::Bearer {
        return;
    }
    let updated = Settings {
        org_url: Some(session.base_url().to_string()),
        client_id: cli.client_id.clone().or_else(|| saved.client_id.clone()),
    };
    if updated == *saved {
        return;
    }
    match store.save(&updated) {
        Ok(()) => debug!("Remembered org {}", session.base_url()),
        Err(e) => warn!("Failed to save settings: {}", e),
    }
}
