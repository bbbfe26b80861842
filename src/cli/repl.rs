//! Interactive prompt: `list`, `create`, `logout`, `exit`

use std::future::Future;

use clap::{Parser, Subcommand};
use log::debug;

use crate::collector::{AttributeSet, InputSource};
use crate::error::{OktaError, Result};
use crate::okta::{
    run_create_app_command, run_create_group_command, run_create_user_command,
    run_list_apps_command, run_list_groups_command, run_list_users_command, OktaClient,
};
use crate::output::OutputOptions;
use crate::polling::{interrupt, or_cancel};

use super::{Command, ResourceKind};

const PROMPT: &str = "oktactl>";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, name = "oktactl", disable_version_flag = true)]
struct ReplLine {
    #[command(subcommand)]
    command: ReplCommand,
}

#[derive(Subcommand, Debug)]
enum ReplCommand {
    #[command(flatten)]
    Run(Command),
    /// End the session and leave
    Logout,
    /// Leave the prompt
    #[command(alias = "quit")]
    Exit,
}

/// Why the prompt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplExit {
    Exit,
    Logout,
}

/// Run one `list` or `create` command
pub async fn dispatch(
    client: &OktaClient,
    command: &Command,
    input: &mut dyn InputSource,
    options: &OutputOptions,
) -> Result<()> {
    match command {
        Command::List(args) => {
            let target = args.target();
            match args.kind {
                ResourceKind::User => run_list_users_command(client, &target, options).await,
                ResourceKind::Group => run_list_groups_command(client, &target, options).await,
                ResourceKind::App => run_list_apps_command(client, &target, options).await,
            }
        }
        Command::Create(args) => {
            let seed = match &args.seed {
                Some(path) => AttributeSet::from_json_file(path)?,
                None => AttributeSet::new(),
            };
            match args.kind {
                ResourceKind::User => {
                    run_create_user_command(client, &seed, input, options).await
                }
                ResourceKind::Group => {
                    run_create_group_command(client, &seed, input, options).await
                }
                ResourceKind::App => run_create_app_command(client, &seed, input, options).await,
            }
        }
    }
}

/// Run one command, abandoning it when `cancel` resolves
pub async fn dispatch_until<C>(
    client: &OktaClient,
    command: &Command,
    input: &mut dyn InputSource,
    options: &OutputOptions,
    cancel: C,
) -> Result<()>
where
    C: Future<Output = ()>,
{
    tokio::pin!(cancel);
    or_cancel(dispatch(client, command, input, options), &mut cancel).await?
}

/// Read commands until `exit`, `logout` or end of input; Ctrl-C cancels the
/// running command only
pub async fn run_repl(
    client: &OktaClient,
    input: &mut dyn InputSource,
    options: &OutputOptions,
) -> Result<ReplExit> {
    run_repl_until(client, input, options, interrupt).await
}

/// `run_repl` with a fresh `cancel()` future raced against each command
pub async fn run_repl_until<F, C>(
    client: &OktaClient,
    input: &mut dyn InputSource,
    options: &OutputOptions,
    cancel: F,
) -> Result<ReplExit>
where
    F: Fn() -> C,
    C: Future<Output = ()>,
{
    println!("Welcome to oktactl. Type 'help' for available commands.");

    loop {
        let line = match input.prompt(PROMPT) {
            Ok(line) => line,
            Err(OktaError::InputAborted(reason)) => {
                debug!("Prompt closed: {}", reason);
                return Ok(ReplExit::Exit);
            }
            Err(e) => return Err(e),
        };

        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let parsed = match ReplLine::try_parse_from(words) {
            Ok(parsed) => parsed,
            Err(e) => {
                // help and usage errors alike
                let _ = e.print();
                continue;
            }
        };

        match parsed.command {
            ReplCommand::Exit => return Ok(ReplExit::Exit),
            ReplCommand::Logout => {
                println!("Logged out.");
                return Ok(ReplExit::Logout);
            }
            ReplCommand::Run(command) => {
                match dispatch_until(client, &command, input, options, cancel()).await {
                    Ok(()) => {}
                    Err(OktaError::Cancelled) => eprintln!("Cancelled."),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
        }
    }
}
