//! CLI argument parsing

mod common;
pub mod repl;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{defaults, settings};
use crate::output::OutputOptions;

pub use common::{ListTarget, OutputFormat, ResourceKind};

/// Okta administration CLI
#[derive(Parser, Debug)]
#[command(name = "oktactl")]
#[command(version)]
#[command(about = "Manage users, groups and applications in an Okta org", long_about = None)]
pub struct Cli {
    /// Org URL to log into with the device authorization flow
    #[arg(long, value_name = "ORG", env = settings::ORG_ENV_VAR)]
    pub login: Option<String>,

    /// OIDC client ID of the CLI application
    #[arg(short = 'c', long, env = settings::CLIENT_ID_ENV_VAR)]
    pub client_id: Option<String>,

    /// Register a new developer org and set it up for this CLI
    #[arg(long, default_value_t = false, conflicts_with = "token")]
    pub register: bool,

    /// API token (skips the device flow)
    #[arg(short = 't', long, env = settings::TOKEN_ENV_VAR, hide_env_values = true)]
    pub token: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = defaults::LOG_LEVEL)]
    pub log_level: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    /// Omit table headers
    #[arg(long, default_value_t = false)]
    pub no_header: bool,

    /// Batch mode: no spinners, no optional questions
    #[arg(long, default_value_t = false)]
    pub batch: bool,

    /// Run one command instead of the interactive prompt
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    pub fn output_options(&self) -> OutputOptions {
        OutputOptions {
            format: self.output,
            no_header: self.no_header,
            batch: self.batch,
        }
    }
}

/// Commands available on the command line and at the prompt
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List users, groups or apps
    List(ListArgs),
    /// Create a user, group or app
    Create(CreateArgs),
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    /// What to list
    #[arg(value_enum)]
    pub kind: ResourceKind,

    /// `all` for every page, or an ID to show one resource
    pub target: Option<String>,
}

impl ListArgs {
    pub fn target(&self) -> ListTarget {
        ListTarget::parse(self.target.as_deref())
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct CreateArgs {
    /// What to create
    #[arg(value_enum)]
    pub kind: ResourceKind,

    /// JSON file with preset attribute values
    pub seed: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_default_values() {
        let cli = Cli::parse_from(["oktactl"]);
        assert_eq!(cli.log_level, defaults::LOG_LEVEL);
        assert_eq!(cli.output, OutputFormat::Table);
        assert!(!cli.register);
        assert!(!cli.no_header);
        assert!(!cli.batch);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_login_and_client_id() {
        let cli = Cli::parse_from([
            "oktactl",
            "--login",
            "dev-123.okta.com",
            "-c",
            "0oa-cli",
        ]);
        assert_eq!(cli.login.as_deref(), Some("dev-123.okta.com"));
        assert_eq!(cli.client_id.as_deref(), Some("0oa-cli"));
    }

    #[test]
    fn test_cli_output_format() {
        let cli = Cli::parse_from(["oktactl", "-o", "yaml", "--no-header"]);
        assert_eq!(cli.output, OutputFormat::Yaml);
        let options = cli.output_options();
        assert_eq!(options.format, OutputFormat::Yaml);
        assert!(options.no_header);
    }

    #[test]
    fn test_cli_register_conflicts_with_token() {
        assert!(Cli::try_parse_from(["oktactl", "--register", "--token", "x"]).is_err());
    }

    #[test]
    fn test_one_shot_list() {
        let cli = Cli::parse_from(["oktactl", "list", "groups", "all"]);
        match cli.command {
            Some(Command::List(args)) => {
                assert_eq!(args.kind, ResourceKind::Group);
                assert_eq!(args.target(), ListTarget::All);
            }
            other => panic!("Expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_one_shot_create_with_seed() {
        let cli = Cli::parse_from(["oktactl", "create", "user", "jane.json"]);
        match cli.command {
            Some(Command::Create(args)) => {
                assert_eq!(args.kind, ResourceKind::User);
                assert_eq!(args.seed, Some(PathBuf::from("jane.json")));
            }
            other => panic!("Expected create command, got {:?}", other),
        }
    }
}
