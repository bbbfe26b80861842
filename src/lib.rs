//! oktactl - administer an Okta org from the command line
//!
//! Lists and creates users, groups and applications through the management
//! API. Operators log in with the OAuth device authorization grant (or an
//! API token), and `--register` provisions a brand new developer org.
//!
//! # Example
//!
//! ```bash
//! # Log in and open the interactive prompt
//! oktactl --login dev-123456.okta.com --client-id 0oa1b2c3d4
//!
//! # One-shot commands
//! oktactl list users all -o json
//! oktactl create user jane.json
//!
//! # Create a new org and set it up for this CLI
//! oktactl --register
//! ```

pub mod auth;
pub mod cli;
pub mod collector;
pub mod config;
pub mod error;
pub mod okta;
pub mod output;
pub mod polling;
pub mod provision;
pub mod session;
pub mod ui;

pub use auth::{run_login_command, BearerToken, DeviceAuthClient, DeviceAuthorizationTicket};
pub use cli::{Cli, Command, ListTarget, OutputFormat, ResourceKind};
pub use collector::{AttributeSet, ConsoleInput, InputSource, SchemaCollector, ScriptedInput};
pub use error::{OktaError, Result};
pub use okta::{
    Application, Group, OktaClient, OktaResource, Page, PaginatedCollection, SchemaField, User,
};
pub use output::OutputOptions;
pub use provision::{
    run_register_command, CliAppCredential, OrgCredential, OrgProvisioner, ProvisioningState,
    ProvisioningStep, Registrant,
};
pub use session::{AuthMode, Session, Settings, SettingsStore};
