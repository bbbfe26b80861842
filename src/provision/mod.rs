//! Self-service org provisioning
//!
//! register -> redeem -> bootstrap. The provisioner tracks a monotonic
//! [`ProvisioningState`]; bootstrap failures after the CLI application exists
//! surface as `PartialProvisioning`.

mod bootstrap;
mod commands;
pub mod models;
mod registration;
mod state;

pub use commands::{prompt_registrant, run_register_command};
pub use models::{CliAppCredential, OrgCredential, RedeemOptions, RedemptionHandle, Registrant};
pub use registration::OrgProvisioner;
pub use state::{ProvisioningState, ProvisioningStep};
