//! Operator authentication
//!
//! The device authorization grant and the login command built on it.

mod commands;
pub mod device;

pub use commands::run_login_command;
pub use device::{BearerToken, DeviceAuthClient, DeviceAuthorizationTicket};
