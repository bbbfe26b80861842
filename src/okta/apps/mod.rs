//! Applications module - list, get and create OIDC applications, grants and assignments

mod api;
mod commands;
mod models;

pub use commands::{run_create_app_command, run_list_apps_command};
pub use models::{AppSpec, AppType, Application};
