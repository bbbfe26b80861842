//! Users module - list, get and create users

mod api;
mod commands;
mod models;

pub use commands::{run_create_user_command, run_list_users_command};
pub use models::{User, UserProfile};
