//! Groups module - list, get and create groups, list group members

mod api;
mod commands;
mod models;

pub use commands::{run_create_group_command, run_list_groups_command};
pub use models::{Group, GroupProfile};
