//! Okta management API client module
//!
//! Typed access to users, groups, applications and the user schema, built
//! on one [`OktaClient`] per [`Session`](crate::session::Session).

mod client;
pub mod apps;
pub mod groups;
mod helpers;
pub mod models;
pub mod pagination;
pub mod schema;
pub mod traits;
pub mod users;

pub(crate) use client::build_http_client;
pub use client::OktaClient;
pub use apps::{run_create_app_command, run_list_apps_command, AppSpec, AppType, Application};
pub use groups::{run_create_group_command, run_list_groups_command, Group, GroupProfile};
pub use models::{ErrorCause, OktaErrorBody};
pub use pagination::{Page, PaginatedCollection};
pub use schema::{parse_user_schema, FieldOrigin, SchemaField};
pub use traits::OktaResource;
pub use users::{run_create_user_command, run_list_users_command, User, UserProfile};
