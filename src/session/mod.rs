//! Session management
//!
//! A [`Session`] bundles the org URL and credential used by every API call.
//! It is built once at startup (device login, static token or registration)
//! and passed explicitly to the components that need it.

mod models;
mod resolve;
mod store;

pub use models::{normalize_org_url, AuthMode, Session};
pub use resolve::{resolve_client_id, resolve_org_url};
pub use store::{Settings, SettingsStore};
