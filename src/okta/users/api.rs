//! User API operations

use log::debug;

use crate::collector::AttributeSet;
use crate::config::api;
use crate::error::Result;
use crate::okta::{OktaClient, PaginatedCollection};

use super::models::User;

impl OktaClient {
    /// List users (first page fetched, the rest on demand)
    pub async fn list_users(&self) -> Result<PaginatedCollection<'_, User>> {
        self.list(&format!("/{}", api::USERS), "users").await
    }

    /// Get a user by ID or login
    pub async fn get_user(&self, id_or_login: &str) -> Result<Option<User>> {
        let path = format!("/{}/{}", api::USERS, urlencoding::encode(id_or_login));
        self.fetch_resource_by_path(&path, &format!("user '{}'", id_or_login))
            .await
    }

    /// Create a user from a collected profile
    pub async fn create_user(&self, profile: &AttributeSet, activate: bool) -> Result<User> {
        let path = format!("/{}?activate={}", api::USERS, activate);
        debug!(
            "Creating user with {} profile attributes (activate: {})",
            profile.len(),
            activate
        );
        self.post_json(&path, &profile.to_payload(), "create user")
            .await
    }
}
