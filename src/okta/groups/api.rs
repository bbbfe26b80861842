//! Group API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::okta::traits::OktaResource;
use crate::okta::users::User;
use crate::okta::{OktaClient, PaginatedCollection};

use super::models::{CreateGroupRequest, Group};

impl OktaClient {
    /// List groups (first page fetched, the rest on demand)
    pub async fn list_groups(&self) -> Result<PaginatedCollection<'_, Group>> {
        self.list(&format!("/{}", api::GROUPS), "groups").await
    }

    /// Get a group by ID
    pub async fn get_group(&self, group_id: &str) -> Result<Option<Group>> {
        let path = format!("/{}/{}", api::GROUPS, urlencoding::encode(group_id));
        self.fetch_resource_by_path(&path, &format!("group '{}'", group_id))
            .await
    }

    /// Get a group by exact name, using the `q` prefix search
    pub async fn get_group_by_name(&self, name: &str) -> Result<Option<Group>> {
        let path = format!("/{}?q={}", api::GROUPS, urlencoding::encode(name));
        debug!("Looking up group by name: {}", name);
        let groups = self.list::<Group>(&path, "groups").await?.collect_all().await?;
        // q= is a prefix match
        Ok(groups.into_iter().find(|g| g.matches(name)))
    }

    /// Resolve a group by ID first, then by name
    pub async fn find_group(&self, id_or_name: &str) -> Result<Option<Group>> {
        match self.get_group(id_or_name).await? {
            Some(group) => Ok(Some(group)),
            None => self.get_group_by_name(id_or_name).await,
        }
    }

    /// List members of a group through the same pagination as other lists
    pub async fn list_group_members(&self, group_id: &str) -> Result<PaginatedCollection<'_, User>> {
        let path = format!("/{}/{}/users", api::GROUPS, urlencoding::encode(group_id));
        let context = format!("members of group '{}'", group_id);
        self.list(&path, &context).await
    }

    /// Create a group
    pub async fn create_group(&self, name: &str, description: Option<&str>) -> Result<Group> {
        let path = format!("/{}", api::GROUPS);
        self.post_json(&path, &CreateGroupRequest::new(name, description), "create group")
            .await
    }
}
