//! Application API operations

use log::debug;

use crate::config::api;
use crate::error::Result;
use crate::okta::traits::OktaResource;
use crate::okta::{OktaClient, PaginatedCollection};

use super::models::{AppSpec, AppUserAssignment, Application, ScopeGrantRequest};

impl OktaClient {
    /// List applications (first page fetched, the rest on demand)
    pub async fn list_apps(&self) -> Result<PaginatedCollection<'_, Application>> {
        self.list(&format!("/{}", api::APPS), "applications").await
    }

    /// Get an application by ID
    pub async fn get_app(&self, app_id: &str) -> Result<Option<Application>> {
        let path = format!("/{}/{}", api::APPS, urlencoding::encode(app_id));
        self.fetch_resource_by_path(&path, &format!("application '{}'", app_id))
            .await
    }

    /// Resolve an application by ID first, then by exact label
    pub async fn find_app(&self, id_or_label: &str) -> Result<Option<Application>> {
        if let Some(app) = self.get_app(id_or_label).await? {
            return Ok(Some(app));
        }
        let path = format!("/{}?q={}", api::APPS, urlencoding::encode(id_or_label));
        debug!("Looking up application by label: {}", id_or_label);
        let apps = self
            .list::<Application>(&path, "applications")
            .await?
            .collect_all()
            .await?;
        Ok(apps.into_iter().find(|a| a.matches(id_or_label)))
    }

    /// Create an OIDC application
    pub async fn create_app(&self, spec: &AppSpec) -> Result<Application> {
        let path = format!("/{}", api::APPS);
        self.post_json(&path, &spec.to_request(), "create application")
            .await
    }

    /// Grant one management API scope to an application
    pub async fn grant_scope(&self, app_id: &str, issuer: &str, scope: &str) -> Result<()> {
        let path = format!("/{}/{}/grants", api::APPS, urlencoding::encode(app_id));
        let request = ScopeGrantRequest {
            issuer,
            scope_id: scope,
        };
        self.post_no_content(&path, &request, &format!("grant scope '{}'", scope))
            .await
    }

    /// Assign a user to an application
    pub async fn assign_user_to_app(&self, app_id: &str, user_id: &str) -> Result<()> {
        let path = format!("/{}/{}/users", api::APPS, urlencoding::encode(app_id));
        self.post_no_content(
            &path,
            &AppUserAssignment { id: user_id },
            &format!("assign user '{}' to application", user_id),
        )
        .await
    }
}
