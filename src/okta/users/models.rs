//! User data models

use serde::{Deserialize, Serialize};

use crate::okta::traits::OktaResource;

/// User from the management API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub status: Option<String>,
    pub created: Option<String>,
    #[serde(rename = "lastLogin")]
    pub last_login: Option<String>,
    #[serde(default)]
    pub profile: UserProfile,
}

/// User profile; attributes beyond the common ones are kept in `extra`
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct UserProfile {
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub login: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl User {
    pub fn login(&self) -> &str {
        self.profile.login.as_deref().unwrap_or("")
    }

    pub fn email(&self) -> &str {
        self.profile.email.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("UNKNOWN")
    }

    /// "First Last", skipping missing parts
    pub fn full_name(&self) -> String {
        [
            self.profile.first_name.as_deref(),
            self.profile.last_name.as_deref(),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
    }
}

impl OktaResource for User {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.login()
    }
}
