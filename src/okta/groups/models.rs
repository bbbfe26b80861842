//! Group data models

use serde::{Deserialize, Serialize};

use crate::okta::traits::OktaResource;

/// Group from the management API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Group {
    pub id: String,
    #[serde(rename = "type")]
    pub group_type: Option<String>,
    pub created: Option<String>,
    #[serde(default)]
    pub profile: GroupProfile,
}

/// Group profile
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct GroupProfile {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl Group {
    pub fn name(&self) -> &str {
        self.profile.name.as_deref().unwrap_or("")
    }

    pub fn description(&self) -> &str {
        self.profile.description.as_deref().unwrap_or("")
    }

    pub fn group_type(&self) -> &str {
        self.group_type.as_deref().unwrap_or("")
    }
}

impl OktaResource for Group {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        Group::name(self)
    }
}

/// Request body for creating a group
#[derive(Serialize, Debug)]
pub(super) struct CreateGroupRequest<'a> {
    pub profile: CreateGroupProfile<'a>,
}

#[derive(Serialize, Debug)]
pub(super) struct CreateGroupProfile<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
}

impl<'a> CreateGroupRequest<'a> {
    pub fn new(name: &'a str, description: Option<&'a str>) -> Self {
        Self {
            profile: CreateGroupProfile {
                name,
                description: description.filter(|d| !d.is_empty()),
            },
        }
    }
}
