//! Provisioning state and workflow steps

use std::fmt;

/// Lifecycle of a registration request. Only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisioningState {
    Requested,
    Pending,
    Active,
    Failed,
}

impl ProvisioningState {
    /// Map a registrar status string; matching is exact
    pub fn from_remote(status: &str) -> Self {
        match status {
            "PENDING" => ProvisioningState::Pending,
            "ACTIVE" => ProvisioningState::Active,
            _ => ProvisioningState::Failed,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, ProvisioningState::Active | ProvisioningState::Failed)
    }

    fn rank(&self) -> u8 {
        match self {
            ProvisioningState::Requested => 0,
            ProvisioningState::Pending => 1,
            ProvisioningState::Active | ProvisioningState::Failed => 2,
        }
    }

    /// Next state, ignoring backward moves and moves out of a terminal state
    pub fn advance(self, next: ProvisioningState) -> ProvisioningState {
        if self.is_terminal() || next.rank() < self.rank() {
            self
        } else {
            next
        }
    }
}

impl fmt::Display for ProvisioningState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ProvisioningState::Requested => "requested",
            ProvisioningState::Pending => "pending",
            ProvisioningState::Active => "active",
            ProvisioningState::Failed => "failed",
        };
        write!(f, "{}", s)
    }
}

/// Bootstrap step, reported when the workflow stops part way
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisioningStep {
    GrantScope(String),
    AttachUser,
}

impl fmt::Display for ProvisioningStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProvisioningStep::GrantScope(scope) => write!(f, "scope grant '{}'", scope),
            ProvisioningStep::AttachUser => write!(f, "user assignment"),
        }
    }
}
