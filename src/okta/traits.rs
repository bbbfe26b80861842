//! Common traits for Okta resources

/// Common trait for users, groups and applications
pub trait OktaResource {
    /// Get the resource ID
    fn id(&self) -> &str;

    /// Get the human-readable name (login, group name or app label)
    fn name(&self) -> &str;

    /// Check if the resource matches by name or ID
    fn matches(&self, input: &str) -> bool {
        self.id() == input || self.name().eq_ignore_ascii_case(input)
    }
}
