//! Table rows for users, groups and applications

use super::Tabular;
use crate::okta::{Application, Group, User};

impl Tabular for User {
    fn headers() -> &'static [&'static str] {
        &["ID", "LOGIN", "NAME", "EMAIL", "STATUS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.login().to_string(),
            self.full_name(),
            self.email().to_string(),
            self.status().to_string(),
        ]
    }
}

impl Tabular for Group {
    fn headers() -> &'static [&'static str] {
        &["ID", "NAME", "TYPE", "DESCRIPTION"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name().to_string(),
            self.group_type().to_string(),
            self.description().to_string(),
        ]
    }
}

impl Tabular for Application {
    fn headers() -> &'static [&'static str] {
        &["ID", "LABEL", "CLIENT ID", "SIGN-ON MODE", "STATUS"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.label().to_string(),
            self.client_id().to_string(),
            self.sign_on_mode().to_string(),
            self.status().to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": "00u1",
            "status": "STAGED",
            "profile": {"firstName": "Jane", "lastName": "Doe", "login": "jd", "email": "jd@x.io"}
        }))
        .unwrap();
        assert_eq!(user.row(), vec!["00u1", "jd", "Jane Doe", "jd@x.io", "STAGED"]);
        assert_eq!(User::headers().len(), user.row().len());
    }

    #[test]
    fn test_group_row() {
        let group: Group = serde_json::from_value(serde_json::json!({
            "id": "00g1",
            "type": "OKTA_GROUP",
            "profile": {"name": "Admins", "description": "Org admins"}
        }))
        .unwrap();
        assert_eq!(group.row(), vec!["00g1", "Admins", "OKTA_GROUP", "Org admins"]);
    }

    #[test]
    fn test_app_row_uses_oauth_client_id() {
        let app: Application = serde_json::from_value(serde_json::json!({
            "id": "0oa1",
            "label": "CLI",
            "status": "ACTIVE",
            "signOnMode": "OPENID_CONNECT",
            "credentials": {"oauthClient": {"client_id": "0oa1client"}}
        }))
        .unwrap();
        assert_eq!(app.row()[2], "0oa1client");
        assert_eq!(Application::headers().len(), app.row().len());
    }
}
