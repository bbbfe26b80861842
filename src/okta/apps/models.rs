//! Application data models

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::config::oauth;
use crate::okta::traits::OktaResource;

/// Application from the management API
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Application {
    pub id: String,
    pub name: Option<String>,
    pub label: Option<String>,
    pub status: Option<String>,
    #[serde(rename = "signOnMode")]
    pub sign_on_mode: Option<String>,
    pub credentials: Option<AppCredentials>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AppCredentials {
    #[serde(rename = "oauthClient")]
    pub oauth_client: Option<OAuthClientCredentials>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct OAuthClientCredentials {
    pub client_id: Option<String>,
    pub token_endpoint_auth_method: Option<String>,
}

impl Application {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }

    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or("UNKNOWN")
    }

    pub fn sign_on_mode(&self) -> &str {
        self.sign_on_mode.as_deref().unwrap_or("")
    }

    /// OAuth client ID; OIDC apps use the app ID when none is reported
    pub fn client_id(&self) -> &str {
        self.credentials
            .as_ref()
            .and_then(|c| c.oauth_client.as_ref())
            .and_then(|o| o.client_id.as_deref())
            .unwrap_or(&self.id)
    }
}

impl OktaResource for Application {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        self.label()
    }
}

/// OIDC application types offered by `create app`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AppType {
    /// Server-side web application
    Web,
    /// Single page application
    #[value(alias = "spa")]
    Browser,
    /// Native / mobile / CLI application
    Native,
    /// Machine-to-machine service
    Service,
}

impl AppType {
    /// Menu choices shown by the interactive `create app`
    pub const MENU: [(&'static str, AppType); 4] = [
        ("Web App", AppType::Web),
        ("Single Page App", AppType::Browser),
        ("Native App (mobile)", AppType::Native),
        ("Service App (Machine-to-Machine)", AppType::Service),
    ];

    /// `application_type` value on the wire
    pub fn wire_name(&self) -> &'static str {
        match self {
            AppType::Web => "web",
            AppType::Browser => "browser",
            AppType::Native => "native",
            AppType::Service => "service",
        }
    }

    /// Parse a 1-based menu choice
    pub fn from_menu_choice(choice: &str) -> Option<AppType> {
        let index: usize = choice.trim().parse().ok()?;
        Self::MENU.get(index.checked_sub(1)?).map(|(_, t)| *t)
    }

    pub fn needs_redirect_uri(&self) -> bool {
        !matches!(self, AppType::Service)
    }
}

/// Everything needed to create an OIDC application
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSpec {
    pub label: String,
    pub app_type: AppType,
    pub token_endpoint_auth_method: String,
    pub grant_types: Vec<String>,
    pub response_types: Vec<String>,
    pub redirect_uris: Vec<String>,
}

impl AppSpec {
    /// Defaults per application type
    pub fn new(label: &str, app_type: AppType, redirect_uri: Option<&str>) -> Self {
        let (auth_method, grants, responses) = match app_type {
            AppType::Web | AppType::Native => {
                ("client_secret_post", vec!["authorization_code"], vec!["code"])
            }
            AppType::Browser => ("none", vec!["authorization_code"], vec!["code"]),
            AppType::Service => ("client_secret_post", vec!["client_credentials"], vec!["token"]),
        };
        Self {
            label: label.to_string(),
            app_type,
            token_endpoint_auth_method: auth_method.to_string(),
            grant_types: grants.into_iter().map(String::from).collect(),
            response_types: responses.into_iter().map(String::from).collect(),
            redirect_uris: redirect_uri
                .filter(|_| app_type.needs_redirect_uri())
                .filter(|u| !u.is_empty())
                .map(|u| vec![u.to_string()])
                .unwrap_or_default(),
        }
    }

    /// Public native client that can run the device authorization grant
    pub fn cli_native(label: &str, redirect_uri: &str) -> Self {
        Self {
            token_endpoint_auth_method: "none".to_string(),
            grant_types: vec![
                "authorization_code".to_string(),
                "refresh_token".to_string(),
                oauth::DEVICE_CODE_GRANT.to_string(),
            ],
            ..Self::new(label, AppType::Native, Some(redirect_uri))
        }
    }

    /// Request body for `POST /apps`
    pub fn to_request(&self) -> serde_json::Value {
        serde_json::json!({
            "name": "oidc_client",
            "label": self.label,
            "signOnMode": "OPENID_CONNECT",
            "credentials": {
                "oauthClient": {
                    "token_endpoint_auth_method": self.token_endpoint_auth_method
                }
            },
            "settings": {
                "oauthClient": {
                    "redirect_uris": self.redirect_uris,
                    "response_types": self.response_types,
                    "grant_types": self.grant_types,
                    "application_type": self.app_type.wire_name()
                }
            }
        })
    }
}

/// Scope grant request body
#[derive(Serialize, Debug)]
pub(super) struct ScopeGrantRequest<'a> {
    pub issuer: &'a str,
    #[serde(rename = "scopeId")]
    pub scope_id: &'a str,
}

/// App user assignment request body
#[derive(Serialize, Debug)]
pub(super) struct AppUserAssignment<'a> {
    pub id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice() {
        assert_eq!(AppType::from_menu_choice("1"), Some(AppType::Web));
        assert_eq!(AppType::from_menu_choice(" 4 "), Some(AppType::Service));
        assert_eq!(AppType::from_menu_choice("0"), None);
        assert_eq!(AppType::from_menu_choice("5"), None);
        assert_eq!(AppType::from_menu_choice("web"), None);
    }

    #[test]
    fn test_service_spec_has_no_redirect() {
        let spec = AppSpec::new("svc", AppType::Service, Some("https://ignored"));
        assert!(spec.redirect_uris.is_empty());
        assert_eq!(spec.grant_types, vec!["client_credentials"]);
        assert_eq!(spec.response_types, vec!["token"]);
    }

    #[test]
    fn test_browser_spec_is_public_client() {
        let spec = AppSpec::new("spa", AppType::Browser, Some("http://localhost/cb"));
        assert_eq!(spec.token_endpoint_auth_method, "none");
        assert_eq!(spec.redirect_uris, vec!["http://localhost/cb"]);
    }

    #[test]
    fn test_cli_native_spec_allows_device_grant() {
        let spec = AppSpec::cli_native("oktactl", "http://localhost:8080/callback");
        assert_eq!(spec.app_type, AppType::Native);
        assert_eq!(spec.token_endpoint_auth_method, "none");
        assert!(spec
            .grant_types
            .contains(&oauth::DEVICE_CODE_GRANT.to_string()));
    }

    #[test]
    fn test_request_body_shape() {
        let body = AppSpec::new("My Web", AppType::Web, Some("https://app/cb")).to_request();
        assert_eq!(body["name"], "oidc_client");
        assert_eq!(body["label"], "My Web");
        assert_eq!(body["signOnMode"], "OPENID_CONNECT");
        assert_eq!(
            body["credentials"]["oauthClient"]["token_endpoint_auth_method"],
            "client_secret_post"
        );
        assert_eq!(body["settings"]["oauthClient"]["application_type"], "web");
        assert_eq!(
            body["settings"]["oauthClient"]["redirect_uris"],
            serde_json::json!(["https://app/cb"])
        );
    }

    #[test]
    fn test_client_id_falls_back_to_app_id() {
        let app: Application =
            serde_json::from_value(serde_json::json!({"id": "0oa7", "label": "x"})).unwrap();
        assert_eq!(app.client_id(), "0oa7");
    }
}
