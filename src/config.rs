/// Configuration constants for the Okta management API
pub mod api {
    /// Base path for the management API
    pub const BASE_PATH: &str = "/api/v1";

    /// Users endpoint
    pub const USERS: &str = "users";

    /// Groups endpoint
    pub const GROUPS: &str = "groups";

    /// Applications endpoint
    pub const APPS: &str = "apps";

    /// Default user schema endpoint
    pub const USER_SCHEMA: &str = "meta/schemas/user/default";

    /// Default page size for list requests
    pub const DEFAULT_PAGE_SIZE: u32 = 200;
}

/// Configuration constants for the OAuth endpoints
pub mod oauth {
    /// Device authorization endpoint
    pub const DEVICE_AUTHORIZE_PATH: &str = "/oauth2/v1/device/authorize";

    /// Token endpoint
    pub const TOKEN_PATH: &str = "/oauth2/v1/token";

    /// Device code grant type
    pub const DEVICE_CODE_GRANT: &str = "urn:ietf:params:oauth:grant-type:device_code";

    /// Scopes requested by `--login`
    pub const LOGIN_SCOPES: &[&str] = &[
        "openid",
        "okta.users.manage",
        "okta.apps.manage",
        "okta.groups.manage",
        "okta.schemas.manage",
    ];

    /// Management scopes granted to the CLI application during registration
    pub const ADMIN_SCOPES: &[&str] = &[
        "okta.users.manage",
        "okta.apps.manage",
        "okta.groups.manage",
        "okta.schemas.manage",
    ];
}

/// Polling defaults
pub mod polling {
    /// Device poll interval when the server does not send one (seconds)
    pub const DEFAULT_DEVICE_INTERVAL_SECS: u64 = 5;

    /// Device code lifetime when the server does not send one (seconds)
    pub const DEFAULT_DEVICE_EXPIRES_SECS: u64 = 600;

    /// Added to the interval on `slow_down` (seconds)
    pub const SLOW_DOWN_INCREMENT_SECS: u64 = 5;

    /// Org redemption poll interval (seconds)
    pub const REDEEM_INTERVAL_SECS: u64 = 5;

    /// Org redemption status checks before giving up
    pub const REDEEM_MAX_ATTEMPTS: u32 = 120;
}

/// Self-service registration service
pub mod registration {
    /// Registrar base URL
    pub const BASE_URL: &str = "https://start.okta.dev";

    /// Registration endpoint
    pub const CREATE_PATH: &str = "/create/org";

    /// Label for the application created by `--register`
    pub const CLI_APP_LABEL: &str = "oktactl";

    /// Redirect URI registered for the CLI application
    pub const CLI_APP_REDIRECT_URI: &str = "http://localhost:8080/callback";

    /// Environment variable overriding the registrar URL
    pub const ENV_VAR: &str = "OKTACTL_REGISTRAR_URL";
}

/// Persisted settings file
pub mod settings {
    /// Directory name under home
    pub const DIR_NAME: &str = ".oktactl";

    /// Settings file name
    pub const FILE_NAME: &str = "settings.json";

    /// Org URL environment variable
    pub const ORG_ENV_VAR: &str = "OKTA_ORG_URL";

    /// Client ID environment variable
    pub const CLIENT_ID_ENV_VAR: &str = "OKTA_CLIENT_ID";

    /// API token environment variable
    pub const TOKEN_ENV_VAR: &str = "OKTA_API_TOKEN";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_path_format() {
        assert!(api::BASE_PATH.starts_with('/'));
        assert!(!api::BASE_PATH.ends_with('/'));
    }

    #[test]
    fn test_admin_scopes_subset_of_login_scopes() {
        for scope in oauth::ADMIN_SCOPES {
            assert!(oauth::LOGIN_SCOPES.contains(scope));
        }
    }

    #[test]
    fn test_registrar_url_is_https() {
        assert!(registration::BASE_URL.starts_with("https://"));
    }
}
