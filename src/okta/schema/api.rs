//! User schema API operations

use log::debug;

use crate::config::api;
use crate::error::{OktaError, Result};
use crate::okta::OktaClient;

use super::models::{parse_user_schema, SchemaField};

impl OktaClient {
    /// Fetch the default user schema as an ordered field list
    pub async fn get_user_schema(&self) -> Result<Vec<SchemaField>> {
        let path = format!("/{}", api::USER_SCHEMA);
        let document: serde_json::Value = self
            .fetch_resource_by_path(&path, "default user schema")
            .await?
            .ok_or_else(|| OktaError::Api {
                status: 404,
                message: "Default user schema not found".to_string(),
            })?;

        let fields = parse_user_schema(&document)?;
        debug!(
            "User schema has {} fields ({} required)",
            fields.len(),
            fields.iter().filter(|f| f.required).count()
        );
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_get_user_schema() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/meta/schemas/user/default"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "definitions": {
                    "base": {
                        "properties": {
                            "login": {"title": "Username", "required": true},
                            "title": {"title": "Title"}
                        }
                    },
                    "custom": {"properties": {}}
                }
            })))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let fields = client.get_user_schema().await.unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].external_name, "login");
        assert!(fields[0].required);
        assert!(!fields[1].required);
    }

    #[tokio::test]
    async fn test_get_user_schema_missing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/meta/schemas/user/default"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        assert!(client.get_user_schema().await.is_err());
    }
}
