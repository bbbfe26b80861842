//! Shared API models: the service's error body

use log::debug;
use serde::Deserialize;

use crate::error::OktaError;

/// Error body returned by the management API (and the registrar)
#[derive(Deserialize, Debug, Clone, Default)]
pub struct OktaErrorBody {
    #[serde(rename = "errorCode")]
    pub error_code: Option<String>,
    #[serde(rename = "errorSummary")]
    pub error_summary: Option<String>,
    #[serde(rename = "errorId")]
    pub error_id: Option<String>,
    #[serde(rename = "errorCauses", default)]
    pub error_causes: Vec<ErrorCause>,
}

/// One entry of `errorCauses`
#[derive(Deserialize, Debug, Clone)]
pub struct ErrorCause {
    #[serde(rename = "errorSummary")]
    pub error_summary: String,
}

impl OktaErrorBody {
    pub fn causes(&self) -> Vec<String> {
        self.error_causes
            .iter()
            .map(|c| c.error_summary.clone())
            .collect()
    }

    /// Convert to a crate error; a non-empty causes list becomes `Validation`
    pub fn into_error(self, status: u16, error_context: &str) -> OktaError {
        let summary = self
            .error_summary
            .clone()
            .unwrap_or_else(|| format!("Failed to {}", error_context));

        if !self.error_causes.is_empty() {
            return OktaError::Validation {
                causes: self.causes(),
                summary,
            };
        }

        OktaError::Api {
            status,
            message: format!("Failed to {}: {}", error_context, summary),
        }
    }
}

/// Build an error from a non-success response, using the error body when present
pub(crate) async fn error_from_response(response: reqwest::Response, error_context: &str) -> OktaError {
    let status = response.status().as_u16();
    let text = response.text().await.unwrap_or_default();
    debug!("Error response ({}) for {}: {}", status, error_context, text);

    match serde_json::from_str::<OktaErrorBody>(&text) {
        Ok(body) if body.error_summary.is_some() || !body.error_causes.is_empty() => {
            body.into_error(status, error_context)
        }
        _ => OktaError::Api {
            status,
            message: format!("Failed to {}", error_context),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_body_with_causes() {
        let body: OktaErrorBody = serde_json::from_value(serde_json::json!({
            "errorCode": "E0000001",
            "errorSummary": "Api validation failed: login",
            "errorId": "oae123",
            "errorCauses": [
                {"errorSummary": "login: An object with this field already exists"}
            ]
        }))
        .unwrap();

        assert_eq!(body.error_code.as_deref(), Some("E0000001"));
        match body.into_error(400, "create user") {
            OktaError::Validation { summary, causes } => {
                assert_eq!(summary, "Api validation failed: login");
                assert_eq!(
                    causes,
                    vec!["login: An object with this field already exists".to_string()]
                );
            }
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_error_body_without_causes_is_api_error() {
        let body: OktaErrorBody = serde_json::from_value(serde_json::json!({
            "errorCode": "E0000006",
            "errorSummary": "You do not have permission to perform the requested action"
        }))
        .unwrap();

        match body.into_error(403, "create group") {
            OktaError::Api { status, message } => {
                assert_eq!(status, 403);
                assert!(message.contains("create group"));
                assert!(message.contains("permission"));
            }
            other => panic!("Expected Api, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_error_body_defaults() {
        let body: OktaErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.error_causes.is_empty());
        assert!(body.causes().is_empty());
    }
}
