//! Okta HTTP client for management API interactions

use log::debug;
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use crate::config::api;
use crate::error::{OktaError, Result};
use crate::okta::models::error_from_response;
use crate::okta::pagination::{next_cursor_from_links, Page, PaginatedCollection};
use crate::session::Session;

/// Okta management API client bound to one [`Session`]
pub struct OktaClient {
    client: Client,
    session: Session,
}

/// Shared reqwest client settings
pub(crate) fn build_http_client() -> Client {
    Client::builder()
        .pool_max_idle_per_host(10)
        .pool_idle_timeout(Duration::from_secs(90))
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| Client::new())
}

impl OktaClient {
    pub fn new(session: Session) -> Self {
        Self {
            client: build_http_client(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Org URL without the API path (used as the OAuth issuer)
    pub fn org_url(&self) -> &str {
        self.session.base_url()
    }

    /// Build the base URL for API requests
    pub(crate) fn base_url(&self) -> String {
        format!("{}{}", self.session.base_url(), api::BASE_PATH)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header(AUTHORIZATION, self.session.authorization_header())
            .header(ACCEPT, "application/json")
    }

    pub(crate) fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.get(self.url(path)))
    }

    pub(crate) fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.with_headers(self.client.post(self.url(path)))
    }

    /// Parse an API response, returning the decoded Okta error for non-success codes
    pub(crate) async fn parse_api_response<T>(
        &self,
        response: reqwest::Response,
        error_context: &str,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        if !response.status().is_success() {
            return Err(error_from_response(response, error_context).await);
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            OktaError::MalformedResponse(format!("Failed to parse {}: {}", error_context, e))
        })
    }

    /// POST a JSON body and decode the JSON reply
    pub(crate) async fn post_json<B, T>(&self, path: &str, body: &B, error_context: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {} ({})", path, error_context);
        let response = self.post(path).json(body).send().await?;
        self.parse_api_response(response, error_context).await
    }

    /// POST a JSON body when only the status matters
    pub(crate) async fn post_no_content<B>(
        &self,
        path: &str,
        body: &B,
        error_context: &str,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        debug!("POST {} ({})", path, error_context);
        let response = self.post(path).json(body).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response, error_context).await);
        }
        Ok(())
    }

    /// Fetch a single resource by API path
    ///
    /// Returns `None` for 404 and an error for any other non-success status.
    pub async fn fetch_resource_by_path<T>(&self, path: &str, resource_label: &str) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        debug!("Fetching {} from: {}", resource_label, self.url(path));

        let response = self.get(path).send().await?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }
        let context = format!("fetch {}", resource_label);
        self.parse_api_response(response, &context).await.map(Some)
    }

    /// Fetch one page of a list endpoint
    ///
    /// `cursor` is the `after` token of the previous page's `rel="next"` link.
    pub(crate) async fn fetch_page<T>(
        &self,
        path: &str,
        cursor: Option<&str>,
        error_context: &str,
    ) -> Result<Page<T>>
    where
        T: DeserializeOwned,
    {
        let mut request = self
            .get(path)
            .query(&[("limit", api::DEFAULT_PAGE_SIZE.to_string())]);
        if let Some(after) = cursor {
            request = request.query(&[("after", after)]);
        }

        debug!("Fetching page of {} (after: {:?})", error_context, cursor);

        let response = request.send().await?;
        let next = next_cursor_from_links(
            response
                .headers()
                .get_all(LINK)
                .iter()
                .filter_map(|value| value.to_str().ok()),
        );
        let items: Vec<T> = self
            .parse_api_response(response, &format!("list {}", error_context))
            .await?;

        debug!(
            "Page of {} returned {} items (more: {})",
            error_context,
            items.len(),
            next.is_some()
        );
        Ok(Page {
            items,
            cursor: next,
        })
    }

    /// Start a paginated listing: fetches the first page and binds the query
    pub async fn list<T>(&self, path: &str, error_context: &str) -> Result<PaginatedCollection<'_, T>>
    where
        T: DeserializeOwned,
    {
        let first = self.fetch_page(path, None, error_context).await?;
        Ok(PaginatedCollection::new(self, path, error_context, first))
    }
}

#[cfg(test)]
impl OktaClient {
    /// Create a test client pointed at a mock server
    pub fn test_client(base_url: &str) -> Self {
        Self::new(Session::new(
            base_url,
            crate::session::AuthMode::StaticToken,
            "test-token".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::AuthMode;
    use serde::Deserialize;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[derive(Deserialize, Debug)]
    struct Thing {
        id: String,
    }

    #[test]
    fn test_base_url() {
        let client = OktaClient::new(Session::new(
            "dev-1.okta.com",
            AuthMode::Bearer,
            "t".to_string(),
        ));
        assert_eq!(client.base_url(), "https://dev-1.okta.com/api/v1");
        assert_eq!(client.org_url(), "https://dev-1.okta.com");
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = OktaClient::test_client("http://localhost:1234");
        assert_eq!(client.url("/users"), "http://localhost:1234/api/v1/users");
        assert_eq!(client.url("users"), "http://localhost:1234/api/v1/users");
    }

    #[tokio::test]
    async fn test_sends_ssws_header_for_static_token() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/things/t1"))
            .and(header("authorization", "SSWS test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": "t1"})))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let thing: Option<Thing> = client
            .fetch_resource_by_path("/things/t1", "thing 't1'")
            .await
            .unwrap();
        assert_eq!(thing.unwrap().id, "t1");
    }

    #[tokio::test]
    async fn test_fetch_resource_not_found_is_none() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/things/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let thing: Option<Thing> = client
            .fetch_resource_by_path("/things/missing", "thing")
            .await
            .unwrap();
        assert!(thing.is_none());
    }

    #[tokio::test]
    async fn test_fetch_resource_server_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/things/t1"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let result: Result<Option<Thing>> =
            client.fetch_resource_by_path("/things/t1", "thing").await;
        match result.unwrap_err() {
            OktaError::Api { status, .. } => assert_eq!(status, 500),
            other => panic!("Expected OktaError::Api, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_malformed() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/things/t1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"name": 1})))
            .mount(&mock_server)
            .await;

        let client = OktaClient::test_client(&mock_server.uri());
        let result: Result<Option<Thing>> =
            client.fetch_resource_by_path("/things/t1", "thing").await;
        assert!(matches!(result, Err(OktaError::MalformedResponse(_))));
    }
}
