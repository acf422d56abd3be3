//! Resource client for the Sparkle API
//!
//! Every resource is a tenant-scoped collection reachable at
//! `{base}/tenant/{tenantId}/{resource}/`. A fetch is a single GET with no
//! retry and no caching.

use super::error::{ApiError, Result};
use super::types::{ApiErrorResponse, Collection, ResourceKind};
use crate::config::types::ApiConfig;
use log::{debug, trace};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;

/// User agent for API requests
const USER_AGENT: &str = concat!("rainbow/", env!("CARGO_PKG_VERSION"));

/// Client for tenant-scoped collections on the Sparkle API
#[derive(Debug, Clone)]
pub struct ResourceClient {
    /// HTTP client with configured timeout and headers
    http_client: Client,
    /// Base API URL without a trailing slash
    api_url: String,
}

impl ResourceClient {
    /// Create a client from the `[api]` configuration section
    pub fn from_config(config: &ApiConfig) -> Result<Self> {
        Self::build(config.base_url(), config.timeout())
    }

    /// Create a client with a custom API URL and no request timeout
    pub fn with_url(api_url: impl Into<String>) -> Result<Self> {
        Self::build(api_url.into(), None)
    }

    fn build(api_url: String, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(ApiError::HttpError)?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Get the configured API URL
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Endpoint URL for a resource collection of a tenant
    ///
    /// The tenant identifier is percent-encoded so it always stays a single
    /// path segment.
    pub fn endpoint(&self, kind: ResourceKind, tenant_id: &str) -> String {
        format!(
            "{}/tenant/{}/{}/",
            self.api_url,
            urlencoding::encode(tenant_id),
            kind.as_str()
        )
    }

    /// Fetch the collection object of a tenant
    ///
    /// Endpoint: GET /tenant/:tenantId/:resource/
    pub async fn fetch(&self, kind: ResourceKind, tenant_id: &str) -> Result<Collection> {
        let value: Value = self.get(kind, tenant_id).await?;
        match value {
            Value::Object(collection) => Ok(collection),
            other => Err(ApiError::ParseError(format!(
                "expected a JSON object for {} collection, got {}",
                kind,
                json_kind(&other)
            ))),
        }
    }

    /// Fetch a resource collection and deserialize it into a caller-chosen type
    pub async fn get<T: DeserializeOwned>(&self, kind: ResourceKind, tenant_id: &str) -> Result<T> {
        let url = self.endpoint(kind, tenant_id);
        debug!("GET {}", url);

        let response = self.http_client.get(&url).send().await?;
        self.handle_response(response).await
    }

    /// Handle the HTTP response, converting errors appropriately
    async fn handle_response<T: DeserializeOwned>(&self, response: reqwest::Response) -> Result<T> {
        let status = response.status();
        trace!("{} -> {}", response.url(), status);

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| ApiError::ParseError(e.to_string()))
        } else {
            let status_code = status.as_u16();
            let error_body = response.text().await.unwrap_or_default();
            let error_message = serde_json::from_str::<ApiErrorResponse>(&error_body)
                .map(|e| e.get_message())
                .unwrap_or_else(|_| error_body.clone());

            match status_code {
                404 => Err(ApiError::NotFound(error_message)),
                500..=599 => Err(ApiError::ServerError {
                    status: status_code,
                    message: error_message,
                }),
                _ => Err(ApiError::ApiError {
                    status: status_code,
                    message: error_message,
                }),
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_construction() {
        let client = ResourceClient::with_url("http://localhost:9860/").unwrap();
        assert_eq!(client.api_url(), "http://localhost:9860");
    }

    #[test]
    fn test_endpoint_building() {
        let client = ResourceClient::with_url("http://zkumavka.local:9860").unwrap();
        assert_eq!(
            client.endpoint(ResourceKind::Instance, "acme"),
            "http://zkumavka.local:9860/tenant/acme/instance/"
        );
        assert_eq!(
            client.endpoint(ResourceKind::Cluster, "acme"),
            "http://zkumavka.local:9860/tenant/acme/cluster/"
        );
    }

    #[test]
    fn test_endpoint_encodes_tenant() {
        let client = ResourceClient::with_url("http://localhost:9860").unwrap();
        assert_eq!(
            client.endpoint(ResourceKind::Instance, "a b/c"),
            "http://localhost:9860/tenant/a%20b%2Fc/instance/"
        );
    }

    #[test]
    fn test_from_config() {
        let config = ApiConfig {
            scheme: "https".to_string(),
            host: "sparkle.example".to_string(),
            port: 443,
            timeout_secs: Some(5),
        };
        let client = ResourceClient::from_config(&config).unwrap();
        assert_eq!(client.api_url(), "https://sparkle.example:443");
    }

    #[test]
    fn test_error_display() {
        let not_found = ApiError::NotFound("no such tenant".to_string());
        assert!(not_found.to_string().contains("Not found"));

        let server_error = ApiError::ServerError {
            status: 502,
            message: "bad gateway".to_string(),
        };
        assert!(server_error.to_string().contains("502"));

        let parse = ApiError::ParseError("expected a JSON object".to_string());
        assert!(parse.to_string().contains("parse"));
    }

    #[test]
    fn test_user_agent() {
        assert!(USER_AGENT.starts_with("rainbow/"));
    }
}
