// src/services/api_client.rs
// DOCUMENTATION: Trip-planning backend HTTP client
// PURPOSE: Attach credentials, send requests, map non-success statuses to errors

use crate::config::{AuthContext, Config};
use crate::errors::ClientError;
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// A request as handed to the transport
/// DOCUMENTATION: Path is relative to the backend base URL
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub bearer_token: String,
}

/// Raw response from the transport
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Wire-level seam between the clients and the network
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError>;
}

/// reqwest-backed transport
pub struct ReqwestTransport {
    /// HTTP client for making requests
    client: Client,
    /// Backend base URL, without trailing slash
    base_url: String,
}

impl ReqwestTransport {
    /// Create a transport for the given backend
    /// DOCUMENTATION: Every request is bounded by `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Config(format!("HTTP client setup failed: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ClientError> {
        let url = format!("{}{}", self.base_url, request.path);

        let mut builder = self
            .client
            .request(request.method.clone(), &url)
            .bearer_auth(&request.bearer_token);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            log::error!("{} {} failed: {}", request.method, url, e);
            ClientError::Transport(format!("Request failed: {}", e))
        })?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ClientError::Transport(format!("Body read failed: {}", e)))?;

        Ok(ApiResponse {
            status,
            body: body.to_vec(),
        })
    }
}

/// Authenticated client shared by every feature wrapper
/// DOCUMENTATION: Cheap to clone; clones share the transport
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    auth: AuthContext,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn HttpTransport>, auth: AuthContext) -> Self {
        Self { transport, auth }
    }

    /// Build a reqwest-backed client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.api_base_url.clone(), config.request_timeout())?;
        Ok(Self::new(Arc::new(transport), AuthContext::from_config(config)))
    }

    pub fn auth(&self) -> &AuthContext {
        &self.auth
    }

    /// GET a JSON document
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        operation: &'static str,
    ) -> Result<T, ClientError> {
        let request = self.request(Method::GET, path, query, None);
        let response = self.dispatch(request, operation).await?;
        parse_json(&response, operation)
    }

    /// Send a request with an optional JSON body and parse the JSON reply
    pub async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        operation: &'static str,
    ) -> Result<T, ClientError> {
        let body = body.map(serde_json::to_value).transpose()?;
        let request = self.request(method, path, &[], body);
        let response = self.dispatch(request, operation).await?;
        parse_json(&response, operation)
    }

    /// GET a binary document
    pub async fn get_bytes(&self, path: &str, operation: &'static str) -> Result<Vec<u8>, ClientError> {
        let request = self.request(Method::GET, path, &[], None);
        let response = self.dispatch(request, operation).await?;
        Ok(response.body)
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> ApiRequest {
        ApiRequest {
            method,
            path: path.to_string(),
            query: query
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            body,
            bearer_token: self.auth.token().to_string(),
        }
    }

    async fn dispatch(
        &self,
        request: ApiRequest,
        operation: &'static str,
    ) -> Result<ApiResponse, ClientError> {
        log::debug!("{} {}", request.method, request.path);

        let method = request.method.clone();
        let path = request.path.clone();
        let response = self.transport.execute(request).await?;

        if !response.is_success() {
            log::error!(
                "{} {} returned {}: {}",
                method,
                path,
                response.status,
                String::from_utf8_lossy(&response.body)
            );
            return Err(ClientError::RequestFailed {
                operation,
                status: response.status,
            });
        }

        Ok(response)
    }
}

fn parse_json<T: DeserializeOwned>(response: &ApiResponse, operation: &str) -> Result<T, ClientError> {
    serde_json::from_slice(&response.body).map_err(|e| {
        log::error!("{}: unreadable response body: {}", operation, e);
        ClientError::Parse(format!("{}: {}", operation, e))
    })
}
