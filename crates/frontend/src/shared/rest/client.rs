use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use super::error::RestError;
use super::transport::{GlooTransport, HttpRequest, HttpResponse, Method, Transport};
use crate::shared::api_utils::EndpointConfig;

const DEFAULT_HEADERS: [(&str, &str); 2] = [
    ("Accept", "application/json"),
    ("Content-Type", "application/json"),
];

/// A 2xx response that made it through [`classify`]
#[derive(Debug, Clone, PartialEq)]
pub struct RestResponse {
    pub status: u16,
    pub body: String,
}

impl RestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, RestError> {
        serde_json::from_str(&self.body).map_err(|e| RestError::Decode(e.to_string()))
    }
}

/// One configured client shared by every view
///
/// Base URL and headers are fixed at construction; clones share the same
/// transport.
#[derive(Clone)]
pub struct RestClient {
    endpoint: EndpointConfig,
    transport: Arc<dyn Transport>,
}

impl RestClient {
    pub fn new(endpoint: EndpointConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            endpoint,
            transport,
        }
    }

    /// Client for the browser, talking through `fetch`
    pub fn browser(endpoint: EndpointConfig) -> Self {
        Self::new(endpoint, Arc::new(GlooTransport))
    }

    pub fn base_url(&self) -> &str {
        &self.endpoint.base_url
    }

    pub async fn get(&self, path: &str) -> Result<RestResponse, RestError> {
        self.execute(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<RestResponse, RestError> {
        let body = serde_json::to_string(body).map_err(|e| RestError::Encode(e.to_string()))?;
        self.execute(Method::Post, path, Some(body)).await
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<RestResponse, RestError> {
        let request = HttpRequest {
            method,
            url: self.endpoint.url(path),
            headers: DEFAULT_HEADERS.to_vec(),
            body,
        };
        log::debug!("{} {}", method.as_str(), request.url);
        classify(self.transport.send(request).await)
    }
}

/// Response interceptor: sorts every outcome before the caller sees it
///
/// Never swallows a failure. A 401 becomes [`RestError::AuthExpired`] so the
/// shell can redirect; any other non-2xx status is logged once.
pub fn classify(outcome: Result<HttpResponse, String>) -> Result<RestResponse, RestError> {
    match outcome {
        Ok(HttpResponse { status, body }) if (200..300).contains(&status) => {
            Ok(RestResponse { status, body })
        }
        Ok(HttpResponse { status: 401, .. }) => Err(RestError::AuthExpired),
        Ok(HttpResponse { status, body }) => {
            log::error!("Error response Code:{}", status);
            Err(RestError::Failure { status, body })
        }
        Err(e) => {
            log::error!("No response received: {}", e);
            Err(RestError::Transport(e))
        }
    }
}
