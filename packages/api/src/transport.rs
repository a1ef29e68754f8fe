//! # Transport seam
//!
//! [`ApiClient`](crate::ApiClient) never talks to the network directly. It
//! builds an [`ApiRequest`] and hands it to a [`Transport`]:
//!
//! | Implementation | Used by |
//! |----------------|---------|
//! | [`HttpTransport`] | the running app (reqwest, `fetch` on wasm) |
//! | [`MemoryBackend`](crate::MemoryBackend) | tests |
//!
//! A transport only reports whether a response came back. Mapping statuses to
//! errors and decoding bodies is the client's job.

use crate::error::RequestError;

/// HTTP methods used by the backend contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A fully built request.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path relative to the base URL, e.g. `/public/projects`.
    pub path: String,
    /// Absolute URL.
    pub url: String,
    /// `Authorization` header value, when a session token is stored.
    pub authorization: Option<String>,
    /// JSON body.
    pub body: Option<String>,
}

/// Raw response: status code and body text.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends requests and returns whatever the server answered.
///
/// Only failures to get an answer at all are errors here
/// ([`RequestError::Network`]).
pub trait Transport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl std::future::Future<Output = Result<ApiResponse, RequestError>>;
}

/// reqwest-backed transport. Uses the browser `fetch` API on wasm.
#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, RequestError> {
        let mut builder = self.client.request(request.method.into(), &request.url);
        if let Some(authorization) = &request.authorization {
            builder = builder.header(reqwest::header::AUTHORIZATION, authorization);
        }
        if let Some(body) = request.body {
            builder = builder
                .header(reqwest::header::CONTENT_TYPE, "application/json")
                .body(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(e.to_string()))?;

        Ok(ApiResponse { status, body })
    }
}
