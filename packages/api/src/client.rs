//! # HTTP client wrapper
//!
//! [`ApiClient`] is the one configured request sender of the app. For every
//! call it:
//!
//! 1. joins the path onto the configured base URL;
//! 2. reads the [`SessionStore`] and, when a token is stored, attaches
//!    `Authorization: Bearer <token>`;
//! 3. serializes the body as JSON and sends it through the [`Transport`];
//! 4. maps a non-2xx answer to [`RequestError::Http`] and decodes a 2xx body.
//!
//! There is no retry and no timeout layer. The resource services
//! ([`Projects`](crate::Projects), [`Experiences`](crate::Experiences),
//! [`PersonalInfoService`](crate::PersonalInfoService), [`Auth`](crate::Auth))
//! are borrowed views over a client, obtained from the accessor methods.

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::SessionStore;

use crate::config::ClientConfig;
use crate::error::RequestError;
use crate::transport::{ApiRequest, Method, Transport};

/// Configured REST client.
///
/// Cloning is cheap when the transport and store are (both shipped ones are
/// handle types), and clones share the same session storage.
#[derive(Clone, Debug)]
pub struct ApiClient<T, S> {
    config: ClientConfig,
    transport: T,
    store: S,
}

impl<T: Transport, S: SessionStore> ApiClient<T, S> {
    pub fn new(config: ClientConfig, transport: T, store: S) -> Self {
        Self {
            config,
            transport,
            store,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The session storage consulted on every request.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Build a request for `path`, attaching the stored token if any.
    pub fn build_request(&self, method: Method, path: &str, body: Option<String>) -> ApiRequest {
        ApiRequest {
            method,
            path: path.to_string(),
            url: self.config.url(path),
            authorization: self.store.load().map(|session| session.bearer()),
            body,
        }
    }

    /// Send a request and decode its JSON response.
    ///
    /// An empty 2xx body decodes as JSON `null`, so `()` and `Option<_>`
    /// targets accept it.
    pub async fn request<R: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> Result<R, RequestError> {
        let request = self.build_request(method, path, body);
        tracing::debug!("{} {}", request.method, request.url);

        let response = self.transport.send(request).await?;
        if !response.is_success() {
            return Err(RequestError::from_response(response.status, &response.body));
        }

        let text = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        serde_json::from_str(text).map_err(|e| RequestError::Decode(e.to_string()))
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> Result<R, RequestError> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, RequestError> {
        self.request(Method::Post, path, Some(encode(body)?)).await
    }

    pub async fn put<B: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<R, RequestError> {
        self.request(Method::Put, path, Some(encode(body)?)).await
    }

    /// DELETE; whatever body the server sends back is discarded.
    pub async fn delete(&self, path: &str) -> Result<(), RequestError> {
        self.request::<serde::de::IgnoredAny>(Method::Delete, path, None)
            .await
            .map(|_| ())
    }
}

fn encode<B: Serialize + ?Sized>(body: &B) -> Result<String, RequestError> {
    serde_json::to_string(body).map_err(|e| RequestError::Encode(e.to_string()))
}
