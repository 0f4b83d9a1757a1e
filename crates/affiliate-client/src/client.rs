//! API client: base URL, auth header injection, JSON in and out.

use std::sync::Arc;

use affiliate_catalog::RepositoryError;
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, HeaderValue, Method};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::ClientConfig;
use crate::session::SessionContext;
use crate::transport::{ApiRequest, ApiResponse, ReqwestTransport, Transport, TransportError};

/// Error payload shape. Only the `error` field is ever read.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Extract the server's message from an error body, if it has one.
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.error)
}

/// Client for the catalog backend.
///
/// Attaches `Authorization: Bearer <token>` to every request while the
/// session holds a token. Does not retry.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    session: SessionContext,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("config", &self.config)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Create a client over the network transport.
    pub fn new(config: ClientConfig, session: SessionContext) -> Result<Self, TransportError> {
        let transport = ReqwestTransport::new()?;
        Ok(Self::with_transport(config, session, Arc::new(transport)))
    }

    /// Create a client over a custom transport.
    pub fn with_transport(
        config: ClientConfig,
        session: SessionContext,
        transport: Arc<dyn Transport>,
    ) -> Self {
        Self {
            config,
            session,
            transport,
        }
    }

    /// GET a JSON resource.
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, RepositoryError> {
        let response = self.execute(Method::GET, path, None).await?;
        decode(&response)
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, RepositoryError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        let response = self.execute(Method::POST, path, Some(body)).await?;
        decode(&response)
    }

    /// PUT a JSON body and decode the JSON response.
    pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, RepositoryError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_vec(body)?;
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        decode(&response)
    }

    /// DELETE a resource. Any response body is ignored.
    pub async fn delete(&self, path: &str) -> Result<(), RepositoryError> {
        self.execute(Method::DELETE, path, None).await.map(|_| ())
    }

    /// Send one request and turn non-2xx statuses into rejections.
    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiResponse, RepositoryError> {
        let request = self.build_request(method, path, body)?;
        let method = request.method.clone();

        tracing::debug!(%method, path, authenticated = request.headers.contains_key(AUTHORIZATION), "sending request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(%method, path, error = %e, "transport failure");
            RepositoryError::Transport(e.to_string())
        })?;

        if !response.status.is_success() {
            let message = error_message(&response.body);
            tracing::warn!(%method, path, status = response.status.as_u16(), ?message, "request rejected");
            return Err(RepositoryError::rejected(response.status.as_u16(), message));
        }

        tracing::debug!(%method, path, status = response.status.as_u16(), "request completed");
        Ok(response)
    }

    fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<ApiRequest, RepositoryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if body.is_some() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        if let Some(auth) = self.session.authorization() {
            let mut value = HeaderValue::from_str(&auth)
                .map_err(|_| RepositoryError::Transport("session token is not a valid header value".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(ApiRequest {
            method,
            url: self.config.url(path),
            headers,
            body,
        })
    }
}

fn decode<T: DeserializeOwned>(response: &ApiResponse) -> Result<T, RepositoryError> {
    serde_json::from_slice(&response.body).map_err(|e| RepositoryError::Decode(e.to_string()))
}
