//! Client for the gimme-an-uuid HTTP service.
//!
//! The service exposes one plain-text endpoint per UUID version under a fixed
//! root (`/api/uuid`). [`UuidClient`] derives the endpoint URL for each call,
//! sends a `GET` with `Accept: text/plain` through a caller-supplied
//! [`HttpTransport`] and hands back the body.
//!
//! # Example
//!
//! ```no_run
//! use gimmeanuuid::client::{DceDomain, UuidClient};
//! use std::sync::Arc;
//!
//! # async fn run() -> Result<(), gimmeanuuid::client::ClientError> {
//! let http = Arc::new(reqwest::Client::new());
//! let client = UuidClient::builder()
//!     .transport(http)
//!     .base_url("http://localhost:8080")
//!     .build()?;
//!
//! let random = client.generate_v4().await?;
//! let person = client.generate_v2(DceDomain::Person).await?;
//! let named = client.generate_v5("dns", "example.com").await?;
//! # let _ = (random, person, named);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod path;
pub mod transport;

pub use error::ClientError;
pub use path::API_ROOT;
pub use transport::{
    BodyError, BodyStream, HttpTransport, TransportRequest, TransportResponse,
};

use async_trait::async_trait;
use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::Url;
use std::fmt;
use std::sync::Arc;

/// DCE security domains understood by version 2 generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DceDomain {
    Person,
    Group,
    Org,
}

impl From<DceDomain> for u32 {
    fn from(domain: DceDomain) -> Self {
        match domain {
            DceDomain::Person => 0,
            DceDomain::Group => 1,
            DceDomain::Org => 2,
        }
    }
}

/// Source of UUIDs, one method per version.
///
/// Object-safe so consumers can hold `&dyn UuidGenerator` and substitute a
/// fake in tests.
#[async_trait]
pub trait UuidGenerator: Send + Sync {
    /// Time and node based UUID.
    async fn generate_v1(&self) -> Result<String, ClientError>;

    /// DCE security UUID for the given domain.
    async fn generate_v2(&self, domain: u32) -> Result<String, ClientError>;

    /// Name based UUID (MD5).
    async fn generate_v3(&self, namespace: &str, name: &str) -> Result<String, ClientError>;

    /// Random UUID.
    async fn generate_v4(&self) -> Result<String, ClientError>;

    /// Name based UUID (SHA-1).
    async fn generate_v5(&self, namespace: &str, name: &str) -> Result<String, ClientError>;
}

/// Client bound to one service base URL and one shared transport.
///
/// Cloning is cheap and clones share the transport. The base URL never
/// changes after [`UuidClientBuilder::build`]; each call works on its own
/// copy, so a client can be used from many tasks at once.
#[derive(Clone)]
pub struct UuidClient {
    base_url: Url,
    transport: Arc<dyn HttpTransport>,
}

impl UuidClient {
    pub fn builder() -> UuidClientBuilder {
        UuidClientBuilder::default()
    }

    /// Normalized base URL; its path always ends in [`API_ROOT`].
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL a call with the given version segments would hit.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        path::derive_url(&self.base_url, segments)
    }

    pub async fn generate_v1(&self) -> Result<String, ClientError> {
        self.text_plain(&["v1"]).await
    }

    /// Accepts a raw domain code or a [`DceDomain`]; the code is sent in
    /// decimal (`v2/7` for 7).
    pub async fn generate_v2(&self, domain: impl Into<u32>) -> Result<String, ClientError> {
        let domain = domain.into().to_string();
        self.text_plain(&["v2", domain.as_str()]).await
    }

    /// Namespace and name are inserted as path segments without escaping.
    /// Slashes split them into further segments and `..` climbs out of the
    /// version segment, so untrusted input has to be escaped by the caller.
    pub async fn generate_v3(&self, namespace: &str, name: &str) -> Result<String, ClientError> {
        self.text_plain(&["v3", namespace, name]).await
    }

    pub async fn generate_v4(&self) -> Result<String, ClientError> {
        self.text_plain(&["v4"]).await
    }

    /// Same path rules as [`UuidClient::generate_v3`].
    pub async fn generate_v5(&self, namespace: &str, name: &str) -> Result<String, ClientError> {
        self.text_plain(&["v5", namespace, name]).await
    }

    /// Shared request path for every version: one GET, whole body, no retry.
    async fn text_plain(&self, segments: &[&str]) -> Result<String, ClientError> {
        let url = self.endpoint(segments);
        tracing::debug!(path = url.path(), "requesting uuid");

        let request =
            TransportRequest::get(url).header(ACCEPT, HeaderValue::from_static("text/plain"));
        let response = self.transport.send(request).await?;
        let status = response.status;

        let body = response.text().await?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if body.is_empty() {
            return Err(ClientError::EmptyResponse {
                status: status.as_u16(),
            });
        }

        Ok(body)
    }
}

impl fmt::Debug for UuidClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UuidClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl UuidGenerator for UuidClient {
    async fn generate_v1(&self) -> Result<String, ClientError> {
        UuidClient::generate_v1(self).await
    }

    async fn generate_v2(&self, domain: u32) -> Result<String, ClientError> {
        UuidClient::generate_v2(self, domain).await
    }

    async fn generate_v3(&self, namespace: &str, name: &str) -> Result<String, ClientError> {
        UuidClient::generate_v3(self, namespace, name).await
    }

    async fn generate_v4(&self) -> Result<String, ClientError> {
        UuidClient::generate_v4(self).await
    }

    async fn generate_v5(&self, namespace: &str, name: &str) -> Result<String, ClientError> {
        UuidClient::generate_v5(self, namespace, name).await
    }
}

/// Builder for [`UuidClient`].
#[derive(Default)]
pub struct UuidClientBuilder {
    base_url: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl UuidClientBuilder {
    /// Service location, with or without the `/api/uuid` root.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Transport shared with the caller (e.g. `Arc<reqwest::Client>`).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// # Errors
    ///
    /// `ClientError::Configuration` if the transport or base URL is missing,
    /// or the base URL does not parse or cannot carry a path.
    pub fn build(self) -> Result<UuidClient, ClientError> {
        let transport = self.transport.ok_or_else(|| {
            ClientError::Configuration("an HTTP transport has to be provided".to_string())
        })?;

        let raw = self.base_url.ok_or_else(|| {
            ClientError::Configuration("a base URL has to be provided".to_string())
        })?;
        let parsed = Url::parse(&raw).map_err(|e| {
            ClientError::Configuration(format!("invalid base URL '{}': {}", raw, e))
        })?;

        Ok(UuidClient {
            base_url: path::normalize_base_url(parsed)?,
            transport,
        })
    }
}
