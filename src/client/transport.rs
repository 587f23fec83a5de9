//! HTTP transport abstraction.
//!
//! The client never owns a connection pool. Callers hand it something that
//! can execute a request (normally a shared `reqwest::Client`) and keep
//! control over TLS, pooling and timeouts.

use super::ClientError;
use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::{self, BoxStream, StreamExt};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, StatusCode, Url};
use std::fmt;

/// Error yielded by a body stream chunk.
pub type BodyError = Box<dyn std::error::Error + Send + Sync>;

/// Response body as a stream of chunks.
pub type BodyStream = BoxStream<'static, Result<Bytes, BodyError>>;

/// Fully-formed request handed to a transport.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl TransportRequest {
    /// GET request with no headers.
    pub fn get(url: Url) -> Self {
        Self {
            method: Method::GET,
            url,
            headers: HeaderMap::new(),
        }
    }

    /// Set a header, replacing any previous value.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Response returned by a transport: status plus an unread body.
pub struct TransportResponse {
    pub status: StatusCode,
    pub body: BodyStream,
}

impl TransportResponse {
    pub fn new(status: StatusCode, body: BodyStream) -> Self {
        Self { status, body }
    }

    /// Response whose body is a single in-memory chunk.
    pub fn from_bytes(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self::new(status, stream::once(async move { Ok::<_, BodyError>(body) }).boxed())
    }

    /// Read the whole body.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD; nothing else about
    /// the content is checked or altered.
    pub async fn text(mut self) -> Result<String, ClientError> {
        let mut buf = Vec::new();
        while let Some(chunk) = self.body.next().await {
            let chunk = chunk.map_err(|e| ClientError::BodyRead(e.to_string()))?;
            buf.extend_from_slice(&chunk);
        }

        Ok(match String::from_utf8(buf) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Something that can execute an HTTP request.
///
/// Implementations must be safe for concurrent use; the client shares one
/// instance across every call and every clone.
///
/// # Errors
///
/// - `ClientError::Request` if the request cannot be built
/// - `ClientError::Transport` if the exchange fails at the network level
///
/// Non-2xx statuses are not errors at this layer.
#[async_trait]
pub trait HttpTransport: Send + Sync + 'static {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError>;
}

#[async_trait]
impl HttpTransport for Client {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError> {
        let built = self
            .request(request.method, request.url)
            .headers(request.headers)
            .build()
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let response = self.execute(built).await.map_err(|e| {
            if e.is_timeout() {
                ClientError::Transport(format!("request timed out: {}", e))
            } else {
                ClientError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(|e| Box::new(e) as BodyError))
            .boxed();

        Ok(TransportResponse::new(status, body))
    }
}
