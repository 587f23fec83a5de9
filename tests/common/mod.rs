//! Shared test utilities for gimmeanuuid integration tests.
//!
//! Provides a scripted in-process transport and helpers that run every
//! client operation, so behavior can be asserted across all versions.

#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::stream::{self, StreamExt};
use gimmeanuuid::client::{
    BodyError, ClientError, HttpTransport, TransportRequest, TransportResponse, UuidClient,
};
use reqwest::StatusCode;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// =============================================================================
// Well-Known Test Constants
// =============================================================================

/// RFC 4122 example of a version 1 UUID.
pub const SAMPLE_UUID: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

/// Base URL handed to clients backed by the scripted transport.
pub const FAKE_BASE_URL: &str = "http://uuid.test";

// =============================================================================
// Scripted Transport
// =============================================================================

/// What the scripted transport answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    /// Fixed status and body.
    Body {
        status: StatusCode,
        body: &'static str,
    },
    /// 200 with the request path as body.
    EchoPath,
    /// Request rejected before it is sent.
    Unbuildable,
    /// Network failure before any response.
    Refused,
    /// 200 whose body stream fails after the first chunk.
    BrokenBody,
}

/// Transport that answers from a script and records every request.
pub struct ScriptedTransport {
    reply: Reply,
    calls: AtomicUsize,
    requests: Mutex<Vec<TransportRequest>>,
}

impl ScriptedTransport {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.path().to_string())
            .collect()
    }
}

#[async_trait]
impl HttpTransport for ScriptedTransport {
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, ClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let path = request.url.path().to_string();
        self.requests.lock().unwrap().push(request);

        match &self.reply {
            Reply::Body { status, body } => Ok(TransportResponse::from_bytes(*status, *body)),
            Reply::EchoPath => Ok(TransportResponse::from_bytes(StatusCode::OK, path)),
            Reply::Unbuildable => Err(ClientError::Request(
                "builder error for url".to_string(),
            )),
            Reply::Refused => Err(ClientError::Transport(
                "error trying to connect: Connection refused".to_string(),
            )),
            Reply::BrokenBody => {
                let chunks = vec![
                    Ok::<_, BodyError>(Bytes::from_static(b"6ba7b810")),
                    Err("unexpected end of body".into()),
                ];
                Ok(TransportResponse::new(
                    StatusCode::OK,
                    stream::iter(chunks).boxed(),
                ))
            }
        }
    }
}

// =============================================================================
// Client Builders
// =============================================================================

/// Client backed by the given scripted transport.
pub fn scripted_client(transport: Arc<ScriptedTransport>) -> UuidClient {
    UuidClient::builder()
        .transport(transport)
        .base_url(FAKE_BASE_URL)
        .build()
        .unwrap()
}

/// Client backed by a real `reqwest::Client` pointed at `base_url`.
pub fn http_client(base_url: &str) -> UuidClient {
    UuidClient::builder()
        .transport(Arc::new(reqwest::Client::new()))
        .base_url(base_url)
        .build()
        .unwrap()
}

/// Run each of the five operations once, in version order.
pub async fn run_all_operations(client: &UuidClient) -> Vec<Result<String, ClientError>> {
    vec![
        client.generate_v1().await,
        client.generate_v2(1u32).await,
        client.generate_v3("dns", "example.com").await,
        client.generate_v4().await,
        client.generate_v5("dns", "example.com").await,
    ]
}
