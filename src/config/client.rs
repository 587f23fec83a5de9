//! Service client configuration

use serde::{Deserialize, Serialize};

/// Where the UUID service lives and how the HTTP transport is set up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Service location; the `/api/uuid` root is added if missing
    pub base_url: String,
    /// Whole-request timeout applied to the HTTP transport
    pub timeout_seconds: u64,
    /// User-Agent header sent by the transport
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_seconds: 10,
            user_agent: concat!("gimmeanuuid/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}
