//! Generate command implementation (`v1` .. `v5`)

use crate::cli::ConnectionArgs;
use crate::client::{ClientError, UuidClient, UuidGenerator};
use crate::config::{ClientConfig, ConfigError, GimmeConfig};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

/// One UUID request as selected on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UuidRequest {
    V1,
    V2 { domain: u32 },
    V3 { namespace: String, name: String },
    V4,
    V5 { namespace: String, name: String },
}

impl UuidRequest {
    pub fn version(&self) -> u8 {
        match self {
            UuidRequest::V1 => 1,
            UuidRequest::V2 { .. } => 2,
            UuidRequest::V3 { .. } => 3,
            UuidRequest::V4 => 4,
            UuidRequest::V5 { .. } => 5,
        }
    }

    /// Dispatch to the matching generator method.
    pub async fn fetch(&self, generator: &dyn UuidGenerator) -> Result<String, ClientError> {
        match self {
            UuidRequest::V1 => generator.generate_v1().await,
            UuidRequest::V2 { domain } => generator.generate_v2(*domain).await,
            UuidRequest::V3 { namespace, name } => generator.generate_v3(namespace, name).await,
            UuidRequest::V4 => generator.generate_v4().await,
            UuidRequest::V5 { namespace, name } => generator.generate_v5(namespace, name).await,
        }
    }
}

/// Load configuration with CLI overrides
///
/// The config file is optional: a missing file means defaults.
pub fn load_config(args: &ConnectionArgs) -> Result<GimmeConfig, ConfigError> {
    let mut config = if args.config.exists() {
        GimmeConfig::load(Some(&args.config))?
    } else {
        GimmeConfig::default()
    };

    config = config.with_env_overrides();

    if let Some(ref base_url) = args.base_url {
        config.client.base_url = base_url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.client.timeout_seconds = timeout;
    }
    if let Some(ref log_level) = args.log_level {
        config.logging.level = log_level.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Build a client backed by a freshly configured `reqwest::Client`.
pub fn build_client(config: &ClientConfig) -> Result<UuidClient, Box<dyn std::error::Error>> {
    let http = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.as_str())
        .build()?;

    let client = UuidClient::builder()
        .transport(Arc::new(http))
        .base_url(config.base_url.as_str())
        .build()?;

    Ok(client)
}

/// Render a fetched identifier for stdout.
///
/// Trailing whitespace (usually the service's newline) is dropped.
pub fn format_output(request: &UuidRequest, uuid: &str, as_json: bool) -> String {
    let uuid = uuid.trim_end();
    if as_json {
        json!({ "version": request.version(), "uuid": uuid }).to_string()
    } else {
        uuid.to_string()
    }
}

/// Handle `gimmeanuuid v1` .. `gimmeanuuid v5`
pub async fn run_generate(
    request: UuidRequest,
    args: &ConnectionArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(args)?;
    crate::logging::init_tracing(&config.logging)?;

    let client = build_client(&config.client)?;
    tracing::debug!(
        base_url = %client.base_url(),
        version = request.version(),
        "fetching uuid"
    );

    let uuid = request.fetch(&client).await?;
    println!("{}", format_output(&request, &uuid, args.json));

    Ok(())
}
