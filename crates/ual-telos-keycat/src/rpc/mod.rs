/*
[INPUT]:  A chain node endpoint URL and HTTP configuration
[OUTPUT]: Typed chain-info responses from the node
[POS]:    RPC layer - minimal chain node client handed to users
[UPDATE]: When node endpoints or response shapes change
*/

use std::time::Duration;

use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GET_INFO_PATH: &str = "/v1/chain/get_info";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Errors from the chain node client
#[derive(Error, Debug)]
pub enum RpcError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Node answered with an unexpected status or body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Subset of the node's `get_info` response the adapter cares about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainInfo {
    pub server_version: String,
    pub chain_id: String,
    pub head_block_num: u64,
    pub last_irreversible_block_num: u64,
    pub head_block_id: String,
    pub head_block_time: String,
    pub head_block_producer: String,
}

/// Client bound to one chain node endpoint
///
/// Users receive a shared handle for follow-up chain queries; the adapter
/// itself never broadcasts through it.
#[derive(Debug, Clone)]
pub struct NodeRpc {
    http: Client,
    endpoint: Url,
}

impl NodeRpc {
    /// Create a client with default timeouts
    pub fn new(endpoint: &str) -> Result<Self, RpcError> {
        Self::with_config(endpoint, ClientConfig::default())
    }

    /// Create a client with explicit timeouts
    pub fn with_config(endpoint: &str, config: ClientConfig) -> Result<Self, RpcError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: Url::parse(endpoint)?,
        })
    }

    /// The endpoint this client is bound to
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch chain metadata from the node
    pub async fn get_info(&self) -> Result<ChainInfo, RpcError> {
        let url = self.endpoint.join(GET_INFO_PATH)?;
        let response = self.http.post(url).send().await?;

        if !response.status().is_success() {
            return Err(RpcError::InvalidResponse(format!(
                "node returned status {}",
                response.status()
            )));
        }

        Ok(response.json().await?)
    }
}
