/*
[INPUT]:  Structured (protocol, host, port) endpoint descriptors
[OUTPUT]: Ordered endpoint URL strings for signer configuration
[POS]:    Chain layer - host-supplied chain descriptors
[UPDATE]: When the host descriptor schema changes
*/

use serde::{Deserialize, Serialize};

/// One RPC endpoint of a declared chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpcEndpoint {
    pub protocol: String,
    pub host: String,
    pub port: u16,
}

impl RpcEndpoint {
    pub fn new(protocol: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            protocol: protocol.into(),
            host: host.into(),
            port,
        }
    }

    /// Render as `"{protocol}://{host}:{port}"`
    ///
    /// Values are not validated; malformed input propagates as a malformed
    /// URL to whoever dials it.
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.protocol, self.host, self.port)
    }
}

/// A blockchain the host declares support for
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDescriptor {
    #[serde(rename = "chainId")]
    pub chain_id: String,
    pub origin: String,
    #[serde(rename = "rpcEndpoints")]
    pub rpc_endpoints: Vec<RpcEndpoint>,
}

/// Resolve endpoint descriptors to URL strings, order-preserving
pub fn resolve_endpoints(endpoints: &[RpcEndpoint]) -> Vec<String> {
    endpoints.iter().map(RpcEndpoint::url).collect()
}
