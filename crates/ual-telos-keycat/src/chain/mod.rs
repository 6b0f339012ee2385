/*
[INPUT]:  Host-declared chain descriptors
[OUTPUT]: Registry lookups and resolved endpoint URLs
[POS]:    Chain layer - mapping host chains to signer networks
[UPDATE]: When supported networks or descriptor shape change
*/

pub mod descriptor;
pub mod registry;

pub use descriptor::{ChainDescriptor, RpcEndpoint, resolve_endpoints};
pub use registry::{TELOS_MAINNET_CHAIN_ID, TELOS_TESTNET_CHAIN_ID, network_name};
