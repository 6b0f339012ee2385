/*
[INPUT]:  Host chain descriptors and a signer construction strategy
[OUTPUT]: Per-chain signer client map for recognized chains
[POS]:    Signer layer - client construction and chain filtering
[UPDATE]: When client construction inputs or filtering policy change
*/

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::chain::{ChainDescriptor, network_name, resolve_endpoints};

use super::client::{BlockchainConfig, MockSigner, Signer};

/// Construction strategy for signer clients
///
/// The concrete signer (a browser extension or popup window) lives outside
/// this crate; the host injects whatever implementation talks to it.
pub trait SignerFactory: Send + Sync {
    fn create(&self, config: BlockchainConfig) -> Arc<dyn Signer>;
}

impl<F> SignerFactory for F
where
    F: Fn(BlockchainConfig) -> Arc<dyn Signer> + Send + Sync,
{
    fn create(&self, config: BlockchainConfig) -> Arc<dyn Signer> {
        self(config)
    }
}

/// Build one signer client per chain the registry recognizes
///
/// Unrecognized chains are filtered, not errored; an adapter built from an
/// entirely unrecognized list still constructs and reports the problem at
/// `init()`.
pub fn build_signer_map(
    chains: &[ChainDescriptor],
    factory: &dyn SignerFactory,
) -> HashMap<String, Arc<dyn Signer>> {
    let mut map = HashMap::new();

    for chain in chains {
        let Some(name) = network_name(&chain.chain_id) else {
            debug!(chain_id = %chain.chain_id, "chain not in registry, skipping");
            continue;
        };

        let nodes = resolve_endpoints(&chain.rpc_endpoints);
        debug!(
            chain_id = %chain.chain_id,
            network = name,
            nodes = nodes.len(),
            "building signer client"
        );

        let config = BlockchainConfig {
            name: name.to_string(),
            nodes,
            origin: chain.origin.clone(),
        };
        map.insert(chain.chain_id.clone(), factory.create(config));
    }

    map
}

/// Factory handing out one shared mock signer, for tests
///
/// Records every configuration it was asked to build so tests can assert
/// what the factory saw.
#[derive(Debug)]
pub struct MockSignerFactory {
    signer: Arc<MockSigner>,
    created: RwLock<Vec<BlockchainConfig>>,
}

impl MockSignerFactory {
    pub fn new(signer: Arc<MockSigner>) -> Self {
        Self {
            signer,
            created: RwLock::new(Vec::new()),
        }
    }

    /// Configurations passed to `create`, in order
    pub fn created(&self) -> Vec<BlockchainConfig> {
        self.created.read().unwrap().clone()
    }
}

impl SignerFactory for MockSignerFactory {
    fn create(&self, config: BlockchainConfig) -> Arc<dyn Signer> {
        self.created.write().unwrap().push(config);
        let signer: Arc<dyn Signer> = self.signer.clone();
        signer
    }
}
