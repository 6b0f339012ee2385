/*
[INPUT]:  Test configuration and fixture requirements
[OUTPUT]: Shared chains, identities, mock signers, and a settable clock
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for ual-telos-keycat tests

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use ual_telos_keycat::{
    BlockchainConfig,
    ChainDescriptor,
    Clock,
    MockSigner,
    RpcEndpoint,
    SigninData,
    TELOS_MAINNET_CHAIN_ID,
};

/// Clock whose reading tests can advance
#[allow(dead_code)]
#[derive(Debug)]
pub struct FixedClock {
    now: AtomicI64,
}

#[allow(dead_code)]
impl FixedClock {
    pub fn at(now: i64) -> Arc<Self> {
        Arc::new(Self {
            now: AtomicI64::new(now),
        })
    }

    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }
}

impl Clock for FixedClock {
    fn now_epoch_seconds(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

/// The mainnet chain descriptor used across scenarios
#[allow(dead_code)]
pub fn telos_chain() -> ChainDescriptor {
    ChainDescriptor {
        chain_id: TELOS_MAINNET_CHAIN_ID.to_string(),
        origin: "https://dapp.example".to_string(),
        rpc_endpoints: vec![RpcEndpoint::new("https", "rpc.telos.net", 443)],
    }
}

/// A chain id the registry does not recognize
#[allow(dead_code)]
pub fn unknown_chain() -> ChainDescriptor {
    ChainDescriptor {
        chain_id: "deadbeef".repeat(8),
        origin: "https://dapp.example".to_string(),
        rpc_endpoints: vec![RpcEndpoint::new("https", "rpc.telos.net", 443)],
    }
}

#[allow(dead_code)]
pub fn telos_blockchain() -> BlockchainConfig {
    BlockchainConfig {
        name: "telos".to_string(),
        nodes: vec!["https://rpc.telos.net:443".to_string()],
        origin: "https://dapp.example".to_string(),
    }
}

#[allow(dead_code)]
pub fn alice() -> SigninData {
    SigninData {
        account_name: "alice".to_string(),
        permission: "active".to_string(),
        public_key: "PUB_K1_xyz".to_string(),
    }
}

/// A mock signer that signs in as alice
#[allow(dead_code)]
pub fn mock_signer() -> Arc<MockSigner> {
    Arc::new(MockSigner::new(telos_blockchain(), alice()))
}
