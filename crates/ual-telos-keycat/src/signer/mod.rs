/*
[INPUT]:  Signer contract definitions and factory wiring
[OUTPUT]: Signer trait, client construction, per-chain client map
[POS]:    Signer layer - boundary to the external wallet signer
[UPDATE]: When the signer API surface or construction inputs change
*/

pub mod client;
pub mod factory;

pub use client::{
    BlockchainConfig,
    MockSigner,
    Signer,
    SignerError,
    SigninData,
    TransactCall,
    TransactOptions,
    TransactResult,
};
pub use factory::{MockSignerFactory, SignerFactory, build_signer_map};
