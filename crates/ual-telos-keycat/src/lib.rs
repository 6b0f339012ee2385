/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public UAL Keycat authenticator crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod auth;
pub mod chain;
pub mod rpc;
pub mod signer;
pub mod ual;
pub mod user;

// Re-export commonly used types from auth
pub use auth::{
    AuthenticatorConfig,
    AuthenticatorOptions,
    Clock,
    KeycatAuthenticator,
    MemorySessionStore,
    Session,
    SessionCache,
    SessionStore,
    SystemClock,
};

// Re-export commonly used types from chain
pub use chain::{
    ChainDescriptor,
    RpcEndpoint,
    TELOS_MAINNET_CHAIN_ID,
    TELOS_TESTNET_CHAIN_ID,
    network_name,
    resolve_endpoints,
};

// Re-export commonly used types from rpc
pub use rpc::{ChainInfo, ClientConfig, NodeRpc, RpcError};

// Re-export commonly used types from signer
pub use signer::{
    BlockchainConfig,
    MockSigner,
    MockSignerFactory,
    Signer,
    SignerError,
    SignerFactory,
    SigninData,
    TransactOptions,
    TransactResult,
    build_signer_map,
};

// Re-export the host contract layer
pub use ual::{
    Authenticator,
    ButtonStyle,
    Result,
    SignTransactionConfig,
    SignTransactionResponse,
    UalError,
    UalErrorKind,
    User,
};

pub use user::KeycatUser;
