/*
[INPUT]:  Account identity, transactions, and arbitrary data to sign
[OUTPUT]: Sign-in identities, transaction receipts, and signatures
[POS]:    Signer layer - contract for the external wallet signer
[UPDATE]: When the signer API gains operations or changes shapes
*/

use std::fmt;
use std::sync::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Network descriptor a signer client is constructed with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockchainConfig {
    /// Symbolic network name, e.g. "telos"
    pub name: String,
    /// RPC endpoint URLs in host-declared order
    pub nodes: Vec<String>,
    /// Origin of the dapp requesting signatures
    pub origin: String,
}

/// Identity returned by an interactive sign-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninData {
    #[serde(rename = "accountName")]
    pub account_name: String,
    pub permission: String,
    #[serde(rename = "publicKey")]
    pub public_key: String,
}

/// Options forwarded with a transaction-signing request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactOptions {
    pub broadcast: bool,
    #[serde(rename = "blocksBehind")]
    pub blocks_behind: u32,
    #[serde(rename = "expireSeconds")]
    pub expire_seconds: u32,
}

impl Default for TransactOptions {
    fn default() -> Self {
        Self {
            broadcast: true,
            blocks_behind: 3,
            expire_seconds: 30,
        }
    }
}

/// Receipt for a signed (and optionally broadcast) transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactResult {
    /// Node-reported processing result, opaque to the adapter
    pub processed: Value,
    pub transaction_id: String,
}

/// Failures reported by the signer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignerError {
    /// The user declined the request in the signer UI
    #[error("signing request rejected by the user")]
    Rejected,

    /// The signer window or extension could not be reached
    #[error("signer unavailable: {0}")]
    Unavailable(String),

    /// The node rejected the submitted transaction
    #[error("node rejected the transaction: {0}")]
    Rpc(String),

    #[error("{0}")]
    Other(String),
}

/// Contract for the external wallet-signing client
///
/// Key custody, the actual cryptography, and signer-window communication
/// all live behind this trait; the adapter only forwards requests for the
/// bound account and translates the results.
#[async_trait]
pub trait Signer: Send + Sync + fmt::Debug {
    /// The network descriptor this client was constructed with
    fn blockchain(&self) -> &BlockchainConfig;

    /// Run the interactive sign-in flow
    async fn signin(&self) -> Result<SigninData, SignerError>;

    /// Sign a transaction for `account`, broadcasting it per `options`
    async fn transact(
        &self,
        account: &str,
        transaction: &Value,
        options: &TransactOptions,
    ) -> Result<TransactResult, SignerError>;

    /// Sign arbitrary data with `account`'s key, returning the signature
    async fn sign_arbitrary_data(&self, account: &str, data: &str)
    -> Result<String, SignerError>;
}

/// Arguments captured from the most recent `transact` call on a mock
#[derive(Debug, Clone, PartialEq)]
pub struct TransactCall {
    pub account: String,
    pub transaction: Value,
    pub options: TransactOptions,
}

/// Scripted signer for tests
///
/// Responses are fixed at construction and can be replaced per call site;
/// invocation counts and captured arguments let tests assert how the
/// adapter drove the signer.
#[derive(Debug)]
pub struct MockSigner {
    blockchain: BlockchainConfig,
    signin_response: RwLock<Result<SigninData, SignerError>>,
    transact_response: RwLock<Result<TransactResult, SignerError>>,
    arbitrary_response: RwLock<Result<String, SignerError>>,
    signin_calls: AtomicUsize,
    last_transact: RwLock<Option<TransactCall>>,
    last_arbitrary: RwLock<Option<(String, String)>>,
}

impl MockSigner {
    /// Create a mock that signs in as the given identity
    pub fn new(blockchain: BlockchainConfig, signin: SigninData) -> Self {
        Self {
            blockchain,
            signin_response: RwLock::new(Ok(signin)),
            transact_response: RwLock::new(Ok(TransactResult {
                processed: Value::Null,
                transaction_id: "mock-transaction-id".to_string(),
            })),
            arbitrary_response: RwLock::new(Ok("SIG_K1_mock".to_string())),
            signin_calls: AtomicUsize::new(0),
            last_transact: RwLock::new(None),
            last_arbitrary: RwLock::new(None),
        }
    }

    pub fn set_signin(&self, response: Result<SigninData, SignerError>) {
        *self.signin_response.write().unwrap() = response;
    }

    pub fn set_transact(&self, response: Result<TransactResult, SignerError>) {
        *self.transact_response.write().unwrap() = response;
    }

    pub fn set_sign_arbitrary(&self, response: Result<String, SignerError>) {
        *self.arbitrary_response.write().unwrap() = response;
    }

    /// Number of times `signin` ran
    pub fn signin_calls(&self) -> usize {
        self.signin_calls.load(Ordering::SeqCst)
    }

    /// Arguments of the most recent `transact` call
    pub fn last_transact(&self) -> Option<TransactCall> {
        self.last_transact.read().unwrap().clone()
    }

    /// (account, data) of the most recent `sign_arbitrary_data` call
    pub fn last_arbitrary(&self) -> Option<(String, String)> {
        self.last_arbitrary.read().unwrap().clone()
    }
}

#[async_trait]
impl Signer for MockSigner {
    fn blockchain(&self) -> &BlockchainConfig {
        &self.blockchain
    }

    async fn signin(&self) -> Result<SigninData, SignerError> {
        self.signin_calls.fetch_add(1, Ordering::SeqCst);
        self.signin_response.read().unwrap().clone()
    }

    async fn transact(
        &self,
        account: &str,
        transaction: &Value,
        options: &TransactOptions,
    ) -> Result<TransactResult, SignerError> {
        *self.last_transact.write().unwrap() = Some(TransactCall {
            account: account.to_string(),
            transaction: transaction.clone(),
            options: *options,
        });
        self.transact_response.read().unwrap().clone()
    }

    async fn sign_arbitrary_data(
        &self,
        account: &str,
        data: &str,
    ) -> Result<String, SignerError> {
        *self.last_arbitrary.write().unwrap() = Some((account.to_string(), data.to_string()));
        self.arbitrary_response.read().unwrap().clone()
    }
}
