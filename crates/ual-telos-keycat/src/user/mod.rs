/*
[INPUT]:  Signing requests from the host for one logged-in account
[OUTPUT]: Signer-produced receipts and signatures in host types
[POS]:    User layer - per-login façade over the bound signer client
[UPDATE]: When the user capability contract changes
*/

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::rpc::NodeRpc;
use crate::signer::{Signer, SigninData, TransactOptions};
use crate::ual::{Result, SignTransactionConfig, SignTransactionResponse, UalError, User};

/// A logged-in user bound to one signer client and chain
///
/// Holds shared references to the signer and RPC client; their lifecycle
/// belongs to the authenticator.
#[derive(Debug)]
pub struct KeycatUser {
    account_name: String,
    permission: String,
    keys: Vec<String>,
    chain_id: String,
    signer: Arc<dyn Signer>,
    rpc: Option<Arc<NodeRpc>>,
}

impl KeycatUser {
    pub fn new(
        identity: SigninData,
        chain_id: String,
        signer: Arc<dyn Signer>,
        rpc: Option<Arc<NodeRpc>>,
    ) -> Self {
        Self {
            account_name: identity.account_name,
            permission: identity.permission,
            keys: vec![identity.public_key],
            chain_id,
            signer,
            rpc,
        }
    }

    pub fn permission(&self) -> &str {
        &self.permission
    }

    pub fn rpc(&self) -> Option<Arc<NodeRpc>> {
        self.rpc.clone()
    }
}

#[async_trait]
impl User for KeycatUser {
    async fn sign_transaction(
        &self,
        transaction: &Value,
        config: SignTransactionConfig,
    ) -> Result<SignTransactionResponse> {
        let options = TransactOptions {
            broadcast: config.broadcast,
            blocks_behind: config.blocks_behind,
            expire_seconds: config.expire_seconds,
        };

        let receipt = self
            .signer
            .transact(&self.account_name, transaction, &options)
            .await
            .map_err(|err| UalError::signing("Error signing transaction", err))?;

        Ok(SignTransactionResponse {
            processed: receipt.processed,
            transaction_id: receipt.transaction_id,
        })
    }

    /// The signer signs with the bound account's own key; the requested
    /// public key is not forwarded.
    async fn sign_arbitrary(&self, _public_key: &str, data: &str) -> Result<String> {
        self.signer
            .sign_arbitrary_data(&self.account_name, data)
            .await
            .map_err(|err| UalError::signing("Error signing arbitrary data", err))
    }

    /// Reports ownership without contacting the signer; no cryptographic
    /// proof of the challenge is performed.
    async fn verify_key_ownership(&self, _challenge: &str) -> Result<bool> {
        Ok(true)
    }

    async fn account_name(&self) -> String {
        self.account_name.clone()
    }

    async fn chain_id(&self) -> String {
        self.chain_id.clone()
    }

    async fn keys(&self) -> Vec<String> {
        self.keys.clone()
    }
}
