/*
[INPUT]:  Host lifecycle calls and signing requests
[OUTPUT]: Capability traits the adapter and its users implement
[POS]:    Host contract layer - lifecycle and user interfaces
[UPDATE]: When the host framework adds lifecycle or signing methods
*/

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use super::error::Result;

/// Rendering metadata for the authenticator's login button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Icon shown to app users when selecting their authentication method
    pub icon: String,
    /// Name displayed to app users
    pub text: String,
    /// Background color of the button
    pub background: String,
    /// Color of text rendered on top of `background`
    pub text_color: String,
}

/// Options accepted by [`User::sign_transaction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignTransactionConfig {
    pub broadcast: bool,
    pub blocks_behind: u32,
    pub expire_seconds: u32,
}

impl Default for SignTransactionConfig {
    fn default() -> Self {
        Self {
            broadcast: true,
            blocks_behind: 3,
            expire_seconds: 30,
        }
    }
}

/// Result of a signed (and optionally broadcast) transaction
#[derive(Debug, Clone, PartialEq)]
pub struct SignTransactionResponse {
    /// Node-reported processing receipt, opaque to the adapter
    pub processed: Value,
    pub transaction_id: String,
}

/// Lifecycle contract every host authenticator plugin implements
///
/// The host constructs the authenticator with its chain list, calls
/// `init()`, renders the button from the descriptive methods, and drives
/// `login()`/`logout()` on user interaction. Initialization failures are
/// recorded and read back through `is_errored()`/`error()` rather than
/// thrown; `login()` failures are thrown as typed errors.
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Initialize internal state for the selected chain
    async fn init(&self);

    /// Reset to the initial state, then re-run `init()`
    async fn reset(&self);

    /// True if the authenticator errored while initializing
    fn is_errored(&self) -> bool;

    /// The recorded initialization error, if any
    fn error(&self) -> Option<crate::ual::UalError>;

    /// True while the authenticator is initializing its internal state
    fn is_loading(&self) -> bool;

    /// Display name of the authenticator
    fn name(&self) -> String;

    /// Style of the button the host will render
    fn style(&self) -> ButtonStyle;

    /// URL where the user can install the underlying signer
    fn onboarding_link(&self) -> String;

    /// Whether the button should render in the current environment
    fn should_render(&self) -> bool;

    /// Whether the host should attempt auto-login with this authenticator
    fn should_auto_login(&self) -> bool;

    /// Whether the host should show an account name input field
    async fn should_request_account_name(&self) -> bool;

    /// Login through the signer; returns exactly one user on success
    async fn login(&self) -> Result<Vec<Arc<dyn User>>>;

    /// Log the user out; never contacts the signer
    async fn logout(&self) -> Result<()>;

    /// Whether user confirmation is required for key retrieval
    fn requires_get_key_confirmation(&self) -> bool;
}

/// Capability contract for a logged-in user
#[async_trait]
pub trait User: Send + Sync + std::fmt::Debug {
    /// Sign (and by default broadcast) a transaction for this user
    async fn sign_transaction(
        &self,
        transaction: &Value,
        config: SignTransactionConfig,
    ) -> Result<SignTransactionResponse>;

    /// Sign arbitrary data, returning the signature
    async fn sign_arbitrary(&self, public_key: &str, data: &str) -> Result<String>;

    /// Whether the user owns the private keys for their public keys
    async fn verify_key_ownership(&self, challenge: &str) -> Result<bool>;

    async fn account_name(&self) -> String;

    async fn chain_id(&self) -> String;

    async fn keys(&self) -> Vec<String>;
}
