/*
[INPUT]:  Failure sources (initialization, signer interaction)
[OUTPUT]: Host-facing typed errors with kind and cause chain
[POS]:    Host contract layer - unified error type for the adapter
[UPDATE]: When the host error taxonomy gains new kinds
*/

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Error kinds defined by the host authenticator contract
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UalErrorKind {
    /// Selected chain could not be initialized
    Initialization,
    /// Interactive sign-in failed
    Login,
    /// Transaction or arbitrary-data signing failed
    Signing,
}

impl fmt::Display for UalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UalErrorKind::Initialization => "initialization",
            UalErrorKind::Login => "login",
            UalErrorKind::Signing => "signing",
        };
        f.write_str(name)
    }
}

/// Typed error surfaced to the host
///
/// Cloneable so an error recorded at `init()` can be handed out from
/// `error()` while remaining stored on the authenticator. The underlying
/// cause is shared between clones, not copied.
#[derive(Debug, Clone)]
pub struct UalError {
    kind: UalErrorKind,
    message: String,
    cause: Option<Arc<dyn StdError + Send + Sync + 'static>>,
}

impl UalError {
    /// Create an error without an underlying cause
    pub fn new(kind: UalErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Create an error wrapping an underlying cause
    pub fn with_cause(
        kind: UalErrorKind,
        message: impl Into<String>,
        cause: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: Some(Arc::new(cause)),
        }
    }

    /// Initialization-kind error (recorded on the authenticator, not thrown)
    pub fn initialization(message: impl Into<String>) -> Self {
        Self::new(UalErrorKind::Initialization, message)
    }

    /// Login-kind error wrapping a sign-in failure
    pub fn login(
        message: impl Into<String>,
        cause: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::with_cause(UalErrorKind::Login, message, cause)
    }

    /// Signing-kind error wrapping a signer failure
    pub fn signing(
        message: impl Into<String>,
        cause: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::with_cause(UalErrorKind::Signing, message, cause)
    }

    pub fn kind(&self) -> UalErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_initialization(&self) -> bool {
        self.kind == UalErrorKind::Initialization
    }

    pub fn is_login(&self) -> bool {
        self.kind == UalErrorKind::Login
    }

    pub fn is_signing(&self) -> bool {
        self.kind == UalErrorKind::Signing
    }
}

impl fmt::Display for UalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for UalError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.as_ref() as &(dyn StdError + 'static))
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, UalError>;
