/*
[INPUT]:  Branding values, caching policy, optional injected collaborators
[OUTPUT]: Authenticator configuration and construction options
[POS]:    Auth layer - configuration for the authenticator
[UPDATE]: When branding, policy knobs, or injectable collaborators change
*/

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::rpc::NodeRpc;

use super::session::{Clock, SessionStore};

/// Sessions cached on sign-in stay valid for 7 days
pub const DEFAULT_INVALIDATE_AFTER_SECS: u64 = 604_800;

const DEFAULT_DISPLAY_NAME: &str = "Telos Sign";
const DEFAULT_BACKGROUND: &str = "#030238";
const DEFAULT_TEXT_COLOR: &str = "#FFFFFF";
const DEFAULT_ONBOARDING_LINK: &str = "https://keycatdev.gitbook.io/keycatjs/";

/// Bundled button logo, rendered as a data URI by `AuthenticatorConfig::default`
const TELOS_SIGN_LOGO_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><rect width="64" height="64" rx="12" fill="#030238"/><circle cx="32" cy="32" r="21" fill="none" stroke="#571AFF" stroke-width="4"/><path d="M22 26h20M32 26v16" stroke="#FFFFFF" stroke-width="4" stroke-linecap="round"/></svg>"##;

/// Branding and policy for one authenticator instance
///
/// Differently-branded or stateless variants are instances of this
/// configuration, not separate implementations.
#[derive(Debug, Clone)]
pub struct AuthenticatorConfig {
    /// Name shown on the login button
    pub display_name: String,
    /// Button icon as a URL or data URI
    pub icon: String,
    /// Button background color
    pub background: String,
    /// Button text color
    pub text_color: String,
    /// Where users can install the signer
    pub onboarding_link: String,
    /// Reuse persisted sessions across `login()` calls
    pub session_caching: bool,
    /// TTL applied when a session is persisted
    pub invalidate_after_secs: u64,
}

impl Default for AuthenticatorConfig {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
            icon: format!(
                "data:image/svg+xml;base64,{}",
                STANDARD.encode(TELOS_SIGN_LOGO_SVG)
            ),
            background: DEFAULT_BACKGROUND.to_string(),
            text_color: DEFAULT_TEXT_COLOR.to_string(),
            onboarding_link: DEFAULT_ONBOARDING_LINK.to_string(),
            session_caching: true,
            invalidate_after_secs: DEFAULT_INVALIDATE_AFTER_SECS,
        }
    }
}

/// Construction options for [`KeycatAuthenticator`]
///
/// Everything is optional: the selected chain falls back to the first
/// declared chain, the RPC client to one built from the selected chain's
/// first node, and store/clock to in-memory and wall-clock defaults.
///
/// [`KeycatAuthenticator`]: super::KeycatAuthenticator
#[derive(Debug, Default)]
pub struct AuthenticatorOptions {
    pub selected_chain_id: Option<String>,
    pub rpc: Option<Arc<NodeRpc>>,
    pub store: Option<Arc<dyn SessionStore>>,
    pub clock: Option<Arc<dyn Clock>>,
    pub config: AuthenticatorConfig,
}
