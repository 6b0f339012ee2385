/*
[INPUT]:  Host chain list, construction options, signer factory
[OUTPUT]: Host lifecycle implementation producing logged-in users
[POS]:    Auth layer - the session adapter orchestrating login/logout
[UPDATE]: When lifecycle semantics or login policy change
*/

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use tracing::{debug, info, warn};

use crate::chain::ChainDescriptor;
use crate::rpc::NodeRpc;
use crate::signer::{Signer, SignerFactory, SigninData, build_signer_map};
use crate::ual::{Authenticator, ButtonStyle, Result, UalError, User};
use crate::user::KeycatUser;

use super::config::{AuthenticatorConfig, AuthenticatorOptions};
use super::session::{MemorySessionStore, SessionCache, SystemClock};

/// UAL-style authenticator backed by the Keycat signer
///
/// Owns the per-chain signer client map and the session cache; `login()`
/// hands out a [`KeycatUser`] bound to the selected chain's client.
#[derive(Debug)]
pub struct KeycatAuthenticator {
    signer_map: HashMap<String, Arc<dyn Signer>>,
    selected_chain_id: String,
    rpc: Option<Arc<NodeRpc>>,
    config: AuthenticatorConfig,
    session: SessionCache,
    state: RwLock<LifecycleState>,
}

#[derive(Debug, Default)]
struct LifecycleState {
    error: Option<UalError>,
    loading: bool,
    active: Option<Arc<dyn Signer>>,
}

impl KeycatAuthenticator {
    /// Build the signer map and resolve collaborators
    ///
    /// Never fails: an unsupported selected chain leaves the RPC slot
    /// empty and surfaces as the initialization error at `init()`.
    pub fn new(
        chains: &[ChainDescriptor],
        options: AuthenticatorOptions,
        factory: &dyn SignerFactory,
    ) -> Self {
        let AuthenticatorOptions {
            selected_chain_id,
            rpc,
            store,
            clock,
            config,
        } = options;

        let selected_chain_id = selected_chain_id
            .or_else(|| chains.first().map(|chain| chain.chain_id.clone()))
            .unwrap_or_default();

        let signer_map = build_signer_map(chains, factory);
        let rpc = rpc.or_else(|| default_rpc(&signer_map, &selected_chain_id));

        let store = store.unwrap_or_else(|| Arc::new(MemorySessionStore::new()));
        let clock = clock.unwrap_or_else(|| Arc::new(SystemClock));
        let session = SessionCache::new(store, clock, config.invalidate_after_secs);

        Self {
            signer_map,
            selected_chain_id,
            rpc,
            config,
            session,
            state: RwLock::new(LifecycleState::default()),
        }
    }

    /// Chain id `init()` and `login()` operate on
    pub fn selected_chain_id(&self) -> &str {
        &self.selected_chain_id
    }

    /// RPC client users are constructed with, when one could be resolved
    pub fn rpc(&self) -> Option<Arc<NodeRpc>> {
        self.rpc.clone()
    }

    fn signer_for_selected_chain(&self) -> Option<Arc<dyn Signer>> {
        let active = self.state.read().unwrap().active.clone();
        active.or_else(|| self.signer_map.get(&self.selected_chain_id).cloned())
    }

    fn unsupported_chain_error(&self) -> UalError {
        UalError::initialization(format!("Chain: {} not supported", self.selected_chain_id))
    }

    async fn interactive_signin(&self, signer: &Arc<dyn Signer>) -> Result<SigninData> {
        let identity = signer
            .signin()
            .await
            .map_err(|err| UalError::login(err.to_string(), err))?;
        info!(
            account = %identity.account_name,
            permission = %identity.permission,
            "interactive sign-in completed"
        );
        Ok(identity)
    }
}

fn default_rpc(
    signer_map: &HashMap<String, Arc<dyn Signer>>,
    selected_chain_id: &str,
) -> Option<Arc<NodeRpc>> {
    let signer = signer_map.get(selected_chain_id)?;
    let node = signer.blockchain().nodes.first()?;
    match NodeRpc::new(node) {
        Ok(rpc) => Some(Arc::new(rpc)),
        Err(err) => {
            warn!(%node, error = %err, "failed to build default rpc client");
            None
        }
    }
}

#[async_trait]
impl Authenticator for KeycatAuthenticator {
    async fn init(&self) {
        let mut state = self.state.write().unwrap();
        state.loading = false;
        state.active = self.signer_map.get(&self.selected_chain_id).cloned();
        state.error = if state.active.is_none() {
            warn!(chain_id = %self.selected_chain_id, "selected chain has no signer client");
            Some(self.unsupported_chain_error())
        } else {
            None
        };
    }

    /// Re-runs `init()`; a cached session survives a reset
    async fn reset(&self) {
        self.init().await;
    }

    fn is_errored(&self) -> bool {
        self.state.read().unwrap().error.is_some()
    }

    fn error(&self) -> Option<UalError> {
        self.state.read().unwrap().error.clone()
    }

    fn is_loading(&self) -> bool {
        self.state.read().unwrap().loading
    }

    fn name(&self) -> String {
        self.config.display_name.clone()
    }

    fn style(&self) -> ButtonStyle {
        ButtonStyle {
            icon: self.config.icon.clone(),
            text: self.config.display_name.clone(),
            background: self.config.background.clone(),
            text_color: self.config.text_color.clone(),
        }
    }

    fn onboarding_link(&self) -> String {
        self.config.onboarding_link.clone()
    }

    fn should_render(&self) -> bool {
        true
    }

    fn should_auto_login(&self) -> bool {
        false
    }

    async fn should_request_account_name(&self) -> bool {
        false
    }

    async fn login(&self) -> Result<Vec<Arc<dyn User>>> {
        let signer = self
            .signer_for_selected_chain()
            .ok_or_else(|| self.unsupported_chain_error())?;

        let identity = if self.config.session_caching {
            match self.session.load() {
                Some(session) => {
                    debug!(account = %session.account_name, "reusing cached session");
                    session.into()
                }
                None => {
                    let identity = self.interactive_signin(&signer).await?;
                    self.session.save(&identity);
                    identity
                }
            }
        } else {
            self.interactive_signin(&signer).await?
        };

        let user: Arc<dyn User> = Arc::new(KeycatUser::new(
            identity,
            self.selected_chain_id.clone(),
            signer,
            self.rpc.clone(),
        ));
        Ok(vec![user])
    }

    async fn logout(&self) -> Result<()> {
        if self.config.session_caching {
            self.session.clear();
            debug!("cleared cached session");
        }
        Ok(())
    }

    fn requires_get_key_confirmation(&self) -> bool {
        false
    }
}
