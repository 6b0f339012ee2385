/*
[INPUT]:  Sign-in identities, a key/value store, and a clock
[OUTPUT]: Cached sessions validated against their expiration
[POS]:    Auth layer - session persistence with TTL
[UPDATE]: When cached fields or the expiry policy change
*/

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, RwLock};

use chrono::Utc;
use tracing::debug;

use crate::signer::SigninData;

/// Storage keys, fixed by the persisted-state contract
pub const ACCOUNT_NAME_KEY: &str = "accountName";
pub const PERMISSION_KEY: &str = "permission";
pub const PUBLIC_KEY_KEY: &str = "publicKey";
pub const EXPIRATION_KEY: &str = "expiration";

const SESSION_KEYS: [&str; 4] = [
    ACCOUNT_NAME_KEY,
    PERMISSION_KEY,
    PUBLIC_KEY_KEY,
    EXPIRATION_KEY,
];

/// Host-scoped string key/value store for session state
///
/// Modeled on browser local storage: operations do not fail, and absent
/// keys read as `None`.
pub trait SessionStore: Send + Sync + fmt::Debug {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory store, the default when the host injects nothing
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.write().unwrap().remove(key);
    }
}

/// Clock dependency so the TTL check is testable
pub trait Clock: Send + Sync + fmt::Debug {
    fn now_epoch_seconds(&self) -> i64;
}

/// Wall-clock time
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> i64 {
        Utc::now().timestamp()
    }
}

/// A cached proof of a completed sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub account_name: String,
    pub permission: String,
    pub public_key: String,
    /// Epoch seconds after which the session is no longer reusable
    pub expires_at: i64,
}

impl From<Session> for SigninData {
    fn from(session: Session) -> Self {
        SigninData {
            account_name: session.account_name,
            permission: session.permission,
            public_key: session.public_key,
        }
    }
}

/// Store + clock + TTL, the session persistence unit of the authenticator
#[derive(Debug, Clone)]
pub struct SessionCache {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    invalidate_after_secs: u64,
}

impl SessionCache {
    pub fn new(
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        invalidate_after_secs: u64,
    ) -> Self {
        Self {
            store,
            clock,
            invalidate_after_secs,
        }
    }

    /// Load the cached session if complete and still valid
    ///
    /// All four fields must be present, the expiration must parse, and the
    /// expiry must be strictly in the future. An unparseable expiration
    /// reads as expired, forcing a fresh sign-in.
    pub fn load(&self) -> Option<Session> {
        let account_name = self.store.get(ACCOUNT_NAME_KEY)?;
        let permission = self.store.get(PERMISSION_KEY)?;
        let public_key = self.store.get(PUBLIC_KEY_KEY)?;
        let expires_at: i64 = self.store.get(EXPIRATION_KEY)?.parse().ok()?;

        if expires_at <= self.clock.now_epoch_seconds() {
            debug!(account = %account_name, "cached session expired");
            return None;
        }

        Some(Session {
            account_name,
            permission,
            public_key,
            expires_at,
        })
    }

    /// Persist a fresh sign-in with the configured TTL
    pub fn save(&self, signin: &SigninData) -> Session {
        let expires_at = self.clock.now_epoch_seconds() + self.invalidate_after_secs as i64;

        self.store.set(ACCOUNT_NAME_KEY, &signin.account_name);
        self.store.set(PERMISSION_KEY, &signin.permission);
        self.store.set(PUBLIC_KEY_KEY, &signin.public_key);
        self.store.set(EXPIRATION_KEY, &expires_at.to_string());

        Session {
            account_name: signin.account_name.clone(),
            permission: signin.permission.clone(),
            public_key: signin.public_key.clone(),
            expires_at,
        }
    }

    /// Remove all persisted session fields
    pub fn clear(&self) {
        for key in SESSION_KEYS {
            self.store.remove(key);
        }
    }
}
