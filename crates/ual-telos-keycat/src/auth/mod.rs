/*
[INPUT]:  Host chain list, branding configuration, session storage
[OUTPUT]: The authenticator lifecycle implementation
[POS]:    Auth layer - login/logout orchestration and session caching
[UPDATE]: When lifecycle behavior or session policy changes
*/

pub mod authenticator;
pub mod config;
pub mod session;

pub use authenticator::KeycatAuthenticator;
pub use config::{AuthenticatorConfig, AuthenticatorOptions, DEFAULT_INVALIDATE_AFTER_SECS};
pub use session::{
    ACCOUNT_NAME_KEY,
    Clock,
    EXPIRATION_KEY,
    MemorySessionStore,
    PERMISSION_KEY,
    PUBLIC_KEY_KEY,
    Session,
    SessionCache,
    SessionStore,
    SystemClock,
};
