/*
[INPUT]:  Mock signers and scripted session state
[OUTPUT]: Test results for the authenticator lifecycle
[POS]:    Integration tests - init/login/logout flow
[UPDATE]: When lifecycle semantics or login policy change
*/

mod common;

use std::sync::Arc;

use common::{FixedClock, alice, mock_signer, telos_chain, unknown_chain};
use tokio_test::assert_ok;
use ual_telos_keycat::{
    Authenticator,
    AuthenticatorConfig,
    AuthenticatorOptions,
    KeycatAuthenticator,
    MemorySessionStore,
    MockSignerFactory,
    SessionStore,
    SignerError,
    TELOS_MAINNET_CHAIN_ID,
    UalErrorKind,
    User,
    auth::{ACCOUNT_NAME_KEY, DEFAULT_INVALIDATE_AFTER_SECS, EXPIRATION_KEY, PERMISSION_KEY, PUBLIC_KEY_KEY},
};

fn cached_options(store: Arc<MemorySessionStore>, clock: Arc<FixedClock>) -> AuthenticatorOptions {
    AuthenticatorOptions {
        store: Some(store),
        clock: Some(clock),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_init_reaches_ready_for_known_chain() {
    let factory = MockSignerFactory::new(mock_signer());
    let auth = KeycatAuthenticator::new(&[telos_chain()], AuthenticatorOptions::default(), &factory);

    auth.init().await;

    assert!(!auth.is_errored());
    assert!(auth.error().is_none());
    assert!(!auth.is_loading());
}

#[tokio::test]
async fn test_init_records_error_for_unknown_chain() {
    let factory = MockSignerFactory::new(mock_signer());
    let chain = unknown_chain();
    let expected = format!("Chain: {} not supported", chain.chain_id);

    // Construction must not panic even though the default RPC cannot be built
    let auth = KeycatAuthenticator::new(&[chain], AuthenticatorOptions::default(), &factory);
    auth.init().await;

    assert!(auth.is_errored());
    let err = auth.error().unwrap();
    assert_eq!(err.kind(), UalErrorKind::Initialization);
    assert_eq!(err.message(), expected);
}

#[tokio::test]
async fn test_login_returns_exactly_one_user() {
    let signer = mock_signer();
    let factory = MockSignerFactory::new(Arc::clone(&signer));
    let auth = KeycatAuthenticator::new(&[telos_chain()], AuthenticatorOptions::default(), &factory);
    auth.init().await;

    let users = assert_ok!(auth.login().await);

    assert_eq!(users.len(), 1);
    assert_eq!(users[0].account_name().await, "alice");
    assert_eq!(users[0].chain_id().await, TELOS_MAINNET_CHAIN_ID);
    assert_eq!(users[0].keys().await, vec!["PUB_K1_xyz".to_string()]);
    assert_eq!(signer.signin_calls(), 1);
}

#[tokio::test]
async fn test_login_on_unsupported_chain_throws_initialization_error() {
    let factory = MockSignerFactory::new(mock_signer());
    let auth = KeycatAuthenticator::new(&[unknown_chain()], AuthenticatorOptions::default(), &factory);
    auth.init().await;

    let err = auth.login().await.unwrap_err();
    assert_eq!(err.kind(), UalErrorKind::Initialization);
    assert!(err.message().contains("not supported"));
}

#[tokio::test]
async fn test_cached_login_is_idempotent_within_ttl() {
    let signer = mock_signer();
    let factory = MockSignerFactory::new(Arc::clone(&signer));
    let store = Arc::new(MemorySessionStore::new());
    let clock = FixedClock::at(1_000_000);
    let auth = KeycatAuthenticator::new(
        &[telos_chain()],
        cached_options(store, Arc::clone(&clock)),
        &factory,
    );
    auth.init().await;

    let first = assert_ok!(auth.login().await);
    clock.advance(3_600);
    let second = assert_ok!(auth.login().await);

    assert_eq!(signer.signin_calls(), 1);
    assert_eq!(
        first[0].account_name().await,
        second[0].account_name().await
    );
    assert_eq!(first[0].keys().await, second[0].keys().await);
}

#[tokio::test]
async fn test_expired_session_forces_fresh_signin() {
    let signer = mock_signer();
    let factory = MockSignerFactory::new(Arc::clone(&signer));
    let store = Arc::new(MemorySessionStore::new());
    let clock = FixedClock::at(1_000_000);
    let auth = KeycatAuthenticator::new(
        &[telos_chain()],
        cached_options(store, Arc::clone(&clock)),
        &factory,
    );
    auth.init().await;

    assert_ok!(auth.login().await);
    clock.advance(DEFAULT_INVALIDATE_AFTER_SECS as i64 + 1);
    assert_ok!(auth.login().await);

    assert_eq!(signer.signin_calls(), 2);
}

#[tokio::test]
async fn test_logout_clears_all_persisted_fields() {
    let signer = mock_signer();
    let factory = MockSignerFactory::new(Arc::clone(&signer));
    let store = Arc::new(MemorySessionStore::new());
    let clock = FixedClock::at(1_000_000);
    let auth = KeycatAuthenticator::new(
        &[telos_chain()],
        cached_options(Arc::clone(&store), clock),
        &factory,
    );
    auth.init().await;

    assert_ok!(auth.login().await);
    assert!(store.get(ACCOUNT_NAME_KEY).is_some());
    assert!(store.get(EXPIRATION_KEY).is_some());

    assert_ok!(auth.logout().await);

    for key in [ACCOUNT_NAME_KEY, PERMISSION_KEY, PUBLIC_KEY_KEY, EXPIRATION_KEY] {
        assert!(store.get(key).is_none(), "{key} should be cleared");
    }

    // The next login cannot reuse pre-logout data
    assert_ok!(auth.login().await);
    assert_eq!(signer.signin_calls(), 2);
}

#[tokio::test]
async fn test_stateless_variant_always_signs_in() {
    let signer = mock_signer();
    let factory = MockSignerFactory::new(Arc::clone(&signer));
    let store = Arc::new(MemorySessionStore::new());
    let options = AuthenticatorOptions {
        store: Some(Arc::clone(&store) as Arc<dyn SessionStore>),
        config: AuthenticatorConfig {
            session_caching: false,
            ..Default::default()
        },
        ..Default::default()
    };
    let auth = KeycatAuthenticator::new(&[telos_chain()], options, &factory);
    auth.init().await;

    assert_ok!(auth.login().await);
    assert_ok!(auth.login().await);

    assert_eq!(signer.signin_calls(), 2);
    // The store is never touched without caching
    assert!(store.get(ACCOUNT_NAME_KEY).is_none());
    assert!(store.get(EXPIRATION_KEY).is_none());
}

#[tokio::test]
async fn test_reset_preserves_cached_session() {
    let signer = mock_signer();
    let factory = MockSignerFactory::new(Arc::clone(&signer));
    let store = Arc::new(MemorySessionStore::new());
    let clock = FixedClock::at(1_000_000);
    let auth = KeycatAuthenticator::new(
        &[telos_chain()],
        cached_options(store, clock),
        &factory,
    );
    auth.init().await;

    assert_ok!(auth.login().await);
    auth.reset().await;
    assert!(!auth.is_errored());
    assert_ok!(auth.login().await);

    assert_eq!(signer.signin_calls(), 1);
}

#[tokio::test]
async fn test_failed_signin_wraps_as_login_error() {
    let signer = mock_signer();
    signer.set_signin(Err(SignerError::Rejected));
    let factory = MockSignerFactory::new(Arc::clone(&signer));
    let auth = KeycatAuthenticator::new(&[telos_chain()], AuthenticatorOptions::default(), &factory);
    auth.init().await;

    let err = auth.login().await.unwrap_err();

    assert_eq!(err.kind(), UalErrorKind::Login);
    let source = std::error::Error::source(&err).expect("cause should be attached");
    assert!(source.to_string().contains("rejected"));
}

#[tokio::test]
async fn test_descriptive_methods_report_branding() {
    let factory = MockSignerFactory::new(mock_signer());
    let auth = KeycatAuthenticator::new(&[telos_chain()], AuthenticatorOptions::default(), &factory);

    assert_eq!(auth.name(), "Telos Sign");
    let style = auth.style();
    assert_eq!(style.text, "Telos Sign");
    assert_eq!(style.background, "#030238");
    assert_eq!(style.text_color, "#FFFFFF");
    assert!(style.icon.starts_with("data:image/svg+xml;base64,"));
    assert_eq!(auth.onboarding_link(), "https://keycatdev.gitbook.io/keycatjs/");
    assert!(auth.should_render());
    assert!(!auth.should_auto_login());
    assert!(!auth.should_request_account_name().await);
    assert!(!auth.requires_get_key_confirmation());
}

#[tokio::test]
async fn test_cached_identity_matches_signin_identity() {
    let signer = mock_signer();
    let factory = MockSignerFactory::new(Arc::clone(&signer));
    let store = Arc::new(MemorySessionStore::new());
    let clock = FixedClock::at(1_000_000);
    let auth = KeycatAuthenticator::new(
        &[telos_chain()],
        cached_options(Arc::clone(&store), clock),
        &factory,
    );
    auth.init().await;

    assert_ok!(auth.login().await);

    let expected = alice();
    assert_eq!(store.get(ACCOUNT_NAME_KEY).as_deref(), Some(expected.account_name.as_str()));
    assert_eq!(store.get(PERMISSION_KEY).as_deref(), Some(expected.permission.as_str()));
    assert_eq!(store.get(PUBLIC_KEY_KEY).as_deref(), Some(expected.public_key.as_str()));
    assert_eq!(
        store.get(EXPIRATION_KEY).as_deref(),
        Some((1_000_000 + DEFAULT_INVALIDATE_AFTER_SECS as i64).to_string().as_str())
    );
}
