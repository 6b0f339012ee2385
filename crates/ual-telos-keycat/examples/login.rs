/*
[INPUT]:  A host chain list and a mock signer standing in for Keycat
[OUTPUT]: A logged-in user printed to stdout
[POS]:    Examples - authenticator lifecycle demonstration
[UPDATE]: When the lifecycle flow changes
*/

use std::sync::Arc;

use ual_telos_keycat::*;

/// Example: login lifecycle
///
/// This example demonstrates the flow a host framework drives:
/// 1. Declare the chains the dapp supports
/// 2. Construct the authenticator with a signer factory
/// 3. Call init and check for errors
/// 4. Login and inspect the returned user
#[tokio::main]
async fn main() {
    println!("=== Telos Sign Login Example ===\n");

    // Step 1: The dapp supports Telos mainnet
    let chains = vec![ChainDescriptor {
        chain_id: TELOS_MAINNET_CHAIN_ID.to_string(),
        origin: "https://dapp.example".to_string(),
        rpc_endpoints: vec![RpcEndpoint::new("https", "rpc.telos.net", 443)],
    }];

    // Step 2: Construct the authenticator
    // In production, implement Signer + SignerFactory against the real
    // Keycat window; the mock stands in for it here.
    let signer = Arc::new(MockSigner::new(
        BlockchainConfig {
            name: "telos".to_string(),
            nodes: vec!["https://rpc.telos.net:443".to_string()],
            origin: "https://dapp.example".to_string(),
        },
        SigninData {
            account_name: "alice".to_string(),
            permission: "active".to_string(),
            public_key: "PUB_K1_xyz".to_string(),
        },
    ));
    let factory = MockSignerFactory::new(signer);
    let auth = KeycatAuthenticator::new(&chains, AuthenticatorOptions::default(), &factory);
    println!("✓ Authenticator created for chain {}", auth.selected_chain_id());

    // Step 3: Initialize
    auth.init().await;
    if let Some(err) = auth.error() {
        eprintln!("Initialization failed: {err}");
        return;
    }
    println!("✓ Initialized ({})", auth.name());

    // Step 4: Login
    match auth.login().await {
        Ok(users) => {
            let user = &users[0];
            println!("✓ Logged in as {}", user.account_name().await);
            println!("  chain: {}", user.chain_id().await);
            println!("  keys:  {:?}", user.keys().await);
        }
        Err(err) => eprintln!("Login failed ({}): {err}", err.kind()),
    }

    println!("\n✓ Login example complete");
}
