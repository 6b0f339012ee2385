/*
[INPUT]:  A logged-in user and a token transfer transaction
[OUTPUT]: The signed transaction receipt printed to stdout
[POS]:    Examples - signing façade demonstration
[UPDATE]: When signing options or response shapes change
*/

use std::sync::Arc;

use serde_json::json;
use ual_telos_keycat::*;

/// Example: signing through a logged-in user
///
/// Shows the two signing operations the user façade forwards to the
/// signer: a transaction and an arbitrary-data challenge.
#[tokio::main]
async fn main() {
    println!("=== Telos Sign Transaction Example ===\n");

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
    signer.set_transact(Ok(TransactResult {
        processed: json!({"receipt": {"status": "executed"}}),
        transaction_id: "ab12cd34".to_string(),
    }));

    let user = KeycatUser::new(
        SigninData {
            account_name: "alice".to_string(),
            permission: "active".to_string(),
            public_key: "PUB_K1_xyz".to_string(),
        },
        TELOS_MAINNET_CHAIN_ID.to_string(),
        signer,
        None,
    );

    let transaction = json!({
        "actions": [{
            "account": "eosio.token",
            "name": "transfer",
            "authorization": [{"actor": "alice", "permission": "active"}],
            "data": {"from": "alice", "to": "bob", "quantity": "1.0000 TLOS", "memo": ""}
        }]
    });

    match user
        .sign_transaction(&transaction, SignTransactionConfig::default())
        .await
    {
        Ok(response) => {
            println!("✓ Transaction signed");
            println!("  id:       {}", response.transaction_id);
            println!("  processed: {}", response.processed);
        }
        Err(err) => eprintln!("Signing failed: {err}"),
    }

    match user.sign_arbitrary("PUB_K1_xyz", "login-challenge").await {
        Ok(signature) => println!("✓ Arbitrary data signed: {signature}"),
        Err(err) => eprintln!("Signing failed: {err}"),
    }

    println!("\n✓ Signing example complete");
}
