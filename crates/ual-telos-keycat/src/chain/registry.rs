/*
[INPUT]:  64-hex chain identifiers
[OUTPUT]: Symbolic network names the signer understands
[POS]:    Chain layer - static chain registry
[UPDATE]: When a new network gains signer support
*/

/// Telos mainnet chain id
pub const TELOS_MAINNET_CHAIN_ID: &str =
    "4667b205c6838ef70ff7988f6e8257e8be0e1284a2f59699054a018f743b1d11";

/// Telos testnet chain id
pub const TELOS_TESTNET_CHAIN_ID: &str =
    "1eaa0824707c8c16bd25145493bf062aecddfeb56c736f6ba6397f3195f33c9f";

const CHAIN_MAP: &[(&str, &str)] = &[
    (TELOS_MAINNET_CHAIN_ID, "telos"),
    (TELOS_TESTNET_CHAIN_ID, "telos-testnet"),
];

/// Look up the signer network name for a chain id
///
/// `None` means the chain is unsupported; callers filter rather than error.
pub fn network_name(chain_id: &str) -> Option<&'static str> {
    CHAIN_MAP
        .iter()
        .find(|(id, _)| *id == chain_id)
        .map(|(_, name)| *name)
}
