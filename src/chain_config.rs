use alloy::primitives::ChainId;

/// Chain selected in the developer portal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ChainConfig {
    /// EIP-155 Chain ID
    pub id: ChainId,
    /// Display name used by the developer portal
    pub name: &'static str,
}

pub const WORLDCHAIN_SEPOLIA: ChainConfig = ChainConfig {
    id: 4801,
    name: "Worldcoin Sepolia",
};

/// Contract registration held by the developer portal.
///
/// The chain lives here and never in the transaction payload: the wallet
/// resolves it from the app's portal configuration.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// Contract address as registered, not checksum-normalized
    pub contract: &'static str,
    pub chain: ChainConfig,
}

pub const MESSAGE_STORE_PORTAL: PortalConfig = PortalConfig {
    contract: "0x063816286ae3312e759f80Afdb10C8879b30688D",
    chain: WORLDCHAIN_SEPOLIA,
};
