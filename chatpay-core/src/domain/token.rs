use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Canonical on-chain metadata for an ERC-20 token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    pub address: Address,
    pub decimals: u8,
    /// Display-only; a token without a readable `symbol()` is still usable.
    pub symbol: Option<String>,
}

/// Outcome of token resolution. The native currency is its own variant so
/// downstream code cannot encode a `transfer` call against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedToken {
    Native,
    Erc20(TokenMetadata),
}
