//! Token reference resolution.
//!
//! Three paths: the native currency short-circuits, addresses are read
//! on-chain, and symbols go through the cached remote registry.

use std::sync::Arc;

use ethers::types::Address;

use crate::core::registry::TokenRegistryCache;
use crate::domain::token::{ResolvedToken, TokenMetadata};
use crate::infrastructure::chain::Erc20Reader;
use crate::shared::constants::NATIVE_SYMBOL;
use crate::shared::error::{PayError, PayResult};

pub struct TokenResolver {
    reader: Arc<dyn Erc20Reader>,
    registry: Arc<TokenRegistryCache>,
}

impl TokenResolver {
    pub fn new(reader: Arc<dyn Erc20Reader>, registry: Arc<TokenRegistryCache>) -> Self {
        Self { reader, registry }
    }

    /// Resolve a raw token reference into metadata the builder can act on.
    pub async fn resolve(&self, token_raw: &str) -> PayResult<ResolvedToken> {
        let trimmed = token_raw.trim();

        if trimmed.eq_ignore_ascii_case(NATIVE_SYMBOL) {
            return Ok(ResolvedToken::Native);
        }

        if let Ok(address) = trimmed.parse::<Address>() {
            let decimals = self.reader.decimals(address).await?;
            // symbol() is display-only; a failed read degrades to None and
            // is indistinguishable from a token without one.
            let symbol = self.reader.symbol(address).await.ok();
            return Ok(ResolvedToken::Erc20(TokenMetadata {
                address,
                decimals,
                symbol,
            }));
        }

        let symbol = trimmed.to_uppercase();
        let registry = self.registry.registry().await?;
        match registry.get(&symbol) {
            Some(metadata) => Ok(ResolvedToken::Erc20(metadata.clone())),
            None => Err(PayError::UnknownSymbol(symbol)),
        }
    }
}
