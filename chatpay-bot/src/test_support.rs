//! Shared fixtures for unit tests.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use ethers::types::Address;

use chatpay_core::{
    Erc20Reader, PayError, PayResult, PaymentInteractionBuilder, RegistryFetcher, TokenMap,
    TokenMetadata, TokenRegistryCache, TokenResolver,
};

use crate::app::bot::PaymentBot;
use crate::app::identity::IdentityResolver;
use crate::app::transport::{Mention, MessageEvent};

pub const BOT_ID: &str = "0x4444444444444444444444444444444444444444";
pub const SENDER: &str = "0x3333333333333333333333333333333333333333";
pub const CRIS: &str = "0x2222222222222222222222222222222222222222";
pub const CRIS_ACCOUNT: &str = "0x5555555555555555555555555555555555555555";
pub const USDC: &str = "0x833589fCD6eDb6E08f4c7C32D4f71b54bdA02913";

/// Identity directory with a single known user.
struct StubIdentity {
    accounts: HashMap<String, Address>,
}

#[async_trait]
impl IdentityResolver for StubIdentity {
    async fn smart_account(&self, user_id: &str) -> Result<Option<Address>> {
        Ok(self.accounts.get(&user_id.to_lowercase()).copied())
    }
}

struct StubChain;

#[async_trait]
impl Erc20Reader for StubChain {
    async fn decimals(&self, _token: Address) -> PayResult<u8> {
        Ok(18)
    }

    async fn symbol(&self, token: Address) -> PayResult<String> {
        Err(PayError::chain_read(token, "symbol", "not in fixture"))
    }
}

struct StubRegistry;

#[async_trait]
impl RegistryFetcher for StubRegistry {
    async fn fetch(&self) -> PayResult<TokenMap> {
        let mut map = TokenMap::new();
        map.insert(
            "USDC".to_string(),
            TokenMetadata {
                address: USDC.parse().unwrap(),
                decimals: 6,
                symbol: Some("USDC".to_string()),
            },
        );
        Ok(map)
    }
}

/// A bot wired to stub collaborators: one registry token (USDC), one
/// resolvable identity (Cris).
pub fn make_bot() -> PaymentBot {
    let cache = TokenRegistryCache::new(Arc::new(StubRegistry), Duration::from_secs(600));
    let resolver = TokenResolver::new(Arc::new(StubChain), Arc::new(cache));
    let builder = PaymentInteractionBuilder::new(resolver);

    let mut accounts = HashMap::new();
    accounts.insert(CRIS.to_lowercase(), CRIS_ACCOUNT.parse().unwrap());

    PaymentBot::new(
        builder,
        Arc::new(StubIdentity { accounts }),
        "speedrun".to_string(),
        Some(BOT_ID.parse().unwrap()),
    )
}

pub fn direct_message(message: &str) -> MessageEvent {
    MessageEvent {
        channel_id: "chan-1".to_string(),
        user_id: SENDER.to_string(),
        event_id: "evt-1".to_string(),
        message: message.to_string(),
        is_direct: true,
        is_mentioned: false,
        mentions: Vec::new(),
    }
}

pub fn mention_of(user_id: &str, display_name: Option<&str>) -> Mention {
    Mention {
        user_id: user_id.to_string(),
        display_name: display_name.map(|s| s.to_string()),
    }
}
