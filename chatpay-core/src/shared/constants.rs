//! Constants for the chatpay core.

use std::time::Duration;

// Chain constants. chatpay operates on a single chain.
pub const BASE_CHAIN_ID: &str = "8453";
pub const NATIVE_SYMBOL: &str = "ETH";
pub const NATIVE_DECIMALS: u8 = 18;

// Token registry constants
pub const TOKEN_REGISTRY_URL: &str = "https://base.api.0x.org/swap/v1/tokens";
pub const TOKEN_REGISTRY_TTL: Duration = Duration::from_secs(10 * 60);

// Trigger constants
pub const DEFAULT_TRIGGER_KEYWORD: &str = "speedrun";

// Interaction constants. Ids are derived from the triggering event so a
// redelivered event produces the same id.
pub const INTERACTION_ID_PREFIX: &str = "payment-";
