//! chatpay core
//!
//! Natural-language payment-intent interpreter for the chatpay bot.
//! Turns chat messages like `send 0.0001 ETH to @Cris` into Base
//! transaction requests ready for user signature.
//!
//! ## Architecture
//!
//! - **Core**: intent parsing, amount conversion, token resolution,
//!   registry caching, interaction building, trigger policy
//! - **Domain**: entities shared across the pipeline
//! - **Infrastructure**: on-chain read capability
//! - **Shared**: errors, constants, and the embedded ERC-20 ABI

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod shared;

// Re-export the pipeline surface used by the bot service.
pub use crate::core::interaction::{
    InteractionRequest, PaymentInteractionBuilder, PaymentRequestInput, TransactionPayload,
};
pub use crate::core::intent::parse_payment_request;
pub use crate::core::registry::{HttpTokenRegistry, RegistryFetcher, TokenMap, TokenRegistryCache};
pub use crate::core::resolver::TokenResolver;
pub use crate::core::trigger::{should_handle_payment, TriggerContext};
pub use crate::domain::intent::{PaymentIntent, PaymentVerb};
pub use crate::domain::recipient::Recipient;
pub use crate::domain::token::{ResolvedToken, TokenMetadata};
pub use crate::infrastructure::chain::{Erc20Reader, HttpChainReader};
pub use crate::shared::error::{ErrorKind, PayError, PayResult};
