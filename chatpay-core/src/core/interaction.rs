//! Interaction assembly: the end of the pipeline.
//!
//! Orchestrates intent parsing, token resolution, and amount conversion
//! into a signable transaction payload wrapped in a display title.

use ethers::types::Address;
use serde::{Deserialize, Serialize};

use crate::core::amount;
use crate::core::intent::parse_payment_request;
use crate::core::resolver::TokenResolver;
use crate::domain::recipient::Recipient;
use crate::domain::token::ResolvedToken;
use crate::shared::abi::encode_transfer;
use crate::shared::constants::{
    BASE_CHAIN_ID, INTERACTION_ID_PREFIX, NATIVE_DECIMALS, NATIVE_SYMBOL,
};
use crate::shared::error::PayResult;

/// Chain-specific payload handed to the signing UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
    pub chain_id: String,
    pub to: Address,
    /// Base-unit amount as a decimal string; `"0"` for ERC-20 transfers,
    /// where the amount lives in `data`.
    pub value: String,
    /// Hex-encoded call data; `"0x"` for native transfers.
    pub data: String,
}

/// User-reviewable proposal for a blockchain action. Requires explicit
/// signature downstream; this core only constructs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionRequest {
    pub id: String,
    pub title: String,
    pub content: TransactionPayload,
}

/// Everything the builder needs about one inbound message.
#[derive(Debug, Clone)]
pub struct PaymentRequestInput<'a> {
    pub message: &'a str,
    pub sender_user_id: &'a str,
    pub event_id: &'a str,
    pub recipient: Recipient,
}

pub struct PaymentInteractionBuilder {
    resolver: TokenResolver,
}

impl PaymentInteractionBuilder {
    pub fn new(resolver: TokenResolver) -> Self {
        Self { resolver }
    }

    /// Build a signable interaction request from a chat message, or a
    /// user-facing failure.
    pub async fn build(&self, input: PaymentRequestInput<'_>) -> PayResult<InteractionRequest> {
        let intent = parse_payment_request(input.message)?;
        let resolved = self.resolver.resolve(&intent.token_raw).await?;

        // Derived from the triggering event: a redelivery maps to the same
        // id so the signing UI can treat it as the same proposal.
        let id = format!("{INTERACTION_ID_PREFIX}{}", input.event_id);
        let recipient_name = input
            .recipient
            .display_name
            .as_deref()
            .unwrap_or("recipient");

        let (to, value, data, label) = match &resolved {
            ResolvedToken::Native => {
                let wei = amount::to_base_units(&intent.amount_raw, NATIVE_DECIMALS)?;
                (
                    input.recipient.smart_account,
                    wei.to_string(),
                    "0x".to_string(),
                    NATIVE_SYMBOL.to_string(),
                )
            }
            ResolvedToken::Erc20(token) => {
                let units = amount::to_base_units(&intent.amount_raw, token.decimals)?;
                let call = encode_transfer(input.recipient.smart_account, units);
                (
                    token.address,
                    "0".to_string(),
                    format!("0x{}", hex::encode(call.as_ref())),
                    token
                        .symbol
                        .clone()
                        .unwrap_or_else(|| intent.token_raw.to_uppercase()),
                )
            }
        };

        log::debug!(
            "built payment interaction {id}: {} {} {label}",
            intent.verb.as_str(),
            intent.amount_raw
        );

        Ok(InteractionRequest {
            id,
            title: format!(
                "{} {} {label} to {recipient_name}",
                intent.verb.capitalized(),
                intent.amount_raw
            ),
            content: TransactionPayload {
                chain_id: BASE_CHAIN_ID.to_string(),
                to,
                value,
                data,
            },
        })
    }
}
