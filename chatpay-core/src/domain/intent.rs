use serde::{Deserialize, Serialize};

/// Verb keyword that opened the payment phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentVerb {
    Send,
    Pay,
}

impl PaymentVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentVerb::Send => "send",
            PaymentVerb::Pay => "pay",
        }
    }

    /// Capitalized form used in interaction titles.
    pub fn capitalized(&self) -> &'static str {
        match self {
            PaymentVerb::Send => "Send",
            PaymentVerb::Pay => "Pay",
        }
    }
}

/// What the user asked for, extracted from a single message.
///
/// The recipient is deliberately absent: it comes from mention metadata,
/// never from the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntent {
    pub verb: PaymentVerb,
    /// Normalized decimal string (`.5` becomes `0.5`).
    pub amount_raw: String,
    /// Token reference as typed: native symbol, ERC-20 address, or symbol.
    pub token_raw: String,
}
