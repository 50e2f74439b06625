//! Free-text payment phrase extraction.

use lazy_static::lazy_static;
use regex::Regex;

use crate::domain::intent::{PaymentIntent, PaymentVerb};
use crate::shared::error::{PayError, PayResult};

lazy_static! {
    // Supported:
    // - send 0.0001 ETH to @Cris
    // - pay 5 USDC to @Cris
    // - send 123 0xTokenAddress... to @Cris
    //
    // The recipient is resolved from mention metadata, not parsed here.
    static ref PAYMENT_PATTERN: Regex = Regex::new(
        r"(?i)\b(?P<verb>send|pay)\b\s+(?:me\s+)?(?P<amount>\d+(?:\.\d+)?|\.\d+)\s+(?P<token>0x[a-fA-F0-9]{40}|[A-Za-z][A-Za-z0-9]{0,31})\b"
    )
    .expect("payment pattern compiles");
}

/// Extract a `PaymentIntent` from a raw chat message.
///
/// Only the first match in the message is used; everything else, including
/// mentions, is ignored. Amounts must be finite and strictly positive.
pub fn parse_payment_request(message: &str) -> PayResult<PaymentIntent> {
    let captures = PAYMENT_PATTERN
        .captures(message)
        .ok_or(PayError::UnrecognizedCommand)?;

    let verb = if captures["verb"].eq_ignore_ascii_case("send") {
        PaymentVerb::Send
    } else {
        PaymentVerb::Pay
    };

    let matched_amount = &captures["amount"];
    let amount_raw = normalize_amount(matched_amount);
    if !is_positive_amount(&amount_raw) {
        return Err(PayError::InvalidAmount(matched_amount.to_string()));
    }

    Ok(PaymentIntent {
        verb,
        amount_raw,
        token_raw: captures["token"].to_string(),
    })
}

/// A leading-dot amount (`.5`) is rewritten with a leading zero.
fn normalize_amount(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('.') {
        format!("0{trimmed}")
    } else {
        trimmed.to_string()
    }
}

fn is_positive_amount(amount: &str) -> bool {
    amount
        .parse::<f64>()
        .map(|n| n.is_finite() && n > 0.0)
        .unwrap_or(false)
}
