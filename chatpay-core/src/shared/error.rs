//! Error handling for the chatpay core.
//!
//! Every expected failure mode maps to a `PayError` variant whose `Display`
//! string is the user-facing chat diagnostic. `ErrorKind` groups variants
//! into the three recovery classes callers and tests branch on.

use ethers::types::Address;
use thiserror::Error;

/// Recovery class of a `PayError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed command syntax or amount.
    Parse,
    /// Token or on-chain lookup that could not be completed.
    Resolution,
    /// Registry fetch or RPC transport failure.
    Infrastructure,
}

/// Core error type. `Display` output is sent back to the chat channel
/// verbatim, so variants echo the offending input where available.
#[derive(Error, Debug, Clone)]
pub enum PayError {
    #[error("I can help with sends like `send 0.0001 ETH to @Cris` or `pay 5 USDC to @Cris` (mention the recipient).")]
    UnrecognizedCommand,

    #[error("Invalid amount: `{0}`.")]
    InvalidAmount(String),

    #[error("Could not parse token amount: `{amount}` (decimals={decimals}): {reason}.")]
    AmountConversion {
        amount: String,
        decimals: u8,
        reason: String,
    },

    #[error("I couldn't find token symbol `{0}` on Base via the 0x token list. Try using the token address (0x...).")]
    UnknownSymbol(String),

    #[error("Could not read `{function}` from token contract {address}: {reason}.")]
    ChainRead {
        address: String,
        function: String,
        reason: String,
    },

    #[error("Could not connect to the Base RPC endpoint: {0}.")]
    RpcSetup(String),

    #[error("Token list fetch failed ({0}).")]
    RegistryStatus(u16),

    #[error("Token list fetch succeeded but response format was unexpected.")]
    RegistryFormat,

    #[error("Token list fetch error: {0}.")]
    RegistryFetch(String),
}

impl PayError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PayError::UnrecognizedCommand
            | PayError::InvalidAmount(_)
            | PayError::AmountConversion { .. } => ErrorKind::Parse,
            PayError::UnknownSymbol(_) | PayError::ChainRead { .. } => ErrorKind::Resolution,
            PayError::RpcSetup(_)
            | PayError::RegistryStatus(_)
            | PayError::RegistryFormat
            | PayError::RegistryFetch(_) => ErrorKind::Infrastructure,
        }
    }

    /// Create a chain read error for a contract call
    pub fn chain_read(token: Address, function: &str, reason: impl Into<String>) -> Self {
        Self::ChainRead {
            address: format!("{token:?}"),
            function: function.to_string(),
            reason: reason.into(),
        }
    }

    /// Create an amount conversion error
    pub fn amount_conversion(amount: &str, decimals: u8, reason: impl Into<String>) -> Self {
        Self::AmountConversion {
            amount: amount.to_string(),
            decimals,
            reason: reason.into(),
        }
    }

    /// Create a registry transport error
    pub fn registry_fetch(reason: impl Into<String>) -> Self {
        Self::RegistryFetch(reason.into())
    }
}

pub type PayResult<T> = std::result::Result<T, PayError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_cover_the_taxonomy() {
        assert_eq!(PayError::UnrecognizedCommand.kind(), ErrorKind::Parse);
        assert_eq!(PayError::InvalidAmount("x".into()).kind(), ErrorKind::Parse);
        assert_eq!(
            PayError::UnknownSymbol("TOWNS".into()).kind(),
            ErrorKind::Resolution
        );
        assert_eq!(PayError::RegistryStatus(500).kind(), ErrorKind::Infrastructure);
        assert_eq!(PayError::RegistryFormat.kind(), ErrorKind::Infrastructure);
    }

    #[test]
    fn messages_echo_the_offending_input() {
        let err = PayError::InvalidAmount("00x".to_string());
        assert!(format!("{err}").contains("`00x`"));

        let err = PayError::UnknownSymbol("TOWNS".to_string());
        let text = format!("{err}");
        assert!(text.contains("`TOWNS`"));
        assert!(text.contains("token address"));

        let err = PayError::RegistryStatus(503);
        assert!(format!("{err}").contains("(503)"));
    }
}
