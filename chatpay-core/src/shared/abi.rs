//! Embedded ERC-20 ABI fragment and call-data encoding.

use ethers::abi::{Abi, Token};
use ethers::types::{Address, Bytes, U256};
use lazy_static::lazy_static;

lazy_static! {
    /// Minimal ERC-20 fragment: `decimals`, `symbol`, `transfer`.
    pub static ref ERC20_ABI: Abi = serde_json::from_slice(include_bytes!("../../abi/erc20.json"))
        .expect("embedded ERC-20 ABI is valid");
}

/// ABI-encode a `transfer(to, amount)` call.
pub fn encode_transfer(to: Address, amount: U256) -> Bytes {
    let function = ERC20_ABI
        .function("transfer")
        .expect("transfer is in the embedded ABI");
    let data = function
        .encode_input(&[Token::Address(to), Token::Uint(amount)])
        .expect("transfer arguments tokenize");
    Bytes::from(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_abi_has_the_three_functions() {
        assert!(ERC20_ABI.function("decimals").is_ok());
        assert!(ERC20_ABI.function("symbol").is_ok());
        assert!(ERC20_ABI.function("transfer").is_ok());
    }

    #[test]
    fn transfer_call_data_uses_the_canonical_selector() {
        let to: Address = "0x742d35Cc6634C0532925a3b8D4C9db96C4b4d8b6"
            .parse()
            .unwrap();
        let data = encode_transfer(to, U256::from(1_500_000u64));

        // selector + two 32-byte words
        assert_eq!(data.len(), 4 + 32 + 32);
        assert_eq!(&data[..4], &[0xa9, 0x05, 0x9c, 0xbb]);

        let encoded = hex::encode(data.as_ref());
        assert!(encoded.ends_with(&format!("{:064x}", 1_500_000u64)));
        assert!(encoded.contains(&hex::encode(to.as_bytes())));
    }
}
