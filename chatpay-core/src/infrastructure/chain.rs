//! On-chain read capability for ERC-20 metadata.

use std::sync::Arc;

use async_trait::async_trait;
use ethers::contract::Contract;
use ethers::providers::{Http, Provider};
use ethers::types::Address;
#[cfg(test)]
use mockall::automock;

use crate::shared::abi::ERC20_ABI;
use crate::shared::error::{PayError, PayResult};

/// Read-only view of an ERC-20 contract.
///
/// `decimals` is required by the resolution pipeline; `symbol` is
/// best-effort and its failure is absorbed by the caller.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Erc20Reader: Send + Sync {
    async fn decimals(&self, token: Address) -> PayResult<u8>;
    async fn symbol(&self, token: Address) -> PayResult<String>;
}

/// `Erc20Reader` over a JSON-RPC HTTP provider.
#[derive(Debug)]
pub struct HttpChainReader {
    provider: Arc<Provider<Http>>,
}

impl HttpChainReader {
    pub fn new(rpc_url: &str) -> PayResult<Self> {
        let provider = Provider::<Http>::try_from(rpc_url)
            .map_err(|e| PayError::RpcSetup(e.to_string()))?;
        Ok(Self {
            provider: Arc::new(provider),
        })
    }

    fn contract(&self, token: Address) -> Contract<Provider<Http>> {
        Contract::new(token, ERC20_ABI.clone(), Arc::clone(&self.provider))
    }
}

#[async_trait]
impl Erc20Reader for HttpChainReader {
    async fn decimals(&self, token: Address) -> PayResult<u8> {
        self.contract(token)
            .method::<_, u8>("decimals", ())
            .map_err(|e| PayError::chain_read(token, "decimals", e.to_string()))?
            .call()
            .await
            .map_err(|e| PayError::chain_read(token, "decimals", e.to_string()))
    }

    async fn symbol(&self, token: Address) -> PayResult<String> {
        self.contract(token)
            .method::<_, String>("symbol", ())
            .map_err(|e| PayError::chain_read(token, "symbol", e.to_string()))?
            .call()
            .await
            .map_err(|e| PayError::chain_read(token, "symbol", e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_builds_from_a_well_formed_rpc_url() {
        assert!(HttpChainReader::new("https://mainnet.base.org").is_ok());
    }

    #[test]
    fn reader_rejects_a_malformed_rpc_url() {
        let err = HttpChainReader::new("not a url").unwrap_err();
        assert!(matches!(err, PayError::RpcSetup(_)));
    }
}
