//! Chat identity to smart-account resolution.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use ethers::types::Address;
use serde::Deserialize;

/// Maps a chat identity to the smart-account address funds are sent to.
#[async_trait]
pub trait IdentityResolver: Send + Sync {
    /// `None` when no smart account is registered for the identity.
    async fn smart_account(&self, user_id: &str) -> Result<Option<Address>>;
}

/// Identity lookup against the configured HTTP endpoint.
pub struct HttpIdentityResolver {
    base_url: String,
    http: reqwest::Client,
}

impl HttpIdentityResolver {
    pub fn new(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SmartAccountResponse {
    smart_account: Option<String>,
}

#[async_trait]
impl IdentityResolver for HttpIdentityResolver {
    async fn smart_account(&self, user_id: &str) -> Result<Option<Address>> {
        let url = format!("{}/{user_id}", self.base_url.trim_end_matches('/'));
        let response = self.http.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow!(
                "identity lookup failed ({})",
                response.status().as_u16()
            ));
        }

        let body: SmartAccountResponse = response.json().await?;
        Ok(body.smart_account.and_then(|s| s.parse().ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    const USER: &str = "0x2222222222222222222222222222222222222222";
    const ACCOUNT: &str = "0x5555555555555555555555555555555555555555";

    #[tokio::test]
    async fn resolves_a_registered_identity() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/accounts/{USER}"));
                then.status(200)
                    .json_body(json!({ "smartAccount": ACCOUNT }));
            })
            .await;

        let resolver = HttpIdentityResolver::new(server.url("/accounts"), reqwest::Client::new());
        let resolved = resolver.smart_account(USER).await.unwrap();

        assert_eq!(resolved, Some(ACCOUNT.parse().unwrap()));
    }

    #[tokio::test]
    async fn unknown_identity_resolves_to_none() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/accounts/{USER}"));
                then.status(404);
            })
            .await;

        let resolver = HttpIdentityResolver::new(server.url("/accounts"), reqwest::Client::new());
        assert_eq!(resolver.smart_account(USER).await.unwrap(), None);
    }

    #[tokio::test]
    async fn server_errors_are_propagated() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/accounts/{USER}"));
                then.status(500);
            })
            .await;

        let resolver = HttpIdentityResolver::new(server.url("/accounts"), reqwest::Client::new());
        let err = resolver.smart_account(USER).await.unwrap_err();

        assert!(err.to_string().contains("(500)"));
    }

    #[tokio::test]
    async fn malformed_account_in_the_response_is_treated_as_absent() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path(format!("/accounts/{USER}"));
                then.status(200).json_body(json!({ "smartAccount": "nope" }));
            })
            .await;

        let resolver = HttpIdentityResolver::new(server.url("/accounts"), reqwest::Client::new());
        assert_eq!(resolver.smart_account(USER).await.unwrap(), None);
    }
}
