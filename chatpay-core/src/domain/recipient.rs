use ethers::types::Address;
use serde::{Deserialize, Serialize};

/// Payment recipient, supplied by the chat transport from mention metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipient {
    pub user_id: String,
    pub display_name: Option<String>,
    /// Smart-account address the funds are sent to.
    pub smart_account: Address,
}
