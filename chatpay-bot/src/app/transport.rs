//! Chat-transport boundary types.
//!
//! The transport delivers events as JSON over the webhook endpoints and
//! carries replies back as `BotAction`s. Everything here is a wire shape;
//! behavior lives in `app::bot`.

use serde::{Deserialize, Serialize};

use chatpay_core::InteractionRequest;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mention {
    pub user_id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageEvent {
    pub channel_id: String,
    /// Chat identity of the message author; also the signer of any
    /// interaction request this message produces.
    pub user_id: String,
    pub event_id: String,
    pub message: String,
    #[serde(default)]
    pub is_direct: bool,
    #[serde(default)]
    pub is_mentioned: bool,
    #[serde(default)]
    pub mentions: Vec<Mention>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionEvent {
    pub channel_id: String,
    pub reaction: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlashCommand {
    pub channel_id: String,
    pub command: String,
}

/// Outbound effect for the transport to execute.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BotAction {
    #[serde(rename_all = "camelCase")]
    SendMessage { channel_id: String, text: String },
    #[serde(rename_all = "camelCase")]
    SendInteraction {
        channel_id: String,
        signer_user_id: String,
        request: InteractionRequest,
    },
}
