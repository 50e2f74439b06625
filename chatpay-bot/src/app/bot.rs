//! Message-handling orchestration.
//!
//! Every inbound event is handled independently; the only shared mutable
//! state anywhere below this point is the token registry cache. Failures
//! from the interpreter come back as chat text, never as faults.

use std::sync::Arc;

use ethers::types::Address;

use chatpay_core::{
    should_handle_payment, PaymentInteractionBuilder, PaymentRequestInput, Recipient,
    TriggerContext,
};

use crate::app::identity::IdentityResolver;
use crate::app::transport::{BotAction, Mention, MessageEvent, ReactionEvent, SlashCommand};

const MENTION_RECIPIENT_HINT: &str =
    "To send funds, mention a recipient (e.g. `send 0.0001 ETH to @Cris`).";
const UNRESOLVED_ACCOUNT_TEXT: &str = "I could not resolve that user's smart account on Base.";

pub struct PaymentBot {
    builder: PaymentInteractionBuilder,
    identity: Arc<dyn IdentityResolver>,
    trigger_keyword: String,
    bot_user_id: Option<Address>,
}

impl PaymentBot {
    pub fn new(
        builder: PaymentInteractionBuilder,
        identity: Arc<dyn IdentityResolver>,
        trigger_keyword: String,
        bot_user_id: Option<Address>,
    ) -> Self {
        Self {
            builder,
            identity,
            trigger_keyword,
            bot_user_id,
        }
    }

    pub async fn handle_message(&self, event: &MessageEvent) -> Vec<BotAction> {
        let ctx = TriggerContext {
            is_direct: event.is_direct,
            is_mentioned: event.is_mentioned,
            message: &event.message,
        };
        if !should_handle_payment(&ctx, &self.trigger_keyword) {
            return Vec::new();
        }

        // The recipient comes from mention metadata, never from the text.
        // In channels the bot is often mentioned alongside the recipient;
        // skip it.
        let Some(mention) = self.recipient_mention(event) else {
            return vec![self.reply(event, MENTION_RECIPIENT_HINT.to_string())];
        };

        let smart_account = match self.identity.smart_account(&mention.user_id).await {
            Ok(Some(address)) => address,
            Ok(None) => {
                return vec![self.reply(event, UNRESOLVED_ACCOUNT_TEXT.to_string())];
            }
            Err(e) => {
                log::warn!("identity lookup failed for {}: {e}", mention.user_id);
                return vec![self.reply(event, UNRESOLVED_ACCOUNT_TEXT.to_string())];
            }
        };

        let recipient = Recipient {
            user_id: mention.user_id.clone(),
            display_name: mention.display_name.clone(),
            smart_account,
        };
        let input = PaymentRequestInput {
            message: &event.message,
            sender_user_id: &event.user_id,
            event_id: &event.event_id,
            recipient,
        };

        match self.builder.build(input).await {
            Ok(request) => vec![BotAction::SendInteraction {
                channel_id: event.channel_id.clone(),
                signer_user_id: event.user_id.clone(),
                request,
            }],
            Err(e) => vec![self.reply(event, e.to_string())],
        }
    }

    pub fn handle_reaction(&self, event: &ReactionEvent) -> Option<BotAction> {
        (event.reaction == "👋").then(|| BotAction::SendMessage {
            channel_id: event.channel_id.clone(),
            text: "I saw your wave! 👋".to_string(),
        })
    }

    pub fn handle_command(&self, command: &SlashCommand) -> Option<BotAction> {
        let text = match command.command.as_str() {
            "help" => concat!(
                "**Available Commands:**\n\n",
                "• `/help` - Show this help message\n",
                "• `/time` - Get the current time\n\n",
                "**Message Triggers:**\n\n",
                "• `send 0.0001 ETH to @Cris` - Propose a payment\n",
                "• `pay 5 USDC to @Cris` - Tokens work too\n",
                "• React with 👋 - I'll wave back\n",
            )
            .to_string(),
            "time" => format!("Current time: {} ⏰", chrono::Utc::now().to_rfc2822()),
            _ => return None,
        };

        Some(BotAction::SendMessage {
            channel_id: command.channel_id.clone(),
            text,
        })
    }

    /// First mention with a syntactically valid address that is not the
    /// bot itself.
    fn recipient_mention<'a>(&self, event: &'a MessageEvent) -> Option<&'a Mention> {
        event.mentions.iter().find(|mention| {
            let Ok(address) = mention.user_id.parse::<Address>() else {
                return false;
            };
            self.bot_user_id != Some(address)
        })
    }

    fn reply(&self, event: &MessageEvent, text: String) -> BotAction {
        BotAction::SendMessage {
            channel_id: event.channel_id.clone(),
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{direct_message, make_bot, mention_of, BOT_ID, CRIS, CRIS_ACCOUNT};

    #[tokio::test]
    async fn untriggered_channel_messages_are_ignored() {
        let bot = make_bot();
        let mut event = direct_message("send 1 ETH to @Cris");
        event.is_direct = false;

        assert!(bot.handle_message(&event).await.is_empty());
    }

    #[tokio::test]
    async fn keyword_triggers_payment_handling_in_channels() {
        let bot = make_bot();
        let mut event = direct_message("speedrun send 1 ETH to @Cris");
        event.is_direct = false;
        event.mentions = vec![mention_of(CRIS, Some("Cris"))];

        let actions = bot.handle_message(&event).await;
        assert!(matches!(
            actions.as_slice(),
            [BotAction::SendInteraction { .. }]
        ));
    }

    #[tokio::test]
    async fn missing_recipient_mention_yields_guidance() {
        let bot = make_bot();
        let event = direct_message("send 1 ETH to @Cris");

        let actions = bot.handle_message(&event).await;
        let [BotAction::SendMessage { text, .. }] = actions.as_slice() else {
            panic!("expected a single message action");
        };
        assert!(text.contains("mention a recipient"));
    }

    #[tokio::test]
    async fn the_bot_itself_is_never_the_recipient() {
        let bot = make_bot();
        let mut event = direct_message("send 1 ETH to @Cris");
        event.mentions = vec![mention_of(BOT_ID, None), mention_of(CRIS, Some("Cris"))];

        let actions = bot.handle_message(&event).await;
        let [BotAction::SendInteraction { request, .. }] = actions.as_slice() else {
            panic!("expected an interaction action");
        };
        assert_eq!(request.title, "Send 1 ETH to Cris");
        assert_eq!(
            request.content.to,
            CRIS_ACCOUNT.parse::<ethers::types::Address>().unwrap()
        );
    }

    #[tokio::test]
    async fn unresolvable_identity_yields_a_diagnostic() {
        let bot = make_bot();
        let mut event = direct_message("send 1 ETH to @Someone");
        event.mentions = vec![mention_of(
            "0x9999999999999999999999999999999999999999",
            Some("Someone"),
        )];

        let actions = bot.handle_message(&event).await;
        let [BotAction::SendMessage { text, .. }] = actions.as_slice() else {
            panic!("expected a single message action");
        };
        assert!(text.contains("smart account"));
    }

    #[tokio::test]
    async fn interpreter_failures_come_back_as_chat_text() {
        let bot = make_bot();
        let mut event = direct_message("send 10 TOWNS to @Cris");
        event.mentions = vec![mention_of(CRIS, Some("Cris"))];

        let actions = bot.handle_message(&event).await;
        let [BotAction::SendMessage { text, .. }] = actions.as_slice() else {
            panic!("expected a single message action");
        };
        assert!(text.contains("`TOWNS`"));
    }

    #[tokio::test]
    async fn successful_payment_is_signed_by_the_sender() {
        let bot = make_bot();
        let mut event = direct_message("pay 5 USDC to @Cris");
        event.mentions = vec![mention_of(CRIS, Some("Cris"))];

        let actions = bot.handle_message(&event).await;
        let [BotAction::SendInteraction {
            signer_user_id,
            request,
            ..
        }] = actions.as_slice()
        else {
            panic!("expected an interaction action");
        };
        assert_eq!(signer_user_id, &event.user_id);
        assert_eq!(request.content.value, "0");
        assert!(request.content.data.starts_with("0xa9059cbb"));
    }

    #[test]
    fn wave_reactions_get_a_wave_back() {
        let bot = make_bot();
        let action = bot.handle_reaction(&ReactionEvent {
            channel_id: "chan-1".to_string(),
            reaction: "👋".to_string(),
        });
        assert!(matches!(action, Some(BotAction::SendMessage { .. })));

        let none = bot.handle_reaction(&ReactionEvent {
            channel_id: "chan-1".to_string(),
            reaction: "🎉".to_string(),
        });
        assert!(none.is_none());
    }

    #[test]
    fn help_and_time_commands_respond_and_others_do_not() {
        let bot = make_bot();
        let help = bot.handle_command(&SlashCommand {
            channel_id: "chan-1".to_string(),
            command: "help".to_string(),
        });
        let Some(BotAction::SendMessage { text, .. }) = help else {
            panic!("expected a help message");
        };
        assert!(text.contains("/time"));

        assert!(bot
            .handle_command(&SlashCommand {
                channel_id: "chan-1".to_string(),
                command: "time".to_string(),
            })
            .is_some());
        assert!(bot
            .handle_command(&SlashCommand {
                channel_id: "chan-1".to_string(),
                command: "balance".to_string(),
            })
            .is_none());
    }
}
