//! Inbound-message gate.
//!
//! Direct and group-direct contexts always route into payment handling.
//! Shared channels only do when the bot is explicitly addressed or the
//! configured keyword appears, so busy channels stay quiet.

/// Context the chat transport knows about an inbound message.
#[derive(Debug, Clone, Copy)]
pub struct TriggerContext<'a> {
    pub is_direct: bool,
    pub is_mentioned: bool,
    pub message: &'a str,
}

/// Whether the message should enter payment handling at all.
pub fn should_handle_payment(ctx: &TriggerContext<'_>, keyword: &str) -> bool {
    if ctx.is_direct {
        return true;
    }
    if ctx.is_mentioned {
        return true;
    }

    let keyword = keyword.trim().to_lowercase();
    !keyword.is_empty() && ctx.message.to_lowercase().contains(&keyword)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel(message: &str) -> TriggerContext<'_> {
        TriggerContext {
            is_direct: false,
            is_mentioned: false,
            message,
        }
    }

    #[test]
    fn direct_context_always_passes() {
        let ctx = TriggerContext {
            is_direct: true,
            is_mentioned: false,
            message: "completely unrelated",
        };
        assert!(should_handle_payment(&ctx, "speedrun"));
    }

    #[test]
    fn mention_passes_in_a_channel() {
        let ctx = TriggerContext {
            is_direct: false,
            is_mentioned: true,
            message: "send 1 ETH to @Cris",
        };
        assert!(should_handle_payment(&ctx, "speedrun"));
    }

    #[test]
    fn keyword_is_a_case_insensitive_substring_match() {
        assert!(should_handle_payment(
            &channel("hey SPEEDRUN send 1 ETH to @Cris"),
            "speedrun"
        ));
        assert!(should_handle_payment(
            &channel("speedrunners unite"),
            "Speedrun"
        ));
        assert!(!should_handle_payment(
            &channel("send 1 ETH to @Cris"),
            "speedrun"
        ));
    }

    #[test]
    fn blank_keyword_never_fires_in_a_channel() {
        assert!(!should_handle_payment(&channel("anything at all"), ""));
        assert!(!should_handle_payment(&channel("anything at all"), "   "));
    }
}
