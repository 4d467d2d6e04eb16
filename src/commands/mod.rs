pub mod get_threshold;
pub mod help;
pub mod list_signers;
pub mod list_txns;
pub mod start;
pub mod tx_info;
pub mod tx_stats;

use std::sync::Arc;

use tracing::{debug, error};

use crate::api::telegram::{TelegramClient, TelegramMessage, TelegramUpdate};
use crate::chain::{Felt, MultisigApi};

/// Everything a command handler needs: the outbound Telegram client and
/// the contract interface.
pub struct BotContext {
    pub telegram: TelegramClient,
    pub multisig: Arc<dyn MultisigApi>,
    pub contract_address: Felt,
}

/// Entry point for one webhook update. Updates without a message are
/// ignored.
pub async fn handle_update(ctx: &BotContext, update: &TelegramUpdate) {
    if let Some(message) = &update.message {
        handle_message(ctx, message).await;
    }
}

/// Dispatch one inbound message to its command handler.
///
/// The command is the first whitespace token of the text. Unrecognized
/// commands, empty text, and `/txInfo` without an argument get no reply.
pub async fn handle_message(ctx: &BotContext, msg: &TelegramMessage) {
    let Some(text) = &msg.text else {
        return;
    };

    let parts: Vec<&str> = text.split_whitespace().collect();
    if parts.is_empty() {
        return;
    }

    let command = parts[0];
    let args = &parts[1..];
    let chat_id = msg.chat.id;
    debug!("dispatching {} for chat {}", command, chat_id);

    let result = match command {
        "/start" => start::execute(ctx, chat_id).await,
        "/help" => help::execute(ctx, chat_id).await,
        "/listTxns" => list_txns::execute(ctx, chat_id).await,
        "/listSigners" => list_signers::execute(ctx, chat_id).await,
        "/getThreshold" => get_threshold::execute(ctx, chat_id).await,
        "/txStats" => tx_stats::execute(ctx, chat_id).await,
        "/txInfo" if !args.is_empty() => tx_info::execute(ctx, chat_id, args[0]).await,
        _ => return,
    };

    if let Err(e) = result {
        error!("failed to handle {}: {}", command, e);
    }
}
