use crate::presenter;
use crate::services::signer_service;

use super::BotContext;

pub async fn execute(ctx: &BotContext, chat_id: i64) -> Result<(), String> {
    let text = match signer_service::signer_overview(ctx.multisig.as_ref()).await {
        Ok(overview) => presenter::signer_list_message(&overview),
        Err(e) => presenter::fetch_error_message("signers", &e),
    };
    ctx.telegram
        .send_message(chat_id, &text)
        .await
        .map_err(|e| e.to_string())
}
