use crate::presenter;
use crate::services::transaction_service;

use super::BotContext;

pub async fn execute(ctx: &BotContext, chat_id: i64) -> Result<(), String> {
    let text = match transaction_service::list_transactions(ctx.multisig.as_ref()).await {
        Ok(list) => presenter::transaction_list_message(&list),
        Err(e) => presenter::fetch_error_message("transactions", &e),
    };
    ctx.telegram
        .send_message(chat_id, &text)
        .await
        .map_err(|e| e.to_string())
}
