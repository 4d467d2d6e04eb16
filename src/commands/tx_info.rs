use crate::presenter;
use crate::services::transaction_service;

use super::BotContext;

pub async fn execute(ctx: &BotContext, chat_id: i64, id_arg: &str) -> Result<(), String> {
    let text = match id_arg.parse::<u64>() {
        Ok(id) => match transaction_service::transaction_detail(ctx.multisig.as_ref(), id).await {
            Ok(detail) => presenter::transaction_info_message(&detail),
            Err(e) => presenter::fetch_error_message("transaction info", &e),
        },
        Err(_) => format!("❌ Invalid transaction id: {}", id_arg),
    };
    ctx.telegram
        .send_message(chat_id, &text)
        .await
        .map_err(|e| e.to_string())
}
