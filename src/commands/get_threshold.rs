use crate::presenter;

use super::BotContext;

pub async fn execute(ctx: &BotContext, chat_id: i64) -> Result<(), String> {
    let text = match ctx.multisig.get_threshold().await {
        Ok(threshold) => presenter::threshold_message(threshold),
        Err(e) => presenter::fetch_error_message("threshold", &e),
    };
    ctx.telegram
        .send_message(chat_id, &text)
        .await
        .map_err(|e| e.to_string())
}
