use crate::presenter;

use super::BotContext;

pub async fn execute(ctx: &BotContext, chat_id: i64) -> Result<(), String> {
    ctx.telegram
        .send_message(chat_id, &presenter::help_message())
        .await
        .map_err(|e| e.to_string())
}
