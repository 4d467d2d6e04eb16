use crate::chain::felt::to_hex64;
use crate::presenter;

use super::BotContext;

pub async fn execute(ctx: &BotContext, chat_id: i64) -> Result<(), String> {
    let text = presenter::start_message(&to_hex64(ctx.contract_address));
    ctx.telegram
        .send_message(chat_id, &text)
        .await
        .map_err(|e| e.to_string())
}
