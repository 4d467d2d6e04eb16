//! Bot presenter
//!
//! Pure formatting of already-decoded data into Telegram Markdown. No
//! chain access and no decoding rules live here.

use crate::models::{
    SignerOverview, Transaction, TransactionDetail, TransactionList, TransactionStats, TxStatus,
};

fn status_label(status: TxStatus) -> &'static str {
    match status {
        TxStatus::Executed => "✅ Executed",
        TxStatus::Pending => "⏳ Pending",
    }
}

pub fn start_message(contract_address: &str) -> String {
    format!(
        "🚀 *Welcome to Argonaut Multisig Bot!*\n\n\
         I'm here to help you monitor your Starknet Argonaut multisig wallet transactions.\n\n\
         */start* - Start a conversation with the bot\n\
         📝 */listTxns* - View all transactions with their status\n\
         👥 */listSigners* - View all current signers\n\
         🔢 */getThreshold* - Check required confirmations\n\
         📊 */txStats* - Get transaction statistics\n\
         🔍 */txInfo* <txId> - Get detailed info about a specific transaction\n\n\
         Your multisig contract is deployed at:\n\
         `{}`\n\n\
         Get started by trying */listTxns* to see your current transactions!",
        contract_address
    )
}

pub fn help_message() -> String {
    "🤖 *Available Commands:*\n\n\
     🚀 */start* - Start a conversation with the bot\n\
     📝 */listTxns* - List all transactions in the multisig wallet\n\
     👥 */listSigners* - View all current signers and their addresses\n\
     🔢 */getThreshold* - Check current threshold for confirmations\n\
     📊 */txStats* - View statistics (pending/executed/total transactions)\n\
     🔍 */txInfo* <txId> - Get detailed information about a specific transaction\n\n\
     Example: /txInfo 1 (to get details about transaction #1)\n\n\
     If you need further assistance, feel free to ask!"
        .to_string()
}

pub fn transaction_list_message(list: &TransactionList) -> String {
    let mut message = String::from("🔐 *Multisig Wallet Transactions*\n\n");
    message.push_str(&format!("📊 *Total Transactions:* {}\n", list.total));
    message.push_str(&format!("✅ *Required Confirmations:* {}\n\n", list.threshold));

    for tx in &list.transactions {
        message.push_str(&format!("🔹 *Transaction #{}*\n", tx.id));
        message.push_str(&format!("To: `{}`\n", tx.receiver));
        message.push_str(&format!("Amount: {} {}\n", tx.amount, tx.token));
        message.push_str(&format!(
            "Confirmations: {}/{}\n",
            tx.confirmations, tx.required_confirmations
        ));
        message.push_str(&format!("Status: {}\n\n", status_label(tx.status)));
    }

    message
}

pub fn signer_list_message(overview: &SignerOverview) -> String {
    let mut message = String::from("👥 *Current Multisig Signers*\n\n");
    message.push_str(&format!(
        "✅ *Required Confirmations:* {}\n\n",
        overview.threshold
    ));
    for (index, signer) in overview.signers.iter().enumerate() {
        message.push_str(&format!("{}. `{}`\n", index + 1, signer));
    }
    message
}

pub fn threshold_message(threshold: u64) -> String {
    format!("🔢 *Required Confirmations:* {}", threshold)
}

pub fn stats_message(stats: &TransactionStats) -> String {
    format!(
        "📊 *Transaction Statistics*\n\n\
         📈 *Total Transactions:* {}\n\
         ✅ *Executed:* {}\n\
         ⏳ *Pending:* {}",
        stats.total, stats.executed, stats.pending
    )
}

pub fn transaction_info_message(detail: &TransactionDetail) -> String {
    let tx: &Transaction = &detail.transaction;
    let mut message = format!("🔍 *Transaction #{} Details*\n\n", tx.id);
    message.push_str(&format!("📍 *To:* `{}`\n", tx.receiver));
    message.push_str(&format!("💰 *Amount:* {} {}\n", tx.amount, tx.token));
    message.push_str(&format!(
        "✋ *Confirmations:* {}/{}\n",
        tx.confirmations, tx.required_confirmations
    ));
    message.push_str(&format!("📌 *Status:* {}\n", status_label(tx.status)));
    for confirmation in &detail.confirmed_by {
        let mark = if confirmation.confirmed { "✅" } else { "▫️" };
        message.push_str(&format!("{} `{}`\n", mark, confirmation.signer));
    }
    message
}

pub fn fetch_error_message(what: &str, error: &dyn std::fmt::Display) -> String {
    format!("❌ Error fetching {}: {}", what, error)
}
