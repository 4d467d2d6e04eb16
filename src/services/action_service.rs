//! State-changing multisig actions
//!
//! Each action validates its input, invokes the contract through the
//! session's wallet with the configured fee caps, waits for on-chain
//! acceptance, then re-fetches the whole listing. The re-read is the
//! source of truth; nothing is patched optimistically.

use thiserror::Error;
use tracing::info;

use crate::chain::felt::{split_u128_pair, Felt};
use crate::chain::selector::entry_point_selector;
use crate::chain::{ChainError, FeePolicy, MultisigApi};
use crate::models::TransactionList;
use crate::utils::{parse_amount_eth, parse_receiver, ValidationError};

use super::session::Session;
use super::transaction_service;

#[derive(Debug, Error)]
pub enum ActionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Submit an ETH transfer for multisig approval.
///
/// The new transaction's nonce is the current transaction count; the
/// wrapped call is an ERC-20 `transfer` on the ETH token contract with
/// calldata `[receiver, amount_low, amount_high]`.
pub async fn submit_transfer(
    session: &Session,
    api: &dyn MultisigApi,
    fee: &FeePolicy,
    eth_token: Felt,
    receiver: &str,
    amount: &str,
) -> Result<TransactionList, ActionError> {
    let receiver = parse_receiver(receiver)?;
    let amount = parse_amount_eth(amount)?;
    let (low, high) = split_u128_pair(amount);

    let nonce = api.get_transactions_len().await?;
    let tx_hash = session
        .wallet()
        .submit_transaction(
            eth_token,
            entry_point_selector("transfer"),
            vec![receiver, low, high],
            nonce,
            fee,
        )
        .await?;
    session.wallet().wait_for_acceptance(tx_hash).await?;
    info!("transaction #{} submitted", nonce);

    Ok(transaction_service::list_transactions(api).await?)
}

/// Confirm a pending transaction.
pub async fn confirm(
    session: &Session,
    api: &dyn MultisigApi,
    fee: &FeePolicy,
    id: u64,
) -> Result<TransactionList, ActionError> {
    let tx_hash = session.wallet().confirm_transaction(id, fee).await?;
    session.wallet().wait_for_acceptance(tx_hash).await?;
    info!("transaction #{} confirmed", id);
    Ok(transaction_service::list_transactions(api).await?)
}

/// Revoke a previously given confirmation.
pub async fn revoke(
    session: &Session,
    api: &dyn MultisigApi,
    fee: &FeePolicy,
    id: u64,
) -> Result<TransactionList, ActionError> {
    let tx_hash = session.wallet().revoke_confirmation(id, fee).await?;
    session.wallet().wait_for_acceptance(tx_hash).await?;
    info!("confirmation for transaction #{} revoked", id);
    Ok(transaction_service::list_transactions(api).await?)
}

/// Execute a transaction that has reached the threshold.
pub async fn execute(
    session: &Session,
    api: &dyn MultisigApi,
    fee: &FeePolicy,
    id: u64,
) -> Result<TransactionList, ActionError> {
    let tx_hash = session.wallet().execute_transaction(id, fee).await?;
    session.wallet().wait_for_acceptance(tx_hash).await?;
    info!("transaction #{} executed", id);
    Ok(transaction_service::list_transactions(api).await?)
}
