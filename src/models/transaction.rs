//! Transaction view models
//!
//! Read-only projections of chain state, recomputed on every fetch and
//! discarded after rendering. Both the bot presenter and the mini-app
//! JSON API consume these.

use serde::Serialize;

/// Lifecycle of a multisig transaction as observable from the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TxStatus {
    Pending,
    Executed,
}

impl std::fmt::Display for TxStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TxStatus::Pending => write!(f, "pending"),
            TxStatus::Executed => write!(f, "executed"),
        }
    }
}

/// One decoded multisig transaction.
///
/// `signers` and `required_confirmations` are the contract's *current*
/// globals, which may differ from the values in effect when the
/// transaction was submitted. That staleness is inherent to the contract
/// ABI and deliberately preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: u64,
    /// `0x` + 64 lowercase hex digits, zero-padded.
    pub receiver: String,
    /// Human ETH amount with four fractional digits.
    pub amount: String,
    pub token: String,
    pub confirmations: u64,
    pub required_confirmations: u64,
    pub signers: Vec<String>,
    pub status: TxStatus,
}

/// Full transaction listing plus the globals it was decoded against.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionList {
    pub total: u64,
    pub threshold: u64,
    pub transactions: Vec<Transaction>,
}

/// Pending/executed/total counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionStats {
    pub total: u64,
    pub executed: u64,
    pub pending: u64,
}

/// Per-signer confirmation flag for one transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerConfirmation {
    pub signer: String,
    pub confirmed: bool,
}

/// One transaction with its per-signer confirmation breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetail {
    #[serde(flatten)]
    pub transaction: Transaction,
    pub confirmed_by: Vec<SignerConfirmation>,
}

/// Current signer set and threshold.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignerOverview {
    pub threshold: u64,
    pub signers: Vec<String>,
}
