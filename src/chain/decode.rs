//! Transaction record decoding
//!
//! Turns one raw on-chain record into the normalized view the presenter
//! and the mini-app render. Pure: no I/O, deterministic for a given
//! input.

use primitive_types::U256;

use crate::models::{Transaction, TxStatus};
use crate::utils::format_eth;

use super::api::TransactionRecord;
use super::felt::{to_hex64, Felt};

/// Decode one transaction record against the current global threshold and
/// signer set.
///
/// The calldata is interpreted positionally as an ERC-20 transfer:
/// `[receiver, amount_low, amount_high]`. Records with fewer than three
/// calldata elements wrap some other call whose layout we do not know, so
/// the receiver falls back to the header's `to` and the amount to zero.
/// Within a transfer-shaped record a zero receiver also falls back to the
/// header.
pub fn decode_transaction(
    id: u64,
    record: &TransactionRecord,
    executed_flag: u64,
    threshold: u64,
    signers: &[Felt],
) -> Transaction {
    let (receiver, amount) = if record.calldata.len() >= 3 {
        let receiver = if record.calldata[0].is_zero() {
            record.to
        } else {
            record.calldata[0]
        };
        let amount = (record.calldata[2] << 128).saturating_add(record.calldata[1]);
        (receiver, amount)
    } else {
        (record.to, U256::zero())
    };

    let status = if executed_flag == 1 {
        TxStatus::Executed
    } else {
        TxStatus::Pending
    };

    Transaction {
        id,
        receiver: to_hex64(receiver),
        amount: format_eth(amount),
        token: "ETH".to_string(),
        confirmations: record.confirmations,
        required_confirmations: threshold,
        signers: signers.iter().map(|s| to_hex64(*s)).collect(),
        status,
    }
}
