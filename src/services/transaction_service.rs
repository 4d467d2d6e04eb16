//! Transaction read services
//!
//! Assembles full views from individual contract reads. Per-index reads
//! carry no ordering dependency, so they run with bounded fan-out;
//! `buffered` reassembles results in index order before decoding. Any
//! failed read aborts the whole listing, no partial results.

use futures::stream::{self, StreamExt, TryStreamExt};

use crate::chain::{decode_transaction, ChainError, MultisigApi};
use crate::models::{
    SignerConfirmation, Transaction, TransactionDetail, TransactionList, TransactionStats,
};

/// Cap on concurrent reads against the RPC endpoint.
const MAX_CONCURRENT_READS: usize = 8;

/// Fetch and decode every transaction, in index order.
pub async fn list_transactions(api: &dyn MultisigApi) -> Result<TransactionList, ChainError> {
    let total = api.get_transactions_len().await?;
    let threshold = api.get_threshold().await?;
    let signers = api.get_signers().await?;
    let signers = &signers;

    let transactions: Vec<Transaction> = stream::iter(0..total)
        .map(|id| async move {
            let record = api.get_transaction(id).await?;
            let executed = api.is_executed(id).await?;
            Ok::<_, ChainError>(decode_transaction(id, &record, executed, threshold, signers))
        })
        .buffered(MAX_CONCURRENT_READS)
        .try_collect()
        .await?;

    Ok(TransactionList {
        total,
        threshold,
        transactions,
    })
}

/// Count executed and pending transactions.
pub async fn transaction_stats(api: &dyn MultisigApi) -> Result<TransactionStats, ChainError> {
    let total = api.get_transactions_len().await?;
    let flags: Vec<u64> = stream::iter(0..total)
        .map(|id| api.is_executed(id))
        .buffered(MAX_CONCURRENT_READS)
        .try_collect()
        .await?;

    let executed = flags.iter().filter(|flag| **flag == 1).count() as u64;
    Ok(TransactionStats {
        total,
        executed,
        pending: total - executed,
    })
}

/// Fetch one transaction with its per-signer confirmation breakdown.
pub async fn transaction_detail(
    api: &dyn MultisigApi,
    id: u64,
) -> Result<TransactionDetail, ChainError> {
    let total = api.get_transactions_len().await?;
    if id >= total {
        return Err(ChainError::UnknownTransaction(id));
    }

    let record = api.get_transaction(id).await?;
    let executed = api.is_executed(id).await?;
    let threshold = api.get_threshold().await?;
    let signers = api.get_signers().await?;

    let confirmed_by: Vec<SignerConfirmation> = stream::iter(signers.iter().copied())
        .map(|signer| async move {
            let confirmed = api.is_confirmed(id, signer).await?;
            Ok::<_, ChainError>(SignerConfirmation {
                signer: crate::chain::felt::to_hex64(signer),
                confirmed,
            })
        })
        .buffered(MAX_CONCURRENT_READS)
        .try_collect()
        .await?;

    let transaction = decode_transaction(id, &record, executed, threshold, &signers);
    Ok(TransactionDetail {
        transaction,
        confirmed_by,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::testing::FakeMultisig;
    use crate::chain::TransactionRecord;
    use crate::models::TxStatus;
    use primitive_types::U256;
    use std::sync::atomic::Ordering;

    fn one_eth() -> U256 {
        U256::from(10u64).pow(U256::from(18u64))
    }

    fn transfer_record(to: u64, receiver: u64, confirmations: u64) -> TransactionRecord {
        TransactionRecord {
            to: U256::from(to),
            function_selector: U256::from(0x1u64),
            confirmations,
            calldata: vec![U256::from(receiver), one_eth(), U256::zero()],
        }
    }

    fn fake_with_records(count: u64) -> FakeMultisig {
        FakeMultisig {
            signers: vec![U256::from(0x11), U256::from(0x22)],
            threshold: 2,
            records: (0..count).map(|i| transfer_record(0xaaa, 0xb00 + i, 1)).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_list_preserves_index_order() {
        let fake = fake_with_records(20);
        let list = list_transactions(&fake).await.unwrap();
        assert_eq!(list.total, 20);
        assert_eq!(list.threshold, 2);
        assert_eq!(list.transactions.len(), 20);
        for (i, tx) in list.transactions.iter().enumerate() {
            assert_eq!(tx.id, i as u64);
            assert!(tx.receiver.ends_with(&format!("{:x}", 0xb00 + i)));
        }
    }

    #[tokio::test]
    async fn test_list_embeds_current_globals() {
        let fake = fake_with_records(1);
        let list = list_transactions(&fake).await.unwrap();
        let tx = &list.transactions[0];
        assert_eq!(tx.required_confirmations, 2);
        assert_eq!(tx.signers.len(), 2);
        // Threshold fetched once for the whole listing, not per transaction.
        assert_eq!(fake.threshold_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_contract_lists_nothing() {
        let fake = fake_with_records(0);
        let list = list_transactions(&fake).await.unwrap();
        assert_eq!(list.total, 0);
        assert!(list.transactions.is_empty());
    }

    #[tokio::test]
    async fn test_read_failure_aborts_listing() {
        let fake = FakeMultisig {
            fail_reads: true,
            ..fake_with_records(3)
        };
        assert!(matches!(
            list_transactions(&fake).await,
            Err(ChainError::Rpc(_))
        ));
    }

    #[tokio::test]
    async fn test_stats_counts_executed_and_pending() {
        let fake = FakeMultisig {
            executed: vec![0, 2],
            ..fake_with_records(5)
        };
        let stats = transaction_stats(&fake).await.unwrap();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.executed, 2);
        assert_eq!(stats.pending, 3);
    }

    #[tokio::test]
    async fn test_detail_includes_per_signer_flags() {
        let fake = FakeMultisig {
            executed: vec![0],
            confirmed: vec![(0, U256::from(0x11))],
            ..fake_with_records(1)
        };
        let detail = transaction_detail(&fake, 0).await.unwrap();
        assert_eq!(detail.transaction.status, TxStatus::Executed);
        assert_eq!(detail.confirmed_by.len(), 2);
        assert!(detail.confirmed_by[0].confirmed);
        assert!(!detail.confirmed_by[1].confirmed);
    }

    #[tokio::test]
    async fn test_detail_rejects_out_of_range_id() {
        let fake = fake_with_records(2);
        assert!(matches!(
            transaction_detail(&fake, 2).await,
            Err(ChainError::UnknownTransaction(2))
        ));
    }
}
