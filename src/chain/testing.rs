//! Fake contract implementations for tests.

use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use primitive_types::U256;

use super::api::{FeePolicy, MultisigApi, MultisigWallet, TransactionRecord};
use super::error::ChainError;
use super::felt::Felt;

/// In-memory multisig state implementing the read ABI.
#[derive(Default)]
pub struct FakeMultisig {
    pub signers: Vec<Felt>,
    pub threshold: u64,
    pub records: Vec<TransactionRecord>,
    pub executed: Vec<u64>,
    /// (id, signer) pairs that count as confirmed.
    pub confirmed: Vec<(u64, Felt)>,
    /// When set, every read fails with an RPC error.
    pub fail_reads: bool,
    pub threshold_calls: AtomicU64,
    pub record_calls: AtomicU64,
}

impl FakeMultisig {
    fn check(&self) -> Result<(), ChainError> {
        if self.fail_reads {
            return Err(ChainError::Rpc("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl MultisigApi for FakeMultisig {
    async fn get_signers(&self) -> Result<Vec<Felt>, ChainError> {
        self.check()?;
        Ok(self.signers.clone())
    }

    async fn get_transactions_len(&self) -> Result<u64, ChainError> {
        self.check()?;
        Ok(self.records.len() as u64)
    }

    async fn get_threshold(&self) -> Result<u64, ChainError> {
        self.check()?;
        self.threshold_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.threshold)
    }

    async fn get_transaction(&self, id: u64) -> Result<TransactionRecord, ChainError> {
        self.check()?;
        self.record_calls.fetch_add(1, Ordering::SeqCst);
        self.records
            .get(id as usize)
            .cloned()
            .ok_or(ChainError::UnknownTransaction(id))
    }

    async fn is_executed(&self, id: u64) -> Result<u64, ChainError> {
        self.check()?;
        Ok(u64::from(self.executed.contains(&id)))
    }

    async fn is_confirmed(&self, id: u64, signer: Felt) -> Result<bool, ChainError> {
        self.check()?;
        Ok(self.confirmed.contains(&(id, signer)))
    }
}

/// One recorded write call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletCall {
    Submit {
        to: Felt,
        function_selector: Felt,
        calldata: Vec<Felt>,
        nonce: u64,
        fee: FeePolicy,
    },
    Confirm { nonce: u64, fee: FeePolicy },
    Revoke { nonce: u64, fee: FeePolicy },
    Execute { nonce: u64, fee: FeePolicy },
}

/// Wallet fake that records every invocation and acceptance wait.
#[derive(Default)]
pub struct FakeWallet {
    pub calls: Mutex<Vec<WalletCall>>,
    pub awaited: Mutex<HashSet<Felt>>,
}

impl FakeWallet {
    fn push(&self, call: WalletCall) -> Felt {
        let mut calls = self.calls.lock().unwrap();
        calls.push(call);
        // Distinct hash per call so acceptance waits can be matched up.
        U256::from(0xf00d) + U256::from(calls.len())
    }
}

#[async_trait]
impl MultisigWallet for FakeWallet {
    async fn submit_transaction(
        &self,
        to: Felt,
        function_selector: Felt,
        calldata: Vec<Felt>,
        nonce: u64,
        fee: &FeePolicy,
    ) -> Result<Felt, ChainError> {
        Ok(self.push(WalletCall::Submit {
            to,
            function_selector,
            calldata,
            nonce,
            fee: *fee,
        }))
    }

    async fn confirm_transaction(&self, nonce: u64, fee: &FeePolicy) -> Result<Felt, ChainError> {
        Ok(self.push(WalletCall::Confirm { nonce, fee: *fee }))
    }

    async fn revoke_confirmation(&self, nonce: u64, fee: &FeePolicy) -> Result<Felt, ChainError> {
        Ok(self.push(WalletCall::Revoke { nonce, fee: *fee }))
    }

    async fn execute_transaction(&self, nonce: u64, fee: &FeePolicy) -> Result<Felt, ChainError> {
        Ok(self.push(WalletCall::Execute { nonce, fee: *fee }))
    }

    async fn wait_for_acceptance(&self, tx_hash: Felt) -> Result<(), ChainError> {
        self.awaited.lock().unwrap().insert(tx_hash);
        Ok(())
    }
}
