//! Multisig contract interface
//!
//! The whole service talks to the deployed multisig through these two
//! traits, which expose exactly the contract's ABI. This keeps the
//! decoder, services and dispatcher independent of any particular chain
//! SDK and testable against fakes.

use async_trait::async_trait;

use super::error::ChainError;
use super::felt::{felt_to_u64, Felt};

/// Fee caps attached to every state-changing call.
///
/// These come from configuration, not from live network conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePolicy {
    /// Maximum gas quantity the call may consume.
    pub max_gas_amount: u64,
    /// Maximum price per gas unit, in the chain's native fee unit (fri).
    pub max_gas_price: u128,
}

/// One transaction record as stored on chain: a fixed header plus the
/// variable-length calldata array of the wrapped call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Target contract of the wrapped call.
    pub to: Felt,
    /// Entry-point selector of the wrapped call.
    pub function_selector: Felt,
    /// Confirmation count at fetch time.
    pub confirmations: u64,
    /// Positional arguments of the wrapped call.
    pub calldata: Vec<Felt>,
}

impl TransactionRecord {
    /// Parse the raw `get_transaction` response.
    ///
    /// Wire layout: `[to, function_selector, confirmations, calldata_len,
    /// calldata...]`. A response that is too short or whose length prefix
    /// disagrees with the payload is a decode error.
    pub fn from_felts(felts: &[Felt]) -> Result<Self, ChainError> {
        if felts.len() < 4 {
            return Err(ChainError::Decode(format!(
                "transaction record has {} field(s), expected at least 4",
                felts.len()
            )));
        }
        let calldata_len = felt_to_u64(felts[3])? as usize;
        let calldata = &felts[4..];
        if calldata.len() != calldata_len {
            return Err(ChainError::Decode(format!(
                "calldata length prefix says {} but {} element(s) follow",
                calldata_len,
                calldata.len()
            )));
        }
        Ok(Self {
            to: felts[0],
            function_selector: felts[1],
            confirmations: felt_to_u64(felts[2])?,
            calldata: calldata.to_vec(),
        })
    }
}

/// Read side of the multisig ABI.
#[async_trait]
pub trait MultisigApi: Send + Sync {
    /// `get_signers() -> address[]`
    async fn get_signers(&self) -> Result<Vec<Felt>, ChainError>;
    /// `get_transactions_len() -> int`
    async fn get_transactions_len(&self) -> Result<u64, ChainError>;
    /// `get_threshold() -> int`
    async fn get_threshold(&self) -> Result<u64, ChainError>;
    /// `get_transaction(id) -> TransactionRecord`
    async fn get_transaction(&self, id: u64) -> Result<TransactionRecord, ChainError>;
    /// `is_executed(id) -> 0|1`, returned raw so the decoder owns the
    /// flag-to-status mapping.
    async fn is_executed(&self, id: u64) -> Result<u64, ChainError>;
    /// `is_confirmed(id, signer) -> 0|1`
    async fn is_confirmed(&self, id: u64, signer: Felt) -> Result<bool, ChainError>;
}

/// Write side of the multisig ABI. Implementations carry a signing
/// identity (the connected wallet); this crate ships none of its own
/// since key management stays with the wallet.
#[async_trait]
pub trait MultisigWallet: Send + Sync {
    /// `submit_transaction(to, selector, calldata, nonce)`; returns the
    /// invoke transaction hash.
    async fn submit_transaction(
        &self,
        to: Felt,
        function_selector: Felt,
        calldata: Vec<Felt>,
        nonce: u64,
        fee: &FeePolicy,
    ) -> Result<Felt, ChainError>;
    /// `confirm_transaction(nonce)`
    async fn confirm_transaction(&self, nonce: u64, fee: &FeePolicy) -> Result<Felt, ChainError>;
    /// `revoke_confirmation(nonce)`
    async fn revoke_confirmation(&self, nonce: u64, fee: &FeePolicy) -> Result<Felt, ChainError>;
    /// `execute_transaction(nonce)`
    async fn execute_transaction(&self, nonce: u64, fee: &FeePolicy) -> Result<Felt, ChainError>;
    /// Block until the given invoke transaction is accepted on chain.
    async fn wait_for_acceptance(&self, tx_hash: Felt) -> Result<(), ChainError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use primitive_types::U256;

    #[test]
    fn test_record_parses_header_and_calldata() {
        let felts = vec![
            U256::from(0xaaa),
            U256::from(0x1),
            U256::from(2u64),
            U256::from(3u64),
            U256::from(0xbbb),
            U256::from(100u64),
            U256::from(0u64),
        ];
        let record = TransactionRecord::from_felts(&felts).unwrap();
        assert_eq!(record.to, U256::from(0xaaa));
        assert_eq!(record.confirmations, 2);
        assert_eq!(record.calldata.len(), 3);
        assert_eq!(record.calldata[0], U256::from(0xbbb));
    }

    #[test]
    fn test_record_accepts_empty_calldata() {
        let felts = vec![
            U256::from(0xaaa),
            U256::from(0x1),
            U256::from(1u64),
            U256::zero(),
        ];
        let record = TransactionRecord::from_felts(&felts).unwrap();
        assert!(record.calldata.is_empty());
    }

    #[test]
    fn test_record_rejects_short_response() {
        let felts = vec![U256::from(0xaaa), U256::from(0x1)];
        assert!(matches!(
            TransactionRecord::from_felts(&felts),
            Err(ChainError::Decode(_))
        ));
    }

    #[test]
    fn test_record_rejects_length_mismatch() {
        let felts = vec![
            U256::from(0xaaa),
            U256::from(0x1),
            U256::from(1u64),
            U256::from(5u64),
            U256::from(0xbbb),
        ];
        assert!(matches!(
            TransactionRecord::from_felts(&felts),
            Err(ChainError::Decode(_))
        ));
    }
}
