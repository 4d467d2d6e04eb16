//! Chain access layer: felt handling, the multisig ABI traits, the
//! JSON-RPC read implementation, and the record decoder.

pub mod api;
pub mod decode;
pub mod error;
pub mod felt;
pub mod rpc;
pub mod selector;

#[cfg(test)]
pub mod testing;

pub use api::{FeePolicy, MultisigApi, MultisigWallet, TransactionRecord};
pub use decode::decode_transaction;
pub use error::ChainError;
pub use felt::Felt;
pub use rpc::RpcMultisig;
