//! Data models shared by the bot presenter and the mini-app JSON API.

pub mod transaction;

pub use transaction::{
    SignerConfirmation, SignerOverview, Transaction, TransactionDetail, TransactionList,
    TransactionStats, TxStatus,
};
