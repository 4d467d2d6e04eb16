use thiserror::Error;

/// Errors from the chain layer.
///
/// Network failures, node-reported errors, decode failures and input
/// problems are kept distinct so callers can choose their own recovery
/// (the bot renders everything, the JSON API maps them to status codes).
#[derive(Debug, Error)]
pub enum ChainError {
    #[error("RPC request failed: {0}")]
    Rpc(String),
    #[error("node returned error {code}: {message}")]
    Node { code: i64, message: String },
    #[error("malformed contract response: {0}")]
    Decode(String),
    #[error("invalid felt value: {0}")]
    InvalidFelt(String),
    #[error("no transaction with id {0}")]
    UnknownTransaction(u64),
}
