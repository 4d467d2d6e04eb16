//! Wallet session
//!
//! A session exists only between a successful wallet connection and the
//! matching disconnect. Disconnecting consumes the session, so no action
//! can run against a stale identity, and sessions are never shared.

use std::sync::Arc;

use tracing::info;

use crate::chain::felt::to_hex64;
use crate::chain::{Felt, MultisigWallet};

/// One connected wallet.
pub struct Session {
    account: Felt,
    wallet: Arc<dyn MultisigWallet>,
}

impl Session {
    /// Create a session for a freshly connected wallet.
    pub fn connect(account: Felt, wallet: Arc<dyn MultisigWallet>) -> Self {
        info!("wallet session opened for {}", to_hex64(account));
        Self { account, wallet }
    }

    pub fn account(&self) -> Felt {
        self.account
    }

    pub fn wallet(&self) -> &dyn MultisigWallet {
        self.wallet.as_ref()
    }

    /// Invalidate the session.
    pub fn disconnect(self) {
        info!("wallet session closed for {}", to_hex64(self.account));
    }
}
