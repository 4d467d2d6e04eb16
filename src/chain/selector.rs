//! Starknet entry-point selectors
//!
//! A selector is the Keccak-256 hash of the entry point's ASCII name with
//! the top 6 bits cleared, i.e. `keccak256(name) & (2^250 - 1)`.

use primitive_types::U256;
use sha3::{Digest, Keccak256};

use super::felt::Felt;

/// Compute the entry-point selector for a contract function name.
pub fn entry_point_selector(name: &str) -> Felt {
    let mut hasher = Keccak256::new();
    hasher.update(name.as_bytes());
    let mut digest: [u8; 32] = hasher.finalize().into();
    // Mask to 250 bits so the result is a valid felt.
    digest[0] &= 0x03;
    U256::from_big_endian(&digest)
}
