//! Starknet field element helpers
//!
//! Contract values travel as felts (252-bit field elements). We carry them
//! as 256-bit unsigned integers, which is wide enough for any felt and for
//! the recombined u256 amounts the ERC-20 ABI splits into 128-bit halves.

use primitive_types::U256;

use super::error::ChainError;

/// A Starknet field element, carried as a 256-bit unsigned integer.
pub type Felt = U256;

/// Parse a felt from its wire representation.
///
/// Nodes return felts as `0x`-prefixed hex strings; decimal strings are
/// accepted as well since some tooling emits them.
pub fn parse_felt(s: &str) -> Result<Felt, ChainError> {
    let trimmed = s.trim();
    let (digits, radix) = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex_digits) => (hex_digits, 16),
        None => (trimmed, 10),
    };
    if digits.is_empty() {
        return Err(ChainError::InvalidFelt(trimmed.to_string()));
    }
    U256::from_str_radix(digits, radix).map_err(|_| ChainError::InvalidFelt(trimmed.to_string()))
}

/// Render a felt as `0x` + 64 lowercase hex digits, zero-padded.
///
/// This is the canonical address format used everywhere user-facing.
pub fn to_hex64(value: Felt) -> String {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    format!("0x{}", hex::encode(bytes))
}

/// Narrow a felt into a `u64` counter (transaction counts, thresholds,
/// confirmation counts, boolean flags).
pub fn felt_to_u64(value: Felt) -> Result<u64, ChainError> {
    if value.bits() > 64 {
        return Err(ChainError::Decode(format!(
            "value {} does not fit a 64-bit counter",
            value
        )));
    }
    Ok(value.low_u64())
}

/// Split a u256 amount into the (low, high) 128-bit halves the contract
/// ABI expects in calldata.
pub fn split_u128_pair(value: U256) -> (Felt, Felt) {
    let low = value & ((U256::one() << 128) - U256::one());
    let high = value >> 128;
    (low, high)
}
