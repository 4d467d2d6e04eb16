//! User input validation for the submit-transaction form

use primitive_types::U256;
use thiserror::Error;

use crate::chain::felt::Felt;

const MAX_AMOUNT_DECIMALS: usize = 18;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid receiver address: {0}")]
    Receiver(String),
    #[error("invalid amount: {0}")]
    Amount(String),
}

/// Validate and parse a receiver address.
///
/// Accepts `0x` followed by 63 or 64 hex digits, matching the address
/// format the mini-app form enforces.
pub fn parse_receiver(input: &str) -> Result<Felt, ValidationError> {
    let trimmed = input.trim();
    let Some(digits) = trimmed.strip_prefix("0x") else {
        return Err(ValidationError::Receiver(trimmed.to_string()));
    };
    if !(63..=64).contains(&digits.len()) || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::Receiver(trimmed.to_string()));
    }
    U256::from_str_radix(digits, 16).map_err(|_| ValidationError::Receiver(trimmed.to_string()))
}

/// Validate and parse a human ETH amount into smallest units (wei).
///
/// Accepts a positive decimal with at most 18 fractional digits.
pub fn parse_amount_eth(input: &str) -> Result<U256, ValidationError> {
    let trimmed = input.trim();
    let (whole, frac) = match trimmed.split_once('.') {
        Some((w, f)) => (w, f),
        None => (trimmed, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(ValidationError::Amount(trimmed.to_string()));
    }
    if frac.len() > MAX_AMOUNT_DECIMALS {
        return Err(ValidationError::Amount(format!(
            "{} (at most {} decimal places)",
            trimmed, MAX_AMOUNT_DECIMALS
        )));
    }
    let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(whole) || !all_digits(frac) {
        return Err(ValidationError::Amount(trimmed.to_string()));
    }

    let whole_part = if whole.is_empty() {
        U256::zero()
    } else {
        U256::from_dec_str(whole).map_err(|_| ValidationError::Amount(trimmed.to_string()))?
    };
    let frac_part = if frac.is_empty() {
        U256::zero()
    } else {
        let scaled = format!("{}{}", frac, "0".repeat(MAX_AMOUNT_DECIMALS - frac.len()));
        U256::from_dec_str(&scaled).map_err(|_| ValidationError::Amount(trimmed.to_string()))?
    };

    let unit = U256::from(10u64).pow(U256::from(MAX_AMOUNT_DECIMALS as u64));
    let amount = whole_part
        .checked_mul(unit)
        .and_then(|w| w.checked_add(frac_part))
        .ok_or_else(|| ValidationError::Amount(trimmed.to_string()))?;
    if amount.is_zero() {
        return Err(ValidationError::Amount("amount must be positive".to_string()));
    }
    Ok(amount)
}
