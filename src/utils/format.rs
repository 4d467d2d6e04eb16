//! Amount formatting

use primitive_types::U256;

/// Smallest-unit decimals of the ETH token (wei).
const ETH_DECIMALS: u32 = 18;
/// Fractional digits shown to users.
const DISPLAY_DECIMALS: u32 = 4;

/// Render a smallest-unit amount as a human ETH string with exactly four
/// fractional digits, truncating beyond that.
pub fn format_eth(amount: U256) -> String {
    let unit = U256::from(10u64).pow(U256::from(ETH_DECIMALS));
    let frac_unit = U256::from(10u64).pow(U256::from(ETH_DECIMALS - DISPLAY_DECIMALS));
    let whole = amount / unit;
    let frac = (amount % unit) / frac_unit;
    format!("{}.{:04}", whole, frac.low_u64())
}
