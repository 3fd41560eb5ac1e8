use crate::error::FormatError;
use alloy_primitives::U256;
use alloy_primitives::utils::format_units;

/// Renders a minor-unit balance as an exact decimal string.
///
/// `format_units` does the division in full precision (no floating point, so
/// balances beyond the 53-bit mantissa of an f64 stay exact); trailing zeros
/// and a dangling decimal point are then trimmed so 1.5 ETH prints as "1.5"
/// rather than "1.500000000000000000".
pub fn format_balance(balance: U256, decimals: u8) -> Result<String, FormatError> {
    let full = format_units(balance, decimals).map_err(|_| FormatError::InvalidBalance {
        balance: balance.to_string(),
        decimals,
    })?;

    let trimmed = if full.contains('.') {
        full.trim_end_matches('0').trim_end_matches('.')
    } else {
        &full
    };

    Ok(trimmed.to_string())
}
