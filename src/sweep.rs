use alloy_primitives::U256;

/// Gas cost of a simple native-coin transfer.
pub const TRANSFER_GAS_LIMIT: u64 = 21_000;

/// Substitute gas price (wei) for networks that suggest exactly zero.
/// Some dev/test chains report a zero gas price; a zero-fee transaction can
/// be rejected or stuck, so a fixed 1.1 gwei rate is used instead.
pub const FALLBACK_GAS_PRICE: u128 = 110_000 * 10_000;

/// A validated plan to sweep one account's native balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SweepPlan {
    pub gross: U256,
    pub gas_price: u128,
    pub gas_limit: u64,
    pub net: U256,
}

impl SweepPlan {
    /// Computes the net transferable amount for a gross balance.
    ///
    /// Returns `None` when nothing can be swept: a zero balance, or a fee
    /// that meets or exceeds the balance (tiny accounts where the 21000-gas
    /// fee is larger than everything they hold).
    pub fn new(gross: U256, suggested_gas_price: u128) -> Option<SweepPlan> {
        let gas_price = if suggested_gas_price == 0 {
            FALLBACK_GAS_PRICE
        } else {
            suggested_gas_price
        };

        let fee = U256::from(gas_price) * U256::from(TRANSFER_GAS_LIMIT);
        if gross <= fee {
            return None;
        }

        Some(SweepPlan {
            gross,
            gas_price,
            gas_limit: TRANSFER_GAS_LIMIT,
            net: gross - fee,
        })
    }
}
