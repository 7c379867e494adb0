//! Bonus balance lookup

use super::{KNOWN_COUNTERPARTY_ID, KNOWN_RETAIL_STORE_ID};

/// Source of agent bonus balances.
///
/// Implementations never fail: an unknown store/counterparty pair has a
/// balance of zero, not a "not found" outcome.
pub trait BalanceSource: Send + Sync {
    /// Returns the bonus balance of `counterparty_id` at `retail_store_id`.
    fn agent_bonus_balance(&self, retail_store_id: &str, counterparty_id: &str) -> i64;
}

/// Balance for the known counterparty at the known store.
pub const KNOWN_STORE_BALANCE: i64 = 1500;

/// Balance for the known counterparty at any other store.
pub const OTHER_STORE_BALANCE: i64 = 50;

/// Fixed balance table keyed on the two known identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedBalanceTable;

impl BalanceSource for FixedBalanceTable {
    fn agent_bonus_balance(&self, retail_store_id: &str, counterparty_id: &str) -> i64 {
        if counterparty_id != KNOWN_COUNTERPARTY_ID {
            return 0;
        }
        if retail_store_id == KNOWN_RETAIL_STORE_ID {
            KNOWN_STORE_BALANCE
        } else {
            OTHER_STORE_BALANCE
        }
    }
}
