use serde::Deserialize;
use serde::Serialize;

const ZERO: &str = "0.00";

/// Token holdings shown in the balance card, as display strings.
///
/// Nothing fetches balances yet, so these stay at their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    pub token_a: String,
    pub token_b: String,
    pub staked: String,
}

impl Default for BalanceSnapshot {
    fn default() -> Self {
        Self {
            token_a: ZERO.to_string(),
            token_b: ZERO.to_string(),
            staked: ZERO.to_string(),
        }
    }
}
