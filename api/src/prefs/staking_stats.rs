use serde::Deserialize;
use serde::Serialize;

const DEFAULT_APR: &str = "10%";
const DEFAULT_TVL: &str = "1,234,567 TOKENA";
const DEFAULT_REWARDS: &str = "25.5 TOKENB";

/// The figures shown in the three stat cards.
///
/// These are display strings only. Nothing queries a staking contract.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct StakingStats {
    pub apr: String,
    pub total_value_locked: String,
    pub rewards: String,
}

impl StakingStats {
    /// Reads the stats baked in at build time.
    ///
    /// The browser has no process environment, so these are `option_env!`
    /// lookups resolved by the compiler.
    ///
    /// # Environment Variables
    /// - `STAKING_APR`: e.g. "12.5%"
    /// - `STAKING_TVL`: e.g. "2,000,000 TOKENA"
    /// - `STAKING_REWARDS`: e.g. "0.0 TOKENB"
    pub fn from_env() -> Self {
        Self::from_vars(|key| match key {
            "STAKING_APR" => option_env!("STAKING_APR").map(str::to_string),
            "STAKING_TVL" => option_env!("STAKING_TVL").map(str::to_string),
            "STAKING_REWARDS" => option_env!("STAKING_REWARDS").map(str::to_string),
            _ => None,
        })
    }

    /// Builds stats from `lookup`, falling back to the in-code defaults for
    /// unset or blank values.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            apr: var("STAKING_APR", DEFAULT_APR),
            total_value_locked: var("STAKING_TVL", DEFAULT_TVL),
            rewards: var("STAKING_REWARDS", DEFAULT_REWARDS),
        }
    }
}

impl Default for StakingStats {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let stats = StakingStats::default();
        assert_eq!(stats.apr, "10%");
        assert_eq!(stats.total_value_locked, "1,234,567 TOKENA");
        assert_eq!(stats.rewards, "25.5 TOKENB");
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let stats = StakingStats::from_vars(|key| match key {
            "STAKING_APR" => Some(" 12% ".to_string()),
            "STAKING_TVL" => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(stats.apr, "12%");
        assert_eq!(stats.total_value_locked, "1,234,567 TOKENA");
        assert_eq!(stats.rewards, "25.5 TOKENB");
    }
}
