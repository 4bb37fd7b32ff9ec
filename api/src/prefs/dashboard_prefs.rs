use super::staking_stats::StakingStats;
use serde::Deserialize;
use serde::Serialize;

/// Represents all dashboard prefs. Intended for a settings dialog later on.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct DashboardPrefs {
    stats: StakingStats,
}

impl DashboardPrefs {
    pub fn new(stats: StakingStats) -> Self {
        Self { stats }
    }

    pub fn stats(&self) -> &StakingStats {
        &self.stats
    }
}

impl Default for DashboardPrefs {
    fn default() -> Self {
        Self::new(StakingStats::from_env())
    }
}
