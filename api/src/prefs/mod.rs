pub mod dashboard_prefs;
pub mod staking_stats;
