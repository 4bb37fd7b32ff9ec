use crate::address::WalletAddress;
use serde::Serialize;

/// The stake amount being typed, and whether the confirm overlay is up.
///
/// `amount` is raw input text. The numeric input widget is the only check
/// applied to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StakeDraft {
    pub amount: String,
    pub confirm_visible: bool,
}

/// What a confirmed stake would submit.
///
/// Staking transactions are not built yet; an intent is only logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StakeIntent {
    pub amount: String,
    pub address: WalletAddress,
}
