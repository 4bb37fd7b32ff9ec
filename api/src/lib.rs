//! This crate contains the platform-neutral side of the staking dashboard:
//! the state it renders from and its conversations with the wallet extension.

pub mod actions;
pub mod address;
pub mod balance;
pub mod connector;
pub mod dashboard;
pub mod error;
pub mod permission;
pub mod prefs;
pub mod session;
pub mod stake;

pub use address::WalletAddress;
pub use connector::WalletConnector;
pub use dashboard::DashboardState;
pub use error::WalletError;
pub use permission::Permission;

pub type ApiError = WalletError;
