pub mod balance;
pub mod stake;
pub mod stats;
