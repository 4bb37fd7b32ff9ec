use crate::address::WalletAddress;

/// The page's connection to the wallet extension.
///
/// Connected exactly when an address is held.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    address: Option<WalletAddress>,
}

impl Session {
    pub fn connected(address: WalletAddress) -> Self {
        Self {
            address: Some(address),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    pub fn address(&self) -> Option<&WalletAddress> {
        self.address.as_ref()
    }

    /// The address, or `""` when disconnected.
    pub fn address_str(&self) -> &str {
        self.address.as_ref().map(|a| a.as_str()).unwrap_or_default()
    }
}
