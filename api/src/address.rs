use crate::error::WalletError;
use serde::Deserialize;
use serde::Serialize;
use std::fmt;

/// An Arweave wallet address as reported by the extension.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WalletAddress(String);

impl WalletAddress {
    pub fn new(address: impl Into<String>) -> Result<Self, WalletError> {
        let address = address.into();
        if address.is_empty() {
            return Err(WalletError::EmptyAddress);
        }
        Ok(Self(address))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First 6 and last 4 characters, e.g. `"abcdef...wxyz"`.
    pub fn abbreviated(&self) -> String {
        let chars: Vec<char> = self.0.chars().collect();
        let head: String = chars.iter().take(6).collect();
        let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
        format!("{head}...{tail}")
    }
}

impl TryFrom<String> for WalletAddress {
    type Error = WalletError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WalletAddress> for String {
    fn from(address: WalletAddress) -> Self {
        address.0
    }
}

impl fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_address_rejected() {
        assert_eq!(WalletAddress::new(""), Err(WalletError::EmptyAddress));
    }

    #[test]
    fn test_abbreviated() {
        let addr = WalletAddress::new("KzSbx0hJ6pD2Wc4qHnM3yNT9r1aOq5yZsxqnIfmM8zk").unwrap();
        assert_eq!(addr.abbreviated(), "KzSbx0...M8zk");
    }

    #[test]
    fn test_abbreviated_short_address() {
        // short ids overlap rather than panic
        let addr = WalletAddress::new("abc123").unwrap();
        assert_eq!(addr.abbreviated(), "abc123...c123");
    }
}
