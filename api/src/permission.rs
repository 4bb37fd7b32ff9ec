//! Permission scopes understood by the ArConnect extension.

use std::fmt;

/// A permission the wallet extension can grant to this page.
///
/// Names are the extension's wire strings, e.g. `"ACCESS_ADDRESS"`. Anything
/// the extension reports that we don't know about is kept as [`Permission::Other`]
/// so it still counts as a grant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, strum::EnumString, strum::EnumIs)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Permission {
    AccessAddress,
    AccessPublicKey,
    AccessAllAddresses,
    SignTransaction,
    Encrypt,
    Decrypt,
    Signature,
    AccessArweaveConfig,
    Dispatch,
    #[strum(default)]
    Other(String),
}

/// The scopes requested by the connect button.
pub const CONNECT_PERMISSIONS: [Permission; 3] = [
    Permission::AccessAddress,
    Permission::SignTransaction,
    Permission::AccessPublicKey,
];

impl Permission {
    pub fn as_str(&self) -> &str {
        match self {
            Permission::AccessAddress => "ACCESS_ADDRESS",
            Permission::AccessPublicKey => "ACCESS_PUBLIC_KEY",
            Permission::AccessAllAddresses => "ACCESS_ALL_ADDRESSES",
            Permission::SignTransaction => "SIGN_TRANSACTION",
            Permission::Encrypt => "ENCRYPT",
            Permission::Decrypt => "DECRYPT",
            Permission::Signature => "SIGNATURE",
            Permission::AccessArweaveConfig => "ACCESS_ARWEAVE_CONFIG",
            Permission::Dispatch => "DISPATCH",
            Permission::Other(name) => name,
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parses_extension_names() {
        assert_eq!(
            Permission::from_str("ACCESS_ADDRESS"),
            Ok(Permission::AccessAddress)
        );
        assert_eq!(
            Permission::from_str("ACCESS_ARWEAVE_CONFIG"),
            Ok(Permission::AccessArweaveConfig)
        );
    }

    #[test]
    fn test_unknown_name_is_kept() {
        let p = Permission::from_str("SIGN_DATA_ITEM").unwrap();
        assert_eq!(p, Permission::Other("SIGN_DATA_ITEM".to_string()));
        assert_eq!(p.to_string(), "SIGN_DATA_ITEM");
    }

    #[test]
    fn test_display_matches_wire_name() {
        for p in CONNECT_PERMISSIONS {
            assert_eq!(Permission::from_str(&p.to_string()), Ok(p));
        }
    }
}
