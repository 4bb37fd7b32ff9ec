//! Async conversations with the wallet extension.
//!
//! Each action only talks to the connector and returns what it learned. The
//! caller applies the result to [`DashboardState`](crate::dashboard::DashboardState),
//! which keeps state borrows out of the await points.

use crate::address::WalletAddress;
use crate::connector::WalletConnector;
use crate::error::WalletError;
use crate::permission::CONNECT_PERMISSIONS;

/// Picks up a connection granted in an earlier visit.
///
/// `Ok(None)` when the page holds no permissions.
pub async fn restore_session<C>(connector: &C) -> Result<Option<WalletAddress>, WalletError>
where
    C: WalletConnector + ?Sized,
{
    let permissions = connector.permissions().await?;
    if permissions.is_empty() {
        return Ok(None);
    }
    let address = connector.active_address().await?;
    WalletAddress::new(address).map(Some)
}

/// Requests address, signing and public key access, then reads the active address.
pub async fn connect<C>(connector: &C) -> Result<WalletAddress, WalletError>
where
    C: WalletConnector + ?Sized,
{
    connector.connect(&CONNECT_PERMISSIONS).await?;
    let address = connector.active_address().await?;
    WalletAddress::new(address)
}

pub async fn disconnect<C>(connector: &C) -> Result<(), WalletError>
where
    C: WalletConnector + ?Sized,
{
    connector.disconnect().await
}
