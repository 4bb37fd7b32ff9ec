//! The wallet extension as seen by the dashboard.

use crate::error::WalletError;
use crate::permission::Permission;

/// Calls into a browser wallet extension.
///
/// Extension calls resolve on the browser's event loop and are not `Send`.
#[async_trait::async_trait(?Send)]
pub trait WalletConnector {
    /// Ask the user to grant `permissions` to this page.
    async fn connect(&self, permissions: &[Permission]) -> Result<(), WalletError>;

    async fn disconnect(&self) -> Result<(), WalletError>;

    /// Permissions this page already holds.
    async fn permissions(&self) -> Result<Vec<Permission>, WalletError>;

    /// The address currently selected in the wallet.
    async fn active_address(&self) -> Result<String, WalletError>;
}
