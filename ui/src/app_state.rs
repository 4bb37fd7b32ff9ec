use api::prefs::dashboard_prefs::DashboardPrefs;
use api::WalletConnector;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Shared handle to the wallet extension.
///
/// Two handles are equal when they point at the same connector.
#[derive(Clone)]
pub struct WalletHandle(Rc<dyn WalletConnector>);

impl WalletHandle {
    pub fn new(connector: Rc<dyn WalletConnector>) -> Self {
        Self(connector)
    }

    pub fn connector(&self) -> &dyn WalletConnector {
        &*self.0
    }
}

impl PartialEq for WalletHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for WalletHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WalletHandle")
    }
}

#[derive(Debug, PartialEq)]
pub struct AppStateData {
    pub prefs: DashboardPrefs,
    /// `None` when the extension is not installed.
    pub wallet: Option<WalletHandle>,
}

/// The stable, non-reactive part of the app, fixed at startup.
#[derive(Clone, Debug, PartialEq)]
pub struct AppState(Rc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(prefs: DashboardPrefs, wallet: Option<WalletHandle>) -> Self {
        Self(Rc::new(AppStateData { prefs, wallet }))
    }
}
