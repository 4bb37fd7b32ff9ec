//! State behind the staking dashboard.

use crate::address::WalletAddress;
use crate::balance::BalanceSnapshot;
use crate::error::WalletError;
use crate::session::Session;
use crate::stake::StakeDraft;
use crate::stake::StakeIntent;
use dioxus_logger::tracing;

/// Everything the dashboard view renders from.
///
/// Wallet responses arrive through the `apply_*` methods. A failed wallet call
/// is logged and leaves the state as it was.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    session: Session,
    balances: BalanceSnapshot,
    draft: StakeDraft,
}

impl DashboardState {
    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn is_connected(&self) -> bool {
        self.session.is_connected()
    }

    pub fn balances(&self) -> &BalanceSnapshot {
        &self.balances
    }

    pub fn draft(&self) -> &StakeDraft {
        &self.draft
    }

    /// Result of checking for an existing grant once the extension has loaded.
    pub fn apply_wallet_loaded(&mut self, result: Result<Option<WalletAddress>, WalletError>) {
        match result {
            Ok(Some(address)) => {
                tracing::info!("restored wallet session for {}", address);
                self.session = Session::connected(address);
            }
            Ok(None) => tracing::debug!("wallet loaded without permissions"),
            Err(e) => tracing::error!("Error checking wallet permissions: {}", e),
        }
    }

    pub fn apply_connect(&mut self, result: Result<WalletAddress, WalletError>) {
        match result {
            Ok(address) => {
                tracing::info!("connected wallet {}", address);
                self.session = Session::connected(address);
            }
            Err(e) => tracing::error!("Error connecting to ArConnect: {}", e),
        }
    }

    /// On success the session is dropped and balances go back to zero.
    pub fn apply_disconnect(&mut self, result: Result<(), WalletError>) {
        match result {
            Ok(()) => {
                tracing::info!("disconnected wallet");
                self.session = Session::default();
                self.balances = BalanceSnapshot::default();
                self.draft.confirm_visible = false;
            }
            Err(e) => tracing::error!("Error disconnecting from ArConnect: {}", e),
        }
    }

    pub fn set_stake_amount(&mut self, amount: impl Into<String>) {
        self.draft.amount = amount.into();
    }

    /// Opens the confirm overlay. Returns `false`, changing nothing, while
    /// disconnected.
    pub fn request_stake(&mut self) -> bool {
        if !self.is_connected() {
            return false;
        }
        self.draft.confirm_visible = true;
        true
    }

    /// Closes the overlay and logs what would be staked.
    ///
    /// No transaction is built or signed, and balances are not touched.
    pub fn confirm_stake(&mut self) -> Option<StakeIntent> {
        if !self.draft.confirm_visible {
            return None;
        }
        self.draft.confirm_visible = false;

        let address = self.session.address()?.clone();
        let intent = StakeIntent {
            amount: self.draft.amount.clone(),
            address,
        };
        tracing::info!(
            "Staking {} tokens from address {}",
            intent.amount,
            intent.address
        );
        Some(intent)
    }

    /// Closes the overlay. The typed amount is kept.
    pub fn cancel_stake(&mut self) {
        self.draft.confirm_visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::Mutex;
    use dioxus_logger::tracing;
    use dioxus_logger::tracing::field::Field;
    use dioxus_logger::tracing::field::Visit;
    use dioxus_logger::tracing::Event;
    use dioxus_logger::tracing::Subscriber;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::Layer;

    /// Collects the rendered message of every event.
    #[derive(Clone, Default)]
    struct CaptureLayer {
        records: Arc<Mutex<Vec<String>>>,
    }

    struct MessageVisitor<'a>(&'a mut String);

    impl Visit for MessageVisitor<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0.push_str(&format!("{:?}", value));
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut message = String::new();
            event.record(&mut MessageVisitor(&mut message));
            self.records.lock().unwrap().push(message);
        }
    }

    fn addr(s: &str) -> WalletAddress {
        WalletAddress::new(s).unwrap()
    }

    fn connected(address: &str) -> DashboardState {
        let mut state = DashboardState::default();
        state.apply_connect(Ok(addr(address)));
        state
    }

    #[test]
    fn test_initial_state_disconnected() {
        let state = DashboardState::default();
        assert!(!state.is_connected());
        assert_eq!(state.session().address_str(), "");
        assert_eq!(state.balances(), &BalanceSnapshot::default());
        assert!(!state.draft().confirm_visible);
    }

    #[test]
    fn test_connect_stores_reported_address() {
        let state = connected("abc123");
        assert!(state.is_connected());
        assert_eq!(state.session().address_str(), "abc123");
    }

    #[test]
    fn test_connect_failure_leaves_state() {
        let mut state = DashboardState::default();
        state.apply_connect(Err(WalletError::Rejected("User cancelled the AuthRequest".into())));
        assert_eq!(state, DashboardState::default());
    }

    #[test]
    fn test_wallet_loaded_variants() {
        let mut state = DashboardState::default();
        state.apply_wallet_loaded(Ok(None));
        assert!(!state.is_connected());

        state.apply_wallet_loaded(Err(WalletError::Rejected("boom".into())));
        assert!(!state.is_connected());

        state.apply_wallet_loaded(Ok(Some(addr("abc123"))));
        assert_eq!(state.session().address(), Some(&addr("abc123")));
    }

    #[test]
    fn test_disconnect_resets_balances() {
        let mut state = connected("abc123");
        state.balances = BalanceSnapshot {
            token_a: "12.00".into(),
            token_b: "3.50".into(),
            staked: "1.00".into(),
        };

        state.apply_disconnect(Ok(()));

        assert!(!state.is_connected());
        assert_eq!(state.session().address_str(), "");
        assert_eq!(
            state.balances(),
            &BalanceSnapshot {
                token_a: "0.00".into(),
                token_b: "0.00".into(),
                staked: "0.00".into(),
            }
        );
    }

    #[test]
    fn test_disconnect_failure_keeps_session() {
        let mut state = connected("abc123");
        let before = state.clone();
        state.apply_disconnect(Err(WalletError::Rejected("nope".into())));
        assert_eq!(state, before);
    }

    #[test]
    fn test_disconnect_hides_overlay() {
        let mut state = connected("abc123");
        state.request_stake();
        state.apply_disconnect(Ok(()));
        assert!(!state.draft().confirm_visible);
    }

    #[test]
    fn test_request_stake_noop_when_disconnected() {
        let mut state = DashboardState::default();
        state.set_stake_amount("5");
        let before = state.clone();

        assert!(!state.request_stake());
        assert_eq!(state, before);
    }

    #[test]
    fn test_open_then_cancel_keeps_amount() {
        let mut state = connected("abc123");
        state.set_stake_amount("42.5");

        assert!(state.request_stake());
        assert!(state.draft().confirm_visible);
        state.cancel_stake();

        assert_eq!(state.draft().amount, "42.5");
        assert!(!state.draft().confirm_visible);
    }

    #[test]
    fn test_confirm_without_overlay_is_noop() {
        let mut state = connected("abc123");
        state.set_stake_amount("5");
        assert_eq!(state.confirm_stake(), None);
    }

    #[test]
    fn test_confirm_logs_single_record() {
        let capture = CaptureLayer::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        let mut state = connected("abc123");
        state.set_stake_amount("5");
        state.request_stake();
        let balances_before = state.balances().clone();

        let intent = tracing::subscriber::with_default(subscriber, || state.confirm_stake());

        let records = capture.records.lock().unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].contains('5'));
        assert!(records[0].contains("abc123"));

        let intent = intent.unwrap();
        assert_eq!(intent.amount, "5");
        assert_eq!(intent.address.as_str(), "abc123");
        assert!(!state.draft().confirm_visible);
        assert_eq!(state.balances(), &balances_before);
    }
}
