//=============================================================================
// File: src/hooks/use_wallet_loaded.rs
//=============================================================================
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::compat;
use crate::compat::WalletLoadedListener;
use dioxus::prelude::*;
use dioxus_logger::tracing;
use futures::StreamExt;
use std::cell::RefCell;
use std::rc::Rc;

/// Restores an earlier wallet session once ArConnect announces itself.
///
/// Subscribes to the extension's loaded event for the lifetime of the
/// calling component. Does nothing, apart from a warning, when no extension
/// is installed.
pub fn use_wallet_loaded() {
    let app_state = use_context::<AppState>();
    let mut dashboard = use_context::<AppStateMut>().dashboard;

    let listener = use_hook(move || {
        let Some(wallet) = app_state.wallet.clone() else {
            tracing::warn!("ArConnect is not installed!");
            return Rc::new(RefCell::new(None::<WalletLoadedListener>));
        };

        // The JS callback runs outside the Dioxus runtime, so it only
        // forwards to a task owned by this scope.
        let (tx, mut rx) = futures_channel::mpsc::unbounded::<()>();
        let listener = WalletLoadedListener::subscribe(move || {
            let _ = tx.unbounded_send(());
        });
        if listener.is_some() {
            tracing::debug!("subscribed to {}", compat::WALLET_LOADED_EVENT);
        }

        spawn(async move {
            while rx.next().await.is_some() {
                let result = api::actions::restore_session(wallet.connector()).await;
                dashboard.write().apply_wallet_loaded(result);
            }
        });

        Rc::new(RefCell::new(listener))
    });

    use_drop(move || {
        if listener.borrow_mut().take().is_some() {
            tracing::debug!("unsubscribed from {}", compat::WALLET_LOADED_EVENT);
        }
    });
}
