//! Defines the mutable, reactive state for the application's UI.

use api::DashboardState;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// Wallet responses and button clicks write here; every card re-renders
/// from it. It is separate from the immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    pub dashboard: Signal<DashboardState>,
}
