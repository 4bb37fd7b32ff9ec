// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use api::prefs::dashboard_prefs::DashboardPrefs;
use api::DashboardState;
use app_state::AppState;
use app_state::WalletHandle;
use app_state_mut::AppStateMut;
use components::pico::Container;
use components::pico::Grid;
use components::wallet_button::WalletButton;
use hooks::use_wallet_loaded::use_wallet_loaded;
use screens::balance::BalanceCard;
use screens::stake::ConfirmStakeModal;
use screens::stake::StakeCard;
use screens::stats::StatsGrid;

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let dashboard_css = r#"
    * { box-sizing: border-box; }

    .app-main-container {
        min-height: 100vh;
        padding: 1rem;
        background-color: var(--pico-muted-border-color);
    }

    .app-main-container header.app-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        margin-bottom: 1.5rem;
    }

    .app-main-container header.app-header h1 {
        margin: 0;
        font-size: 2rem;
    }

    .app-main-container article header h2 {
        font-size: 1.25rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{dashboard_css}"
        }
        AppBody {}
    }
}

/// Looks for the wallet extension and reads prefs, once per page load.
#[component]
fn AppBody() -> Element {
    let app_state = use_hook(|| {
        let wallet = compat::detect_wallet().map(WalletHandle::new);
        AppState::new(DashboardPrefs::default(), wallet)
    });

    rsx! {
        LoadedApp { app_state }
    }
}

/// This component holds the main app logic.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let dashboard = use_signal(DashboardState::default);
    use_context_provider(|| AppStateMut { dashboard });

    use_wallet_loaded();

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    class: "app-header",
                    h1 { "ArWeave Staking Platform" }
                    WalletButton {}
                }
                Grid {
                    BalanceCard {}
                    StakeCard {}
                }
                StatsGrid {}
                ConfirmStakeModal {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::prefs::staking_stats::StakingStats;
    use dioxus::dioxus_core::VirtualDom;

    fn render(app_state: AppState) -> String {
        let mut dom = VirtualDom::new_with_props(LoadedApp, LoadedAppProps { app_state });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_renders_without_wallet() {
        let html = render(AppState::new(
            DashboardPrefs::new(StakingStats::default()),
            None,
        ));

        assert!(html.contains("ArWeave Staking Platform"));
        assert!(html.contains("Connect ArConnect"));
        assert!(!html.contains("Disconnect"));
        assert!(!html.contains("Confirm Staking"));
        assert!(html.contains("0.00"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_renders_configured_stats() {
        let stats = StakingStats::from_vars(|key| match key {
            "STAKING_APR" => Some("7.25%".to_string()),
            _ => None,
        });
        let html = render(AppState::new(DashboardPrefs::new(stats), None));

        assert!(html.contains("7.25%"));
        assert!(html.contains("1,234,567 TOKENA"));
        assert!(html.contains("25.5 TOKENB"));
    }
}
