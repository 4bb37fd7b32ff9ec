//=============================================================================
// File: src/components/wallet_button.rs
//=============================================================================
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::address::Address;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use api::actions;
use api::WalletError;
use dioxus::prelude::*;

/// Connect/disconnect toggle, with the connected address beside it.
#[component]
pub fn WalletButton() -> Element {
    let app_state = use_context::<AppState>();
    let mut dashboard = use_context::<AppStateMut>().dashboard;

    let address = dashboard.read().session().address().cloned();
    let is_connected = address.is_some();

    let on_click = move |_: MouseEvent| {
        let wallet = app_state.wallet.clone();
        // read at click time, not render time
        let connected = dashboard.peek().is_connected();
        spawn(async move {
            let Some(wallet) = wallet else {
                dashboard.write().apply_connect(Err(WalletError::NotInstalled));
                return;
            };
            if connected {
                let result = actions::disconnect(wallet.connector()).await;
                dashboard.write().apply_disconnect(result);
            } else {
                let result = actions::connect(wallet.connector()).await;
                dashboard.write().apply_connect(result);
            }
        });
    };

    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 0.5rem;",
            if let Some(address) = address {
                Address { address }
            }
            Button {
                button_type: if is_connected { ButtonType::Secondary } else { ButtonType::Primary },
                on_click,
                if is_connected { "Disconnect" } else { "Connect ArConnect" }
            }
        }
    }
}
