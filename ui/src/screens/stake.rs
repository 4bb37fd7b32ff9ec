//=============================================================================
// File: src/screens/stake.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Input;
use crate::components::pico::Modal;
use crate::components::pico::SectionCard;
use dioxus::prelude::*;

#[component]
pub fn StakeCard() -> Element {
    let mut dashboard = use_context::<AppStateMut>().dashboard;
    let is_connected = dashboard.read().is_connected();
    let amount = dashboard.read().draft().amount.clone();

    rsx! {
        SectionCard {
            title: "Stake Tokens",
            subtitle: "Stake Token A to earn Token B",
            Input {
                label: "Amount to Stake",
                name: "stake-amount",
                input_type: "number",
                placeholder: "Enter amount",
                value: amount,
                disabled: !is_connected,
                on_input: move |evt: FormEvent| dashboard.write().set_stake_amount(evt.value()),
            }
            Button {
                disabled: !is_connected,
                on_click: move |_| {
                    dashboard.write().request_stake();
                },
                "🔒 Stake Tokens"
            }
        }
    }
}

/// Asks the user to confirm the drafted stake.
///
/// Confirming only logs the intent; no transaction is created.
#[component]
pub fn ConfirmStakeModal() -> Element {
    let mut dashboard = use_context::<AppStateMut>().dashboard;
    let is_open = dashboard.read().draft().confirm_visible;
    let amount = dashboard.read().draft().amount.clone();
    let address = dashboard.read().session().address_str().to_string();

    rsx! {
        Modal {
            is_open,
            title: "Confirm Staking",
            on_close: move |_| dashboard.write().cancel_stake(),
            p {
                "You are about to stake {amount} Token A from address {address}. "
                "This action cannot be undone immediately and has a minimum staking period."
            }
            footer {
                div {
                    style: "display: flex; justify-content: flex-end; gap: 1rem;",
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |_| dashboard.write().cancel_stake(),
                        "Cancel"
                    }
                    Button {
                        on_click: move |_| {
                            dashboard.write().confirm_stake();
                        },
                        "Confirm"
                    }
                }
            }
        }
    }
}
