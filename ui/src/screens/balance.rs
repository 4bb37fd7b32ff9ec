//=============================================================================
// File: src/screens/balance.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::SectionCard;
use dioxus::prelude::*;

#[component]
fn BalanceRow(label: String, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 1rem;",
            span { style: "color: var(--pico-muted-color);", "{label}" }
            strong { "{value}" }
        }
    }
}

#[component]
pub fn BalanceCard() -> Element {
    let dashboard = use_context::<AppStateMut>().dashboard;
    let balances = dashboard.read().balances().clone();

    rsx! {
        SectionCard {
            title: "Your Balance",
            subtitle: "View your token holdings",
            BalanceRow { label: "Token A Balance:", value: balances.token_a }
            BalanceRow { label: "Token B Balance:", value: balances.token_b }
            BalanceRow { label: "Staked Amount:", value: balances.staked }
        }
    }
}
