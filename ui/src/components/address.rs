//=============================================================================
// File: src/components/address.rs
//=============================================================================
use api::WalletAddress;
use dioxus::prelude::*;

/// The connected address, shortened. Hover shows the full address.
#[component]
pub fn Address(address: WalletAddress) -> Element {
    let abbreviated = address.abbreviated();

    rsx! {
        small {
            style: "color: var(--pico-muted-color); margin-right: 0.5rem;",
            title: "{address}",
            code { "{abbreviated}" }
        }
    }
}
