// Re-export the public API from the appropriate module
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

/// Name of the window event ArConnect fires once `window.arweaveWallet` is ready.
pub const WALLET_LOADED_EVENT: &str = "arweaveWalletLoaded";

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use super::WALLET_LOADED_EVENT;
    use api::Permission;
    use api::WalletConnector;
    use api::WalletError;
    use std::rc::Rc;
    use std::str::FromStr;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["window", "arweaveWallet"], js_name = connect, catch)]
        async fn arweave_connect(permissions: &js_sys::Array) -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = ["window", "arweaveWallet"], js_name = disconnect, catch)]
        async fn arweave_disconnect() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = ["window", "arweaveWallet"], js_name = getPermissions, catch)]
        async fn arweave_get_permissions() -> Result<JsValue, JsValue>;

        #[wasm_bindgen(js_namespace = ["window", "arweaveWallet"], js_name = getActiveAddress, catch)]
        async fn arweave_get_active_address() -> Result<JsValue, JsValue>;
    }

    fn rejected(err: JsValue) -> WalletError {
        let message = match err.dyn_ref::<js_sys::Error>() {
            Some(e) => String::from(e.message()),
            None => err.as_string().unwrap_or_else(|| format!("{:?}", err)),
        };
        WalletError::Rejected(message)
    }

    /// `window.arweaveWallet`, injected by the ArConnect browser extension.
    pub struct ArConnect;

    #[async_trait::async_trait(?Send)]
    impl WalletConnector for ArConnect {
        async fn connect(&self, permissions: &[Permission]) -> Result<(), WalletError> {
            let names: js_sys::Array = permissions
                .iter()
                .map(|p| JsValue::from_str(p.as_str()))
                .collect();
            arweave_connect(&names).await.map_err(rejected)?;
            Ok(())
        }

        async fn disconnect(&self) -> Result<(), WalletError> {
            arweave_disconnect().await.map_err(rejected)?;
            Ok(())
        }

        async fn permissions(&self) -> Result<Vec<Permission>, WalletError> {
            let granted = arweave_get_permissions().await.map_err(rejected)?;
            let granted: js_sys::Array = granted
                .dyn_into()
                .map_err(|v| WalletError::UnexpectedResponse(format!("{:?}", v)))?;
            Ok(granted
                .iter()
                .filter_map(|v| v.as_string())
                .filter_map(|name| Permission::from_str(&name).ok())
                .collect())
        }

        async fn active_address(&self) -> Result<String, WalletError> {
            let address = arweave_get_active_address().await.map_err(rejected)?;
            address
                .as_string()
                .ok_or_else(|| WalletError::UnexpectedResponse(format!("{:?}", address)))
        }
    }

    /// Returns the extension if `window.arweaveWallet` exists.
    pub fn detect_wallet() -> Option<Rc<dyn WalletConnector>> {
        let window = web_sys::window()?;
        let wallet = js_sys::Reflect::get(&window, &JsValue::from_str("arweaveWallet")).ok()?;
        if wallet.is_undefined() || wallet.is_null() {
            return None;
        }
        Some(Rc::new(ArConnect))
    }

    /// A window listener for [`WALLET_LOADED_EVENT`], removed on drop.
    pub struct WalletLoadedListener {
        window: web_sys::Window,
        callback: Closure<dyn FnMut()>,
    }

    impl WalletLoadedListener {
        pub fn subscribe(on_loaded: impl FnMut() + 'static) -> Option<Self> {
            let window = web_sys::window()?;
            let callback = Closure::<dyn FnMut()>::new(on_loaded);
            window
                .add_event_listener_with_callback(
                    WALLET_LOADED_EVENT,
                    callback.as_ref().unchecked_ref(),
                )
                .ok()?;
            Some(Self { window, callback })
        }
    }

    impl Drop for WalletLoadedListener {
        fn drop(&mut self) {
            let _ = self.window.remove_event_listener_with_callback(
                WALLET_LOADED_EVENT,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use api::WalletConnector;
    use std::rc::Rc;

    /// Browser extensions don't exist outside a browser.
    pub fn detect_wallet() -> Option<Rc<dyn WalletConnector>> {
        None
    }

    pub struct WalletLoadedListener;

    impl WalletLoadedListener {
        pub fn subscribe(_on_loaded: impl FnMut() + 'static) -> Option<Self> {
            None
        }
    }
}
