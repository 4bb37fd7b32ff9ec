pub mod use_wallet_loaded;
