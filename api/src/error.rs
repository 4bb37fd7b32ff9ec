//! Errors reported by the wallet collaborator.

/// A failed call to the wallet extension.
///
/// None of these are surfaced to the user. They are caught where the
/// dashboard applies a wallet response and written to the log.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("wallet extension is not installed")]
    NotInstalled,

    /// The extension threw, e.g. the user declined the permission prompt.
    #[error("wallet call rejected: {0}")]
    Rejected(String),

    #[error("wallet reported an empty active address")]
    EmptyAddress,

    #[error("unexpected wallet response: {0}")]
    UnexpectedResponse(String),
}
