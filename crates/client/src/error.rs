/// Errors returned by a [`crate::store::PlanStore`].
///
/// View-models never show these to the user; they log them and display one
/// of the fixed messages in [`plano_core::messages`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The HTTP request itself failed (network, DNS, TLS, decoding).
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A delete was refused because other rows still reference the target.
    #[error("Delete refused: {0}")]
    DependentRecords(String),

    /// Credentials or token rejected.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Any other non-2xx answer.
    #[error("Store error ({status} {code}): {message}")]
    Api {
        status: u16,
        code: String,
        message: String,
    },
}

impl StoreError {
    pub fn is_dependent_records(&self) -> bool {
        matches!(self, StoreError::DependentRecords(_))
    }
}
