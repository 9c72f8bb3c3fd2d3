//! Payment document error types.

use thiserror::Error;

use super::status::DemandeStatus;

/// Errors that can occur while preparing a payment document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Payment can only be recorded for an approved demande.
    #[error("Demande is {0}, only approved demandes can be paid")]
    NotPayable(DemandeStatus),

    /// The person who executed the payment is required.
    #[error("Payment executor (effectué par) is required")]
    MissingExecutor,

    /// Export payload could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocumentError {
    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotPayable(_) => "DEMANDE_NOT_PAYABLE",
            Self::MissingExecutor => "MISSING_EXECUTOR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

impl From<DocumentError> for montant_shared::AppError {
    fn from(err: DocumentError) -> Self {
        match err {
            DocumentError::NotPayable(_) => Self::BusinessRule(err.to_string()),
            DocumentError::MissingExecutor => Self::Validation(err.to_string()),
            DocumentError::Serialization(_) => Self::Internal(err.to_string()),
        }
    }
}
