//! Errors raised while rendering an amount in words.
//!
//! These never reach callers of [`super::convert`]; they are logged and
//! replaced by the empty-string sentinel.

use montant_shared::AmountError;
use thiserror::Error;

/// Errors that can occur while rendering an amount.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordsError {
    /// Amount is below zero.
    #[error("Cannot spell a negative amount")]
    NegativeAmount,

    /// Amount is NaN or infinite.
    #[error("Cannot spell a non-finite amount")]
    NonFiniteAmount,

    /// Amount does not fit the supported range.
    #[error("Amount is too large to spell")]
    AmountTooLarge,

    /// Text input is not a number.
    #[error("Cannot parse amount: {0}")]
    Unparseable(String),
}

impl WordsError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount => "NEGATIVE_AMOUNT",
            Self::NonFiniteAmount => "NON_FINITE_AMOUNT",
            Self::AmountTooLarge => "AMOUNT_TOO_LARGE",
            Self::Unparseable(_) => "UNPARSEABLE_AMOUNT",
        }
    }
}

impl From<AmountError> for WordsError {
    fn from(err: AmountError) -> Self {
        match err {
            AmountError::Negative => Self::NegativeAmount,
            AmountError::NonFinite => Self::NonFiniteAmount,
            AmountError::TooLarge => Self::AmountTooLarge,
            AmountError::Invalid(input) => Self::Unparseable(input),
        }
    }
}

impl From<WordsError> for montant_shared::AppError {
    fn from(err: WordsError) -> Self {
        Self::Validation(err.to_string())
    }
}
