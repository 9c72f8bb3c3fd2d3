//! Payment summary handed to the document generator.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use montant_shared::Amount;
use montant_shared::types::{DemandeId, PaymentId};

use super::error::DocumentError;
use super::field::{AmountInWordsField, AmountWords};
use super::status::DemandeStatus;

/// Input for recording a payment against a demande.
#[derive(Debug, Clone, Deserialize)]
pub struct RecordPaymentInput {
    /// Demande being paid.
    pub demande_id: DemandeId,
    /// Amount paid.
    pub amount: Amount,
    /// Person who executed the payment.
    pub effectue_par: String,
    /// Payment date.
    pub paid_on: NaiveDate,
    /// Amount in words typed by the user, replacing the generated text.
    #[serde(default)]
    pub amount_in_words: Option<String>,
}

/// A recorded payment, ready to be rendered on a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentSummary {
    /// Payment identifier.
    pub payment_id: PaymentId,
    /// Paid demande.
    pub demande_id: DemandeId,
    /// Amount paid.
    pub amount: Amount,
    /// Person who executed the payment.
    pub effectue_par: String,
    /// Payment date.
    pub paid_on: NaiveDate,
    /// Editable amount-in-words field.
    pub amount_in_words: AmountInWordsField,
}

/// Flat export payload (PDF/CSV generators consume this shape).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaymentExport {
    /// Payment identifier.
    pub payment_id: PaymentId,
    /// Paid demande.
    pub demande_id: DemandeId,
    /// Numeric amount, e.g. `"250.500 TND"`.
    pub amount: String,
    /// Amount in words, or the numeric amount when no words exist.
    pub amount_in_words: String,
    /// Person who executed the payment.
    pub effectue_par: String,
    /// Payment date.
    pub paid_on: NaiveDate,
}

impl PaymentSummary {
    /// Records a payment for a demande in `status`.
    ///
    /// # Errors
    ///
    /// - `NotPayable` unless the demande is approved
    /// - `MissingExecutor` if `effectue_par` is blank
    pub fn record(
        input: RecordPaymentInput,
        status: DemandeStatus,
        words: &impl AmountWords,
    ) -> Result<Self, DocumentError> {
        if !status.is_payable() {
            return Err(DocumentError::NotPayable(status));
        }

        let effectue_par = input.effectue_par.trim();
        if effectue_par.is_empty() {
            return Err(DocumentError::MissingExecutor);
        }

        let mut amount_in_words = AmountInWordsField::generate(words, &input.amount);
        if let Some(manual) = input.amount_in_words {
            amount_in_words.set_manual(manual);
        }

        Ok(Self {
            payment_id: PaymentId::new(),
            demande_id: input.demande_id,
            amount: input.amount,
            effectue_par: effectue_par.to_string(),
            paid_on: input.paid_on,
            amount_in_words,
        })
    }

    /// Builds the flat export payload.
    #[must_use]
    pub fn to_export(&self) -> PaymentExport {
        PaymentExport {
            payment_id: self.payment_id,
            demande_id: self.demande_id,
            amount: self.amount.to_string(),
            amount_in_words: self.amount_in_words.display(&self.amount),
            effectue_par: self.effectue_par.clone(),
            paid_on: self.paid_on,
        }
    }

    /// Serializes the export payload as JSON.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string(&self.to_export())?)
    }
}
