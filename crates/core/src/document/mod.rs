//! Payment document data contract.
//!
//! The document generator consumes a [`PaymentSummary`]; its amount-in-words
//! field is generated by the converter and stays editable, so a blank
//! rendering is completed by hand instead of blocking the payment.

pub mod error;
pub mod field;
pub mod status;
pub mod summary;

pub use error::DocumentError;
pub use field::{AmountInWordsField, AmountWords};
pub use status::DemandeStatus;
pub use summary::{PaymentExport, PaymentSummary, RecordPaymentInput};
