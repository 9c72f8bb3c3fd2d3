//! The editable "amount in words" field of a payment document.

use serde::{Deserialize, Serialize};

use montant_shared::Amount;

use crate::words::{AmountSpeller, WordsCache};

/// Source of generated amount-in-words text.
///
/// Implementations return `""` when the amount cannot be rendered.
pub trait AmountWords {
    /// Spells `amount`, or returns an empty string.
    fn words_for(&self, amount: &Amount) -> String;
}

impl AmountWords for AmountSpeller {
    fn words_for(&self, amount: &Amount) -> String {
        self.convert_amount(amount)
    }
}

impl AmountWords for WordsCache {
    fn words_for(&self, amount: &Amount) -> String {
        self.convert_amount(amount)
    }
}

/// Generated words plus an optional manual override typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountInWordsField {
    generated: String,
    manual: Option<String>,
}

impl AmountInWordsField {
    /// Generates the field for `amount`.
    #[must_use]
    pub fn generate(words: &impl AmountWords, amount: &Amount) -> Self {
        Self {
            generated: words.words_for(amount),
            manual: None,
        }
    }

    /// Sets the manual override. Blank text clears it.
    pub fn set_manual(&mut self, text: impl Into<String>) {
        let text = text.into();
        let trimmed = text.trim();
        self.manual = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Removes the manual override.
    pub fn clear_manual(&mut self) {
        self.manual = None;
    }

    /// Generated text; empty when the amount could not be rendered.
    #[must_use]
    pub fn generated(&self) -> &str {
        &self.generated
    }

    /// Manual override, if any.
    #[must_use]
    pub fn manual(&self) -> Option<&str> {
        self.manual.as_deref()
    }

    /// Returns true if the user replaced the generated text.
    #[must_use]
    pub fn is_overridden(&self) -> bool {
        self.manual.is_some()
    }

    /// Returns true if generation failed and nothing was typed in.
    #[must_use]
    pub fn needs_manual_entry(&self) -> bool {
        self.generated.is_empty() && self.manual.is_none()
    }

    /// Text in words: the override first, then the generated text.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.manual
            .as_deref()
            .or_else(|| Some(self.generated.as_str()).filter(|t| !t.is_empty()))
    }

    /// Printable value; falls back to the numeric amount when no words exist.
    #[must_use]
    pub fn display(&self, amount: &Amount) -> String {
        self.text()
            .map_or_else(|| amount.to_string(), ToString::to_string)
    }
}
