//! Amount-in-words rendering for payment documents.
//!
//! Output shape: `<major-words> <major-unit>[ et <minor-words> <minor-unit>]`
//! with the first letter capitalized, e.g.
//! `"Deux cent cinquante dinars et cinq cents millimes"`.

use rust_decimal::Decimal;
use tracing::warn;

use montant_shared::{Amount, Currency};

use super::error::WordsError;
use super::tiers::int_to_words;

/// Spells amounts of a given currency in French.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AmountSpeller {
    currency: Currency,
}

impl AmountSpeller {
    /// Speller for Tunisian dinars and millimes.
    pub const DINAR: Self = Self::new(Currency::Tnd);

    /// Creates a speller for `currency`.
    #[must_use]
    pub const fn new(currency: Currency) -> Self {
        Self { currency }
    }

    /// Currency this speller renders.
    #[must_use]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    /// Spells already split major and minor unit counts.
    #[must_use]
    pub fn spell_parts(&self, major: u64, minor: u32) -> String {
        let major_text = format!(
            "{} {}",
            int_to_words(major),
            self.currency.major_label(major)
        );

        let text = if minor == 0 {
            major_text
        } else {
            let minor = u64::from(minor);
            format!(
                "{major_text} et {} {}",
                int_to_words(minor),
                self.currency.minor_label(minor)
            )
        };

        capitalize(&text)
    }

    /// Spells a validated amount.
    pub fn spell(&self, amount: &Amount) -> Result<String, WordsError> {
        let (major, minor) = amount.split_for(self.currency)?;
        Ok(self.spell_parts(major, minor))
    }

    /// Spells a validated amount; returns `""` when it cannot be rendered.
    #[must_use]
    pub fn convert_amount(&self, amount: &Amount) -> String {
        self.spell(amount)
            .unwrap_or_else(|err| fallback(&amount.to_string(), &err))
    }

    /// Spells a float amount, reporting why it could not be rendered.
    pub fn try_convert(&self, amount: f64) -> Result<String, WordsError> {
        let amount = Amount::from_f64(amount)?;
        self.spell(&amount)
    }

    /// Spells a float amount; returns `""` when it cannot be rendered.
    #[must_use]
    pub fn convert(&self, amount: f64) -> String {
        self.try_convert(amount)
            .unwrap_or_else(|err| fallback(&amount.to_string(), &err))
    }

    /// Spells a decimal amount; returns `""` when it cannot be rendered.
    #[must_use]
    pub fn convert_decimal(&self, amount: Decimal) -> String {
        Amount::new(amount)
            .map_err(WordsError::from)
            .and_then(|amount| self.spell(&amount))
            .unwrap_or_else(|err| fallback(&amount.to_string(), &err))
    }

    /// Spells user-typed text ("1 250,5"); returns `""` when it cannot be rendered.
    #[must_use]
    pub fn convert_str(&self, input: &str) -> String {
        input
            .parse::<Amount>()
            .map_err(WordsError::from)
            .and_then(|amount| self.spell(&amount))
            .unwrap_or_else(|err| fallback(input, &err))
    }
}

fn fallback(input: &str, err: &WordsError) -> String {
    warn!(
        amount = input,
        code = err.error_code(),
        error = %err,
        "Amount could not be spelled, leaving words blank"
    );
    String::new()
}

/// Uppercases the first character only.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Spells a dinar amount; returns `""` for negative or non-finite input.
#[must_use]
pub fn convert(amount: f64) -> String {
    AmountSpeller::DINAR.convert(amount)
}

/// Spells a dinar amount, reporting why it could not be rendered.
pub fn try_convert(amount: f64) -> Result<String, WordsError> {
    AmountSpeller::DINAR.try_convert(amount)
}

/// Spells a decimal dinar amount; returns `""` when it cannot be rendered.
#[must_use]
pub fn convert_decimal(amount: Decimal) -> String {
    AmountSpeller::DINAR.convert_decimal(amount)
}

/// Spells a validated dinar amount; returns `""` when it cannot be rendered.
#[must_use]
pub fn convert_amount(amount: &Amount) -> String {
    AmountSpeller::DINAR.convert_amount(amount)
}
