//! Amount type with decimal precision and currency vocabulary.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Floats are accepted only at the edge (`Amount::from_f64`) and converted
//! to `rust_decimal::Decimal` immediately.

use std::num::FpCategory;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building an [`Amount`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Amount is below zero.
    #[error("Amount cannot be negative")]
    Negative,

    /// Amount is NaN or infinite.
    #[error("Amount must be a finite number")]
    NonFinite,

    /// Whole part does not fit in 64 bits.
    #[error("Amount is too large")]
    TooLarge,

    /// Text could not be parsed as a decimal number.
    #[error("Invalid amount: {0}")]
    Invalid(String),
}

impl AmountError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Negative => "NEGATIVE_AMOUNT",
            Self::NonFinite => "NON_FINITE_AMOUNT",
            Self::TooLarge => "AMOUNT_TOO_LARGE",
            Self::Invalid(_) => "INVALID_AMOUNT",
        }
    }
}

/// Currencies the document generator knows how to spell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Tunisian Dinar (1 dinar = 1000 millimes).
    #[default]
    Tnd,
    /// Euro (1 euro = 100 centimes).
    Eur,
}

impl Currency {
    /// ISO 4217 code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Tnd => "TND",
            Self::Eur => "EUR",
        }
    }

    /// Number of fractional digits carried by the minor unit.
    #[must_use]
    pub const fn minor_digits(self) -> u32 {
        match self {
            Self::Tnd => 3,
            Self::Eur => 2,
        }
    }

    /// Singular French name of the major unit.
    #[must_use]
    pub const fn major_unit(self) -> &'static str {
        match self {
            Self::Tnd => "dinar",
            Self::Eur => "euro",
        }
    }

    /// Singular French name of the minor unit.
    #[must_use]
    pub const fn minor_unit(self) -> &'static str {
        match self {
            Self::Tnd => "millime",
            Self::Eur => "centime",
        }
    }

    /// Major unit name agreed with `count`.
    ///
    /// Counts of 0 and 1 take the singular ("zéro dinar", "un dinar").
    #[must_use]
    pub fn major_label(self, count: u64) -> String {
        pluralize(self.major_unit(), count)
    }

    /// Minor unit name agreed with `count`, same threshold as the major unit.
    #[must_use]
    pub fn minor_label(self, count: u64) -> String {
        pluralize(self.minor_unit(), count)
    }
}

fn pluralize(word: &str, count: u64) -> String {
    if count <= 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TND" | "DT" => Ok(Self::Tnd),
            "EUR" => Ok(Self::Eur),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}

/// A validated, non-negative monetary amount expressed in major units.
///
/// Uses `Decimal` internally to avoid floating-point precision errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    /// Zero dinar.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a decimal value.
    pub fn new(value: Decimal) -> Result<Self, AmountError> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(AmountError::Negative);
        }
        if value.trunc().to_u64().is_none() {
            return Err(AmountError::TooLarge);
        }
        // Normalizes a negative zero.
        Ok(Self(value.abs()))
    }

    /// Creates an amount from a float, as received from a form or a JSON payload.
    pub fn from_f64(value: f64) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NonFinite);
        }
        let decimal = match Decimal::from_f64(value) {
            Some(decimal) => decimal,
            // `Decimal` has no signed zero.
            None if value.classify() == FpCategory::Zero => Decimal::ZERO,
            None if value.is_sign_negative() => return Err(AmountError::Negative),
            None => return Err(AmountError::TooLarge),
        };
        Self::new(decimal)
    }

    /// Creates an amount from a whole number of millimes.
    #[must_use]
    pub fn from_millimes(millimes: u64) -> Self {
        Self(Decimal::from_i128_with_scale(i128::from(millimes), 3))
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Returns true if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Splits the amount into major and minor units of `currency`.
    ///
    /// The fraction is rounded half away from zero to the currency's minor
    /// digits; a rounding that reaches a full major unit is carried, so the
    /// minor part is always below `10^minor_digits`.
    pub fn split_for(&self, currency: Currency) -> Result<(u64, u32), AmountError> {
        let rounded = self
            .0
            .round_dp_with_strategy(currency.minor_digits(), RoundingStrategy::MidpointAwayFromZero);
        let whole = rounded.trunc();
        let major = whole.to_u64().ok_or(AmountError::TooLarge)?;
        let scale = Decimal::from(10u32.pow(currency.minor_digits()));
        let minor = ((rounded - whole) * scale)
            .to_u32()
            .ok_or_else(|| AmountError::Invalid(rounded.to_string()))?;
        Ok((major, minor))
    }

    /// Splits the amount into dinars and millimes.
    pub fn split(&self) -> Result<(u64, u32), AmountError> {
        self.split_for(Currency::Tnd)
    }

    /// Formats the amount numerically for `currency`, e.g. `"250.500 TND"`.
    #[must_use]
    pub fn display_in(&self, currency: Currency) -> String {
        let digits = currency.minor_digits() as usize;
        format!("{:.digits$} {}", self.0, currency.code())
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = AmountError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.display_in(Currency::Tnd))
    }
}

impl std::str::FromStr for Amount {
    type Err = AmountError;

    /// Parses user input; accepts `,` as decimal separator and ignores spaces
    /// used as thousands separators ("1 250,500").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cleaned: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '\u{a0}' | '\u{202f}'))
            .map(|c| if c == ',' { '.' } else { c })
            .collect();
        if cleaned.is_empty() {
            return Err(AmountError::Invalid(s.to_string()));
        }
        let value = cleaned
            .parse::<Decimal>()
            .map_err(|_| AmountError::Invalid(s.to_string()))?;
        Self::new(value)
    }
}
