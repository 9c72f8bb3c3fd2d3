//! French amount-in-words rendering.
//!
//! This module implements the converter used to print payment amounts in
//! letters on generated documents:
//! - Cardinal numerals by magnitude tier
//! - Amount rendering with currency units
//! - Error types for amounts that cannot be rendered
//! - Optional memoization of rendered amounts
//!
//! The converter never fails towards its caller: an amount that cannot be
//! rendered yields an empty string, leaving the field blank for manual entry.

pub mod cache;
pub mod error;
pub mod speller;
pub mod tiers;

#[cfg(test)]
mod props;

pub use cache::WordsCache;
pub use error::WordsError;
pub use speller::{AmountSpeller, convert, convert_amount, convert_decimal, try_convert};
pub use tiers::int_to_words;
