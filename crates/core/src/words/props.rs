//! Property-based tests for amount-in-words rendering.
//!
//! The round-trip checks rely on `parse_words`, a reverse parser that reads
//! the French numerals back into an integer. It only exists here as an
//! oracle for the composition rules.

use proptest::prelude::*;
use rust_decimal::Decimal;

use montant_shared::Amount;

use super::speller::{convert, convert_amount, convert_decimal};
use super::tiers::int_to_words;

/// Reads French cardinal words back into a number.
///
/// Returns `None` on any token it does not know.
fn parse_words(text: &str) -> Option<u64> {
    let mut total: u64 = 0;
    let mut current: u64 = 0;
    let mut previous = "";

    for token in text.split([' ', '-']).filter(|t| !t.is_empty()) {
        match token {
            "zéro" | "et" => {}
            "vingt" | "vingts" if previous == "quatre" => current = current - 4 + 80,
            "cent" | "cents" => current = current.max(1) * 100,
            "mille" => {
                total += current.max(1) * 1_000;
                current = 0;
            }
            "million" | "millions" => {
                // "mille millions": the count is already in `total`.
                let count = if total == 0 { current.max(1) } else { current };
                total = (total + count) * 1_000_000;
                current = 0;
            }
            word => current += simple_value(word)?,
        }
        previous = token;
    }

    Some(total + current)
}

fn simple_value(word: &str) -> Option<u64> {
    let value = match word {
        "un" => 1,
        "deux" => 2,
        "trois" => 3,
        "quatre" => 4,
        "cinq" => 5,
        "six" => 6,
        "sept" => 7,
        "huit" => 8,
        "neuf" => 9,
        "dix" => 10,
        "onze" => 11,
        "douze" => 12,
        "treize" => 13,
        "quatorze" => 14,
        "quinze" => 15,
        "seize" => 16,
        "vingt" => 20,
        "trente" => 30,
        "quarante" => 40,
        "cinquante" => 50,
        "soixante" => 60,
        _ => return None,
    };
    Some(value)
}

/// Strategy to generate amounts in millimes (0.000 to 999,999.999).
fn millimes() -> impl Strategy<Value = u64> {
    0u64..1_000_000_000
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every integer below one million reads back to itself.
    #[test]
    fn prop_words_round_trip(n in 0u64..1_000_000) {
        let words = int_to_words(n);
        prop_assert_eq!(parse_words(&words), Some(n), "{} -> {}", n, words);
    }

    /// Millions compose with the lower tiers.
    #[test]
    fn prop_millions_round_trip(n in 1_000_000u64..1_000_000_000) {
        let words = int_to_words(n);
        prop_assert_eq!(parse_words(&words), Some(n), "{} -> {}", n, words);
    }

    /// Millions of millions are read back through the recursive count.
    #[test]
    fn prop_millions_of_millions_round_trip(n in 1_000_000_000u64..1_000_000_000_000_000) {
        let words = int_to_words(n);
        prop_assert_eq!(parse_words(&words), Some(n), "{} -> {}", n, words);
    }

    /// Rendering the same amount twice yields the same text.
    #[test]
    fn prop_convert_is_idempotent(m in millimes()) {
        let amount = Amount::from_millimes(m);
        prop_assert_eq!(convert_amount(&amount), convert_amount(&amount));
    }

    /// Output is never empty for a valid amount, starts uppercase and
    /// carries no trailing punctuation or stray spaces.
    #[test]
    fn prop_output_shape(m in millimes()) {
        let text = convert_amount(&Amount::from_millimes(m));
        let first = text.chars().next();
        prop_assert!(first.is_some_and(char::is_uppercase), "{}", text);
        prop_assert!(text.ends_with("dinar") || text.ends_with("dinars")
            || text.ends_with("millime") || text.ends_with("millimes"), "{}", text);
        prop_assert!(!text.contains("  "));
        prop_assert_eq!(text.trim(), text.as_str());
    }

    /// The millime clause appears exactly when the sub-unit part is non-zero.
    #[test]
    fn prop_millime_clause_presence(m in millimes()) {
        let text = convert_amount(&Amount::from_millimes(m));
        prop_assert_eq!(text.contains("millime"), m % 1000 != 0);
    }

    /// Both halves of a rendered amount read back to the dinars and millimes.
    #[test]
    fn prop_amount_round_trip(m in millimes()) {
        let text = convert_amount(&Amount::from_millimes(m)).to_lowercase();
        let (dinars_text, millimes_text) = match text.split_once(" dinar") {
            Some((head, tail)) => (head.to_string(), tail.split_once(" et ").map(|(_, rest)| rest.to_string())),
            None => return Err(TestCaseError::fail(format!("no unit in {text}"))),
        };
        prop_assert_eq!(parse_words(&dinars_text), Some(m / 1000));
        match millimes_text {
            Some(words) => {
                let words = words.trim_end_matches('s').trim_end_matches(" millime");
                prop_assert_eq!(parse_words(words), Some(m % 1000));
            }
            None => prop_assert_eq!(m % 1000, 0),
        }
    }

    /// Negative amounts are never rendered.
    #[test]
    fn prop_negative_is_empty(m in 1i64..1_000_000_000) {
        let value = Decimal::new(-m, 3);
        prop_assert_eq!(convert_decimal(value), "");
    }

    /// Float entry point agrees with the decimal one for millime-exact input.
    #[test]
    fn prop_float_matches_decimal(dinars in 0u32..1_000_000, millimes in 0u32..1000) {
        let text = format!("{dinars}.{millimes:03}");
        let float: f64 = text.parse().unwrap();
        let decimal: Decimal = text.parse().unwrap();
        prop_assert_eq!(convert(float), convert_decimal(decimal));
    }
}

#[test]
fn test_oracle_covers_every_integer_below_one_million() {
    for n in 0..1_000_000 {
        let words = int_to_words(n);
        assert_eq!(parse_words(&words), Some(n), "{n} -> {words}");
    }
}

#[test]
fn test_oracle_reads_thousands_of_millions() {
    for n in [
        1_000_000_000,
        2_000_000_000,
        1_001_000_000,
        2_003_000_045,
        1_000_000_000_000,
    ] {
        let words = int_to_words(n);
        assert_eq!(parse_words(&words), Some(n), "{n} -> {words}");
    }
}

#[test]
fn test_oracle_rejects_unknown_words() {
    assert_eq!(parse_words("douzaine"), None);
}
