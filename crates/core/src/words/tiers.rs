//! French cardinal numerals, one pure function per magnitude tier.
//!
//! The irregular forms (vigesimal 70s/80s/90s, "cent"/"cents", invariant
//! "mille") are spelled out as explicit branches. Agreement follows the
//! rendering used on payment documents: "cents" and "quatre-vingts" take
//! their plural `s` whenever nothing follows inside the tier, even before
//! "mille".

/// Units 0..=9. Index 0 is never emitted by the tiers; zero is handled by
/// [`int_to_words`].
const UNITS: [&str; 10] = [
    "zéro", "un", "deux", "trois", "quatre", "cinq", "six", "sept", "huit", "neuf",
];

/// 10..=19, also used as the offset for 70..=79 and 90..=99.
const TEENS: [&str; 10] = [
    "dix", "onze", "douze", "treize", "quatorze", "quinze", "seize", "dix-sept", "dix-huit",
    "dix-neuf",
];

/// Tens words indexed by the tens digit. 7, 8 and 9 are built from
/// "soixante" and "quatre-vingt" and never read from this table.
const TENS: [&str; 10] = [
    "", "dix", "vingt", "trente", "quarante", "cinquante", "soixante", "", "", "",
];

const THOUSAND: u64 = 1_000;
const MILLION: u64 = 1_000_000;

/// Spells `n` in French words, lowercase.
///
/// `0` gives `"zéro"`. Larger magnitudes are composed recursively:
/// millions, then thousands, then hundreds.
///
/// ```
/// use montant_core::words::int_to_words;
///
/// assert_eq!(int_to_words(0), "zéro");
/// assert_eq!(int_to_words(71), "soixante-onze");
/// assert_eq!(int_to_words(1_980), "mille neuf cent quatre-vingts");
/// ```
#[must_use]
pub fn int_to_words(n: u64) -> String {
    if n == 0 {
        UNITS[0].to_string()
    } else {
        millions(n)
    }
}

/// 0..=9; empty for zero.
pub(crate) fn units(n: u64) -> &'static str {
    match n {
        1..=9 => UNITS[digit(n)],
        _ => "",
    }
}

/// 0..=99; empty for zero.
pub(crate) fn below_hundred(n: u64) -> String {
    debug_assert!(n < 100);
    match n {
        0..=9 => units(n).to_string(),
        10..=19 => TEENS[digit(n - 10)].to_string(),
        _ => {
            let tens = n / 10;
            let unit = n % 10;
            match tens {
                7 => format!("soixante-{}", TEENS[digit(unit)]),
                9 => format!("quatre-vingt-{}", TEENS[digit(unit)]),
                8 if unit == 0 => "quatre-vingts".to_string(),
                8 => format!("quatre-vingt-{}", units(unit)),
                _ if unit == 0 => TENS[digit(tens)].to_string(),
                _ if unit == 1 => format!("{} et un", TENS[digit(tens)]),
                _ => format!("{}-{}", TENS[digit(tens)], units(unit)),
            }
        }
    }
}

/// 0..=999; empty for zero.
pub(crate) fn hundreds(n: u64) -> String {
    debug_assert!(n < THOUSAND);
    let count = n / 100;
    let rest = n % 100;

    let head = match count {
        0 => return below_hundred(rest),
        1 => "cent".to_string(),
        _ if rest == 0 => format!("{} cents", units(count)),
        _ => format!("{} cent", units(count)),
    };

    join(head, below_hundred(rest))
}

/// 0..=999_999; empty for zero.
pub(crate) fn thousands(n: u64) -> String {
    debug_assert!(n < MILLION);
    let count = n / THOUSAND;
    let rest = n % THOUSAND;

    let head = match count {
        0 => return hundreds(rest),
        1 => "mille".to_string(),
        _ => format!("{} mille", hundreds(count)),
    };

    join(head, hundreds(rest))
}

/// Any value; empty for zero.
pub(crate) fn millions(n: u64) -> String {
    let count = n / MILLION;
    let rest = n % MILLION;

    let head = match count {
        0 => return thousands(rest),
        1 => "un million".to_string(),
        _ => format!("{} millions", millions(count)),
    };

    join(head, thousands(rest))
}

fn join(head: String, tail: String) -> String {
    if tail.is_empty() {
        head
    } else {
        format!("{head} {tail}")
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn digit(n: u64) -> usize {
    n as usize
}
