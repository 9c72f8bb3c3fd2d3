//! Line rendering for the CLI.

use std::io::{self, Write};

use serde::Serialize;

use montant_core::document::{AmountInWordsField, AmountWords};
use montant_core::words::{AmountSpeller, WordsCache};
use montant_shared::{Amount, AppError, AppResult, CacheConfig};

/// Spells amounts, with or without the cache.
pub enum Renderer {
    /// Plain speller, no memoization.
    Direct(AmountSpeller),
    /// Memoizing speller.
    Cached(WordsCache),
}

impl Renderer {
    /// Builds the renderer described by the configuration.
    pub fn from_config(config: &CacheConfig) -> Self {
        if config.enabled {
            Self::Cached(WordsCache::from_config(config))
        } else {
            Self::Direct(AmountSpeller::DINAR)
        }
    }

    /// Renders one user-typed amount.
    pub fn render(&self, input: &str) -> Rendered {
        let input = input.trim();
        match input.parse::<Amount>() {
            Ok(amount) => {
                let field = AmountInWordsField::generate(self, &amount);
                Rendered {
                    amount: input.to_string(),
                    words: field.generated().to_string(),
                    display: field.display(&amount),
                }
            }
            Err(err) => {
                tracing::warn!(amount = input, error = %err, "Skipping amount");
                Rendered {
                    amount: input.to_string(),
                    words: String::new(),
                    display: input.to_string(),
                }
            }
        }
    }
}

impl AmountWords for Renderer {
    fn words_for(&self, amount: &Amount) -> String {
        match self {
            Self::Direct(speller) => speller.words_for(amount),
            Self::Cached(cache) => cache.words_for(amount),
        }
    }
}

/// Result of rendering one amount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rendered {
    /// Input as typed.
    pub amount: String,
    /// Amount in words; empty when it could not be spelled.
    pub words: String,
    /// Words, or the numeric fallback.
    pub display: String,
}

impl Rendered {
    /// Returns true if the amount could not be spelled.
    pub fn is_blank(&self) -> bool {
        self.words.is_empty()
    }
}

/// Renders every non-blank input line to `out`.
///
/// Returns the number of amounts that could not be spelled. With `strict`,
/// stops at the first one instead.
pub fn render_all<I, S, W>(
    renderer: &Renderer,
    inputs: I,
    json: bool,
    strict: bool,
    out: &mut W,
) -> AppResult<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    W: Write,
{
    let mut blanks = 0;

    for input in inputs {
        let input = input.as_ref();
        if input.trim().is_empty() {
            continue;
        }

        let rendered = renderer.render(input);
        if rendered.is_blank() {
            if strict {
                return Err(AppError::Validation(format!(
                    "Cannot spell amount: {}",
                    rendered.amount
                )));
            }
            blanks += 1;
        }

        write_rendered(out, &rendered, json).map_err(|e| AppError::Internal(e.to_string()))?;
    }

    Ok(blanks)
}

fn write_rendered<W: Write>(out: &mut W, rendered: &Rendered, json: bool) -> io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, rendered)?;
        writeln!(out)
    } else {
        writeln!(out, "{}", rendered.display)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn renderers() -> [Renderer; 2] {
        [
            Renderer::Direct(AmountSpeller::DINAR),
            Renderer::Cached(WordsCache::new()),
        ]
    }

    #[rstest]
    #[case("250.5", "Deux cent cinquante dinars et cinq cents millimes")]
    #[case("250,5", "Deux cent cinquante dinars et cinq cents millimes")]
    #[case("0", "Zéro dinar")]
    #[case(" 1 000 000 ", "Un million dinars")]
    fn test_render_words(#[case] input: &str, #[case] expected: &str) {
        for renderer in renderers() {
            let rendered = renderer.render(input);
            assert_eq!(rendered.words, expected);
            assert_eq!(rendered.display, expected);
            assert!(!rendered.is_blank());
        }
    }

    #[rstest]
    #[case("-5")]
    #[case("abc")]
    #[case("NaN")]
    fn test_render_falls_back_to_input(#[case] input: &str) {
        let rendered = Renderer::Direct(AmountSpeller::DINAR).render(input);
        assert!(rendered.is_blank());
        assert_eq!(rendered.display, input);
    }

    #[test]
    fn test_from_config() {
        let mut config = CacheConfig::default();
        assert!(matches!(Renderer::from_config(&config), Renderer::Cached(_)));
        config.enabled = false;
        assert!(matches!(Renderer::from_config(&config), Renderer::Direct(_)));
    }

    #[test]
    fn test_render_all_text() {
        let mut out = Vec::new();
        let blanks = render_all(
            &Renderer::Direct(AmountSpeller::DINAR),
            ["21", "", "  ", "oops", "80"],
            false,
            false,
            &mut out,
        )
        .unwrap();

        assert_eq!(blanks, 1);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Vingt et un dinars\noops\nQuatre-vingts dinars\n"
        );
    }

    #[test]
    fn test_render_all_json() {
        let mut out = Vec::new();
        render_all(
            &Renderer::Cached(WordsCache::new()),
            ["1000"],
            true,
            false,
            &mut out,
        )
        .unwrap();

        let line = String::from_utf8(out).unwrap();
        let value: serde_json::Value = serde_json::from_str(line.trim()).unwrap();
        assert_eq!(value["amount"], "1000");
        assert_eq!(value["words"], "Mille dinars");
        assert_eq!(value["display"], "Mille dinars");
    }

    #[test]
    fn test_render_all_strict_stops_on_failure() {
        let mut out = Vec::new();
        let result = render_all(
            &Renderer::Direct(AmountSpeller::DINAR),
            ["1", "-1", "2"],
            false,
            true,
            &mut out,
        );

        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(String::from_utf8(out).unwrap(), "Un dinar\n");
    }
}
