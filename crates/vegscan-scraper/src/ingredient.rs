//! Main-ingredient inference from product names.

use regex::{Regex, RegexBuilder};

use crate::error::ScraperError;

/// Case-insensitive alternation over a fixed ingredient vocabulary.
///
/// The first match in the name wins. The returned token is the vocabulary
/// spelling with its first letter upper-cased (`"SOJA"` and `"soja"` both
/// yield `"Soja"`), so it lines up with the translation table keys.
#[derive(Debug, Clone)]
pub struct IngredientMatcher {
    pattern: Option<Regex>,
    vocabulary: Vec<String>,
}

impl IngredientMatcher {
    /// # Errors
    ///
    /// Returns [`ScraperError::InvalidVocabulary`] if the alternation cannot
    /// be compiled.
    pub fn new<S: AsRef<str>>(vocabulary: &[S]) -> Result<Self, ScraperError> {
        let vocabulary: Vec<String> = vocabulary
            .iter()
            .map(|v| v.as_ref().trim().to_owned())
            .filter(|v| !v.is_empty())
            .collect();

        let pattern = if vocabulary.is_empty() {
            None
        } else {
            let alternation = vocabulary
                .iter()
                .map(|v| regex::escape(v))
                .collect::<Vec<_>>()
                .join("|");
            Some(
                RegexBuilder::new(&alternation)
                    .case_insensitive(true)
                    .build()?,
            )
        };

        Ok(Self {
            pattern,
            vocabulary,
        })
    }

    /// Returns the canonical token for the first vocabulary hit in `name`.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<String> {
        let found = self.pattern.as_ref()?.find(name)?.as_str().to_lowercase();
        self.vocabulary
            .iter()
            .find(|v| v.to_lowercase() == found)
            .map(|v| capitalize(v))
    }
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher() -> IngredientMatcher {
        IngredientMatcher::new(&["vegan", "vegetal", "tofu", "seitan", "soja", "lentilha"]).unwrap()
    }

    #[test]
    fn matches_case_insensitively() {
        let m = matcher();
        assert_eq!(m.find("Hambúrguer de SOJA").as_deref(), Some("Soja"));
        assert_eq!(m.find("tofu fumado").as_deref(), Some("Tofu"));
    }

    #[test]
    fn first_match_in_name_wins() {
        let m = matcher();
        assert_eq!(
            m.find("Almôndegas de Lentilha com Tofu").as_deref(),
            Some("Lentilha")
        );
        assert_eq!(m.find("Tofu com Lentilha").as_deref(), Some("Tofu"));
    }

    #[test]
    fn matches_inside_words() {
        assert_eq!(
            matcher().find("Salsichas Proteína-vegetal").as_deref(),
            Some("Vegetal")
        );
    }

    #[test]
    fn no_match_is_none() {
        assert!(matcher().find("Grão-de-bico Estufado").is_none());
        assert!(matcher().find("").is_none());
    }

    #[test]
    fn empty_vocabulary_never_matches() {
        let m = IngredientMatcher::new::<&str>(&[]).unwrap();
        assert!(m.find("tofu").is_none());
    }

    #[test]
    fn vocabulary_is_escaped() {
        let m = IngredientMatcher::new(&["a.b"]).unwrap();
        assert!(m.find("axb").is_none());
        assert_eq!(m.find("A.B burger").as_deref(), Some("A.b"));
    }
}
