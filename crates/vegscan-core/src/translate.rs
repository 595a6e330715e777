//! Static source-language to English lookup for category and ingredient labels.

use std::collections::BTreeMap;

/// Exact-match lookup table. Unknown input is returned unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translator {
    table: BTreeMap<String, String>,
}

const DEFAULT_TABLE: &[(&str, &str)] = &[
    ("Congelado", "Frozen"),
    ("Vegetal", "Vegetable"),
    ("Proteína Vegetal", "Plant Protein"),
    ("Vegan", "Vegan"),
    ("Hambúrgueres", "Burgers"),
    ("Almôndegas", "Meatballs"),
    ("Soja", "Soy"),
    ("Lentilha", "Lentil"),
    ("Tofu", "Tofu"),
    ("Seitan", "Seitan"),
];

impl Translator {
    #[must_use]
    pub fn new(table: BTreeMap<String, String>) -> Self {
        Self { table }
    }

    /// Translates `text`, falling back to `text` itself when it has no entry.
    #[must_use]
    pub fn translate(&self, text: &str) -> String {
        self.table
            .get(text)
            .cloned()
            .unwrap_or_else(|| text.to_owned())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.table.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn default_table() -> BTreeMap<String, String> {
        DEFAULT_TABLE
            .iter()
            .map(|(from, to)| ((*from).to_owned(), (*to).to_owned()))
            .collect()
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new(Self::default_table())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_key_maps_to_its_value() {
        let translator = Translator::default();
        for (from, to) in DEFAULT_TABLE {
            assert_eq!(translator.translate(from), *to, "translating {from:?}");
        }
    }

    #[test]
    fn unknown_input_passes_through() {
        let translator = Translator::default();
        for input in ["Refrigerado", "", "congelado", "Plant Protein", "Grão-de-bico"] {
            assert_eq!(translator.translate(input), input);
        }
    }

    #[test]
    fn lookup_is_exact_not_fuzzy() {
        let translator = Translator::default();
        assert_eq!(translator.translate(" Congelado"), " Congelado");
        assert_eq!(translator.translate("VEGETAL"), "VEGETAL");
    }

    #[test]
    fn custom_table_replaces_defaults() {
        let mut table = BTreeMap::new();
        table.insert("Fresco".to_string(), "Fresh".to_string());
        let translator = Translator::new(table);
        assert_eq!(translator.translate("Fresco"), "Fresh");
        assert_eq!(translator.translate("Congelado"), "Congelado");
        assert_eq!(translator.entries().count(), 1);
    }
}
