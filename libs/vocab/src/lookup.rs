use crate::error::{Error, Result};

/// A named, closed set of variant names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariantSet {
    name: &'static str,
    variants: &'static [&'static str],
}

impl VariantSet {
    pub const fn new(name: &'static str, variants: &'static [&'static str]) -> Self {
        Self { name, variants }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn variants(&self) -> &'static [&'static str] {
        self.variants
    }

    /// Resolve `value` to the declared variant it names, if any.
    pub fn lookup(&self, value: &str) -> Option<&'static str> {
        lookup(value, self)
    }

    /// Like [`VariantSet::lookup`] but reports the vocabulary on failure.
    pub fn parse(&self, value: &str) -> Result<&'static str> {
        self.lookup(value).ok_or_else(|| Error::UnknownVariant {
            vocabulary: self.name,
            value: value.to_string(),
        })
    }

    /// Find a built-in vocabulary by its name (`BasisOfRecord`, `basis-of-record`, ...).
    pub fn by_name(name: &str) -> Result<VariantSet> {
        let wanted = normalize(name);
        crate::vocabularies::ALL
            .iter()
            .find(|set| normalize(set.name) == wanted)
            .copied()
            .ok_or_else(|| Error::UnknownVocabulary(name.to_string()))
    }
}

/// Upper-case `name` and drop the separators `.`, ` `, `_` and `-`.
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, '.' | ' ' | '_' | '-'))
        .flat_map(char::to_uppercase)
        .collect()
}

/// Case and punctuation insensitive lookup of `name` within `set`.
///
/// Returns `None` for an empty name.
pub fn lookup(name: &str, set: &VariantSet) -> Option<&'static str> {
    if name.is_empty() {
        return None;
    }
    let wanted = normalize(name);
    set.variants
        .iter()
        .find(|variant| normalize(variant) == wanted)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLOURS: VariantSet = VariantSet::new("Colour", &["DARK_RED", "LIGHT_BLUE", "GREEN"]);

    #[test]
    fn normalize_strips_separators() {
        assert_eq!(normalize("dark-red"), "DARKRED");
        assert_eq!(normalize("Light.Blue_ x"), "LIGHTBLUEX");
    }

    #[test]
    fn lookup_ignores_case_and_punctuation() {
        assert_eq!(lookup("dark red", &COLOURS), Some("DARK_RED"));
        assert_eq!(lookup("Light-Blue", &COLOURS), Some("LIGHT_BLUE"));
        assert_eq!(lookup("green.", &COLOURS), Some("GREEN"));
        assert_eq!(lookup("purple", &COLOURS), None);
        assert_eq!(lookup("", &COLOURS), None);
    }

    #[test]
    fn parse_reports_vocabulary() {
        let err = COLOURS.parse("purple").unwrap_err();
        assert_eq!(err.to_string(), "cannot parse 'purple' into a known Colour");
    }

    #[test]
    fn by_name_finds_builtin_sets() {
        let set = VariantSet::by_name("basis-of-record").unwrap();
        assert_eq!(set.name(), "BasisOfRecord");
        assert!(VariantSet::by_name("Nope").is_err());
    }
}
