use validator::{Validate, ValidationErrors};

use crate::{
    dao::models::WordEntity,
    dto::validation::{validate_hint, validate_lowercase_letters},
};

/// A guessable word, normalized so that `category` and `word` are lowercase.
///
/// Entries are identified by their `word`: the store never holds two entries with the same
/// normalized word, whatever their category. `==` is structural and compares every field, so
/// two entries for the same word with different hints are unequal; compare [`WordEntry::word`]
/// to test identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    category: String,
    word: String,
    hint: String,
}

impl WordEntry {
    /// Build an entry, lowercasing `category` and `word`. The hint is kept verbatim.
    ///
    /// Construction never fails; call [`Validate::validate`] before storing the entry.
    pub fn new(category: &str, word: &str, hint: impl Into<String>) -> Self {
        Self {
            category: category.to_lowercase(),
            word: word.to_lowercase(),
            hint: hint.into(),
        }
    }

    /// Lowercase category the entry is drawn from.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Lowercase word to guess; also the entry's identity in the store.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// Hint shown to the player, as given.
    pub fn hint(&self) -> &str {
        &self.hint
    }
}

impl Validate for WordEntry {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(e) = validate_lowercase_letters(&self.category) {
            errors.add("category", e);
        }
        if let Err(e) = validate_lowercase_letters(&self.word) {
            errors.add("word", e);
        }
        if let Err(e) = validate_hint(&self.hint) {
            errors.add("hint", e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl From<WordEntity> for WordEntry {
    fn from(entity: WordEntity) -> Self {
        Self::new(&entity.category, &entity.word, entity.hint)
    }
}

impl From<WordEntry> for WordEntity {
    fn from(entry: WordEntry) -> Self {
        Self {
            category: entry.category,
            word: entry.word,
            hint: entry.hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructor_lowercases_category_and_word_only() {
        let entry = WordEntry::new("USA", "Texas", "Lone Star State");

        assert_eq!(entry.category(), "usa");
        assert_eq!(entry.word(), "texas");
        assert_eq!(entry.hint(), "Lone Star State");
        assert!(entry.validate().is_ok());
    }

    #[test]
    fn equality_compares_every_field_while_identity_is_the_word() {
        let original = WordEntry::new("animals", "Cat", "Meows");
        let rehinted = WordEntry::new("pets", "cat", "Purrs");

        assert_ne!(original, rehinted);
        assert_eq!(original.word(), rehinted.word());
        assert_eq!(original, WordEntry::new("ANIMALS", "cat", "Meows"));
    }

    #[test]
    fn digits_in_category_fail_validation() {
        let errors = WordEntry::new("us1", "texas", "state").validate().unwrap_err();

        assert!(errors.field_errors().contains_key("category"));
        assert!(!errors.field_errors().contains_key("word"));
    }

    #[test]
    fn blank_fields_are_reported_together() {
        let errors = WordEntry::new("", "", "   ").validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("category"));
        assert!(fields.contains_key("word"));
        assert!(fields.contains_key("hint"));
    }

    #[test]
    fn entity_conversion_normalizes_legacy_records() {
        let entry = WordEntry::from(WordEntity {
            category: "Animals".into(),
            word: "Cat".into(),
            hint: "Meows".into(),
        });

        assert_eq!(entry, WordEntry::new("animals", "cat", "Meows"));
    }
}
