//! DTO definitions for the word catalogue endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::state::word::WordEntry;

/// Word definition submitted when creating or replacing an entry.
///
/// Fields are optional on the wire so that a missing field is reported as a validation
/// failure rather than a deserialization error.
#[derive(Debug, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WordInput {
    /// Category name, letters only. Stored lowercase.
    #[validate(required)]
    pub category: Option<String>,
    /// Word to guess, letters only. Stored lowercase.
    #[validate(required)]
    pub word: Option<String>,
    /// Non-blank hint shown to the player.
    #[validate(required)]
    pub hint: Option<String>,
}

impl TryFrom<WordInput> for WordEntry {
    type Error = ValidationErrors;

    fn try_from(input: WordInput) -> Result<Self, Self::Error> {
        input.validate()?;
        match (input.category, input.word, input.hint) {
            (Some(category), Some(word), Some(hint)) => Ok(WordEntry::new(&category, &word, hint)),
            _ => Err(ValidationErrors::new()),
        }
    }
}

/// Public projection of a word entry.
#[derive(Debug, Clone, Serialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WordResponse {
    /// Lowercase category.
    pub category: String,
    /// Lowercase word.
    pub word: String,
    /// Hint, as submitted.
    pub hint: String,
}

impl From<WordEntry> for WordResponse {
    fn from(entry: WordEntry) -> Self {
        Self {
            category: entry.category().to_owned(),
            word: entry.word().to_owned(),
            hint: entry.hint().to_owned(),
        }
    }
}

/// Generic acknowledgement returned by mutating word endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct ActionResponse {
    /// Human-readable outcome.
    pub message: String,
}

impl ActionResponse {
    /// Wrap an outcome message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_with_missing_hint_is_rejected() {
        let input: WordInput =
            serde_json::from_str(r#"{ "category": "animals", "word": "cat" }"#).unwrap();

        let errors = WordEntry::try_from(input).unwrap_err();
        assert!(errors.field_errors().contains_key("hint"));
    }

    #[test]
    fn complete_input_is_normalized() {
        let input: WordInput = serde_json::from_str(
            r#"{ "category": "Animals", "word": "CAT", "hint": "Meows" }"#,
        )
        .unwrap();

        let entry = WordEntry::try_from(input).unwrap();
        assert_eq!(entry, WordEntry::new("animals", "cat", "Meows"));
    }
}
