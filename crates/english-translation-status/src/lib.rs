//! Views field reporting the publish status of a node's English translation.

use std::fmt;

use site_support::{Entity, ResultRow, ViewsField, ViewsQuery};

const ENGLISH: &str = "en";

/// Display value produced for a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationStatus {
    Published,
    Unpublished,
    Missing,
    NotApplicable,
}

impl fmt::Display for TranslationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TranslationStatus::Published => "Yes (Published)",
            TranslationStatus::Unpublished => "Yes (Unpublished)",
            TranslationStatus::Missing => "No",
            TranslationStatus::NotApplicable => "N/A",
        };
        f.write_str(label)
    }
}

/// Computed field: English translation publish status of the row's node.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishTranslationStatusField;

impl EnglishTranslationStatusField {
    pub fn new() -> Self {
        Self
    }

    /// Status for a single row entity.
    pub fn status(&self, row: &ResultRow) -> TranslationStatus {
        let Some(Entity::Node(node)) = &row.entity else {
            return TranslationStatus::NotApplicable;
        };

        match node.translation(ENGLISH) {
            Some(translation) if translation.published => TranslationStatus::Published,
            Some(_) => TranslationStatus::Unpublished,
            None => TranslationStatus::Missing,
        }
    }
}

impl ViewsField for EnglishTranslationStatusField {
    // The value is computed from the loaded entity; the backing query stays
    // untouched.
    fn query(&self, _query: &mut ViewsQuery) {}

    fn render(&self, row: &ResultRow) -> String {
        self.status(row).to_string()
    }
}
