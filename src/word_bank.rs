use crate::error::QuizError;
use crate::models::WordPair;
use std::collections::BTreeMap;

const BUNDLED_WORDS: &str = include_str!("../data/words.json");

/// Category name to its ordered list of word pairs. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBank {
    categories: BTreeMap<String, Vec<WordPair>>,
}

impl WordBank {
    pub fn bundled() -> Result<Self, QuizError> {
        Self::from_json(BUNDLED_WORDS)
    }

    pub fn from_json(json: &str) -> Result<Self, QuizError> {
        let categories: BTreeMap<String, Vec<WordPair>> = serde_json::from_str(json)?;
        Self::new(categories)
    }

    pub fn new(categories: BTreeMap<String, Vec<WordPair>>) -> Result<Self, QuizError> {
        if categories.is_empty() {
            return Err(QuizError::EmptyWordBank);
        }
        if let Some((name, _)) = categories.iter().find(|(_, words)| words.is_empty()) {
            return Err(QuizError::EmptyCategory(name.clone()));
        }
        Ok(Self { categories })
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn category_at(&self, index: usize) -> Option<&str> {
        self.category_names().nth(index)
    }

    pub fn words(&self, category: &str) -> Option<&[WordPair]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}
