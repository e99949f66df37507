//! The set of category labels a user can pick from.
//!
//! The set is derived from the store rather than declared separately, so every
//! record's category is guaranteed to be selectable. The wildcard
//! [`ALL_CATEGORIES`] always comes first; the rest follow in the order each
//! category first appears in the store.

use crate::model::{Record, ALL_CATEGORIES};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySet {
    labels: Vec<String>,
}

impl CategorySet {
    pub fn from_records(records: &[Record]) -> Self {
        let mut labels = vec![ALL_CATEGORIES.to_string()];
        for record in records {
            if !labels.iter().any(|label| label == &record.category) {
                labels.push(record.category.clone());
            }
        }
        Self { labels }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Exact, case-sensitive membership.
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Number of labels, wildcard included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Never true: the wildcard is always present.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

impl Default for CategorySet {
    fn default() -> Self {
        Self::from_records(&[])
    }
}
