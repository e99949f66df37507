use serde::{Deserialize, Serialize};

/// Wildcard category label; selecting it matches every record.
pub const ALL_CATEGORIES: &str = "All";

/// A single blog post. Records are created once when the store is built and
/// never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub content: String,
}

impl Record {
    pub fn new(
        id: u32,
        title: impl Into<String>,
        category: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            category: category.into(),
            content: content.into(),
        }
    }
}
