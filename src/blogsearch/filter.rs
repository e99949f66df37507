//! # Filter Engine
//!
//! Maps `(records, search text, category)` to the ordered subset of records
//! that satisfy both predicates:
//!
//! - **search**: the record's title, lowercased, contains the lowercased search
//!   text. An empty search text matches every title.
//! - **category**: the category is [`ALL_CATEGORIES`] or equals the record's
//!   category exactly (case-sensitive).
//!
//! The output is a sub-sequence of the input: store order is kept and nothing is
//! ranked or deduplicated. There are no error cases; a query that matches
//! nothing yields an empty vector.

use crate::model::{Record, ALL_CATEGORIES};

pub fn matches_search(record: &Record, search_text: &str) -> bool {
    record
        .title
        .to_lowercase()
        .contains(&search_text.to_lowercase())
}

pub fn matches_category(record: &Record, category: &str) -> bool {
    category == ALL_CATEGORIES || record.category == category
}

/// Returns the records matching both predicates, in input order.
pub fn filter<'a, I>(records: I, search_text: &str, category: &str) -> Vec<&'a Record>
where
    I: IntoIterator<Item = &'a Record>,
{
    let needle = search_text.to_lowercase();
    records
        .into_iter()
        .filter(|record| {
            record.title.to_lowercase().contains(&needle) && matches_category(record, category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::SeedStore;
    use crate::store::RecordStore;

    fn ids(records: &[&Record]) -> Vec<u32> {
        records.iter().map(|r| r.id).collect()
    }

    #[test]
    fn empty_query_returns_everything_in_order() {
        let store = SeedStore::new();
        let result = filter(store.records(), "", ALL_CATEGORIES);
        assert_eq!(result.len(), 14);
        assert_eq!(ids(&result), (1..=14).collect::<Vec<_>>());
    }

    #[test]
    fn search_is_case_insensitive() {
        let store = SeedStore::new();
        let upper = filter(store.records(), "REACT", ALL_CATEGORIES);
        let lower = filter(store.records(), "react", ALL_CATEGORIES);
        assert_eq!(upper, lower);
        assert_eq!(ids(&lower), vec![1, 10]);
    }

    #[test]
    fn search_matches_titles_only() {
        // "Flexbox" only appears in content.
        let store = SeedStore::new();
        assert!(filter(store.records(), "flexbox", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn basics_matches_react_and_node() {
        let store = SeedStore::new();
        let result = filter(store.records(), "basics", ALL_CATEGORIES);
        // "GraphQL Basics" also contains the term.
        assert_eq!(ids(&result), vec![1, 6, 12]);
    }

    #[test]
    fn category_filter_is_exact() {
        let store = SeedStore::new();
        assert_eq!(ids(&filter(store.records(), "", "CSS")), vec![3, 5, 8, 13]);
        assert!(filter(store.records(), "", "css").is_empty());
    }

    #[test]
    fn both_predicates_must_hold() {
        let store = SeedStore::new();
        let result = filter(store.records(), "basics", "NodeJS");
        assert_eq!(ids(&result), vec![6]);
    }

    #[test]
    fn unknown_category_yields_nothing() {
        let store = SeedStore::new();
        assert!(filter(store.records(), "", "Rust").is_empty());
    }

    #[test]
    fn no_match_yields_empty() {
        let store = SeedStore::new();
        assert!(filter(store.records(), "zzz", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn empty_input_yields_empty() {
        let records: Vec<Record> = Vec::new();
        assert!(filter(&records, "", ALL_CATEGORIES).is_empty());
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let store = SeedStore::new();
        for query in ["", "a", "basics", "css", "zzz"] {
            let once = filter(store.records(), query, ALL_CATEGORIES);
            let twice = filter(once.iter().copied(), query, ALL_CATEGORIES);
            assert_eq!(once, twice, "query {:?}", query);
        }
    }

    #[test]
    fn predicates_agree_with_filter() {
        let record = Record::new(1, "Hooks in React", "React", "");
        assert!(matches_search(&record, "HOOKS"));
        assert!(matches_search(&record, ""));
        assert!(!matches_search(&record, "vue"));
        assert!(matches_category(&record, "All"));
        assert!(matches_category(&record, "React"));
        assert!(!matches_category(&record, "CSS"));
    }
}
