use crate::category::CategorySet;
use crate::commands::{list, CmdResult};
use crate::error::Result;
use crate::query::QueryState;
use crate::store::RecordStore;

/// Switches the selected category and returns page 1 of the new result.
///
/// An unknown label is an error and leaves `query` untouched.
pub fn select<S: RecordStore>(
    store: &S,
    categories: &CategorySet,
    query: &mut QueryState,
    page_size: usize,
    category: &str,
) -> Result<CmdResult> {
    query.set_category(category, categories)?;
    list::run(store, query, page_size)
}

/// Lists the selectable categories, wildcard first.
pub fn list(categories: &CategorySet) -> Result<CmdResult> {
    Ok(CmdResult::default().with_categories(categories.labels().to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlogError;
    use crate::store::seed::SeedStore;

    #[test]
    fn select_filters_and_rewinds() {
        let store = SeedStore::new();
        let categories = CategorySet::from_records(store.records());
        let mut query = QueryState::new();
        assert!(query.change_page(2, 3));

        let result = select(&store, &categories, &mut query, 5, "NodeJS").unwrap();
        assert_eq!(query.page_number(), 1);
        assert_eq!(result.matched, 3);
    }

    #[test]
    fn unknown_category_leaves_query_alone() {
        let store = SeedStore::new();
        let categories = CategorySet::from_records(store.records());
        let mut query = QueryState::new();
        let before = query.clone();

        let err = select(&store, &categories, &mut query, 5, "Go").unwrap_err();
        assert!(matches!(err, BlogError::UnknownCategory(_)));
        assert_eq!(query, before);
    }

    #[test]
    fn lists_labels() {
        let store = SeedStore::new();
        let categories = CategorySet::from_records(store.records());
        let result = list(&categories).unwrap();
        assert_eq!(
            result.categories,
            vec!["All", "React", "JavaScript", "CSS", "NodeJS"]
        );
    }
}
