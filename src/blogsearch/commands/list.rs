use crate::commands::CmdResult;
use crate::error::{BlogError, Result};
use crate::filter::filter;
use crate::paginate::{page_controls, paginate};
use crate::query::QueryState;
use crate::store::RecordStore;
use log::debug;

/// Computes the page the query currently points at.
pub fn run<S: RecordStore>(store: &S, query: &QueryState, page_size: usize) -> Result<CmdResult> {
    if page_size == 0 {
        return Err(BlogError::InvalidPageSize(page_size));
    }

    let filtered = filter(store.records(), query.search_text(), query.category());
    let view = paginate(&filtered, page_size, query.page_number());
    let controls = page_controls(filtered.len(), page_size, query.page_number());

    debug!(
        "query search={:?} category={:?} page={} matched={} total_pages={}",
        query.search_text(),
        query.category(),
        query.page_number(),
        filtered.len(),
        view.total_pages
    );

    Ok(CmdResult::default()
        .with_matched(filtered.len())
        .with_page_view(view)
        .with_controls(controls)
        .with_query(query.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::CategorySet;
    use crate::store::seed::SeedStore;

    fn visible_ids(result: &CmdResult) -> Vec<u32> {
        result
            .page_view
            .as_ref()
            .unwrap()
            .visible_records
            .iter()
            .map(|r| r.id)
            .collect()
    }

    #[test]
    fn first_page_of_everything() {
        let store = SeedStore::new();
        let result = run(&store, &QueryState::new(), 5).unwrap();
        assert_eq!(result.matched, 14);
        assert_eq!(result.page_view.as_ref().unwrap().total_pages, 3);
        assert_eq!(visible_ids(&result), vec![1, 2, 3, 4, 5]);
        assert!(result.controls.is_some());
    }

    #[test]
    fn css_fits_on_one_page_without_controls() {
        let store = SeedStore::new();
        let categories = CategorySet::from_records(store.records());
        let mut query = QueryState::new();
        query.set_category("CSS", &categories).unwrap();

        let result = run(&store, &query, 5).unwrap();
        assert_eq!(visible_ids(&result), vec![3, 5, 8, 13]);
        assert_eq!(result.page_view.as_ref().unwrap().total_pages, 1);
        assert!(result.controls.is_none());
    }

    #[test]
    fn no_match_has_no_pages() {
        let store = SeedStore::new();
        let mut query = QueryState::new();
        query.set_search("zzz");

        let result = run(&store, &query, 5).unwrap();
        let view = result.page_view.as_ref().unwrap();
        assert!(view.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(result.matched, 0);
        assert!(result.controls.is_none());
    }

    #[test]
    fn zero_page_size_is_an_error() {
        let store = SeedStore::new();
        assert!(matches!(
            run(&store, &QueryState::new(), 0),
            Err(BlogError::InvalidPageSize(0))
        ));
    }

    #[test]
    fn echoes_the_query() {
        let store = SeedStore::new();
        let mut query = QueryState::new();
        query.set_search("Hooks");
        let result = run(&store, &query, 5).unwrap();
        assert_eq!(result.query.as_ref().unwrap().search_text(), "hooks");
    }
}
