use crate::commands::{list, CmdResult};
use crate::error::Result;
use crate::query::QueryState;
use crate::store::RecordStore;

/// Replaces the search text and returns page 1 of the new result.
pub fn run<S: RecordStore>(
    store: &S,
    query: &mut QueryState,
    page_size: usize,
    text: &str,
) -> Result<CmdResult> {
    query.set_search(text);
    list::run(store, query, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed::SeedStore;

    #[test]
    fn search_from_a_later_page_lands_on_page_one() {
        let store = SeedStore::new();
        let mut query = QueryState::new();
        assert!(query.change_page(3, 3));

        let result = run(&store, &mut query, 5, "Basics").unwrap();
        assert_eq!(query.page_number(), 1);

        let ids: Vec<u32> = result
            .page_view
            .unwrap()
            .visible_records
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 6, 12]);
    }

    #[test]
    fn clearing_search_shows_everything_again() {
        let store = SeedStore::new();
        let mut query = QueryState::new();
        run(&store, &mut query, 5, "zzz").unwrap();
        let result = run(&store, &mut query, 5, "").unwrap();
        assert_eq!(result.matched, 14);
    }
}
