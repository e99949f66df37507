//! Page moves. The move is checked against the page count of the *current*
//! filtered result; a rejected move re-renders the page the user is already on.

use crate::commands::{list, CmdResult};
use crate::error::Result;
use crate::filter::filter;
use crate::paginate::total_pages;
use crate::query::QueryState;
use crate::store::RecordStore;
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    To(usize),
    Next,
    Previous,
}

pub fn run<S: RecordStore>(
    store: &S,
    query: &mut QueryState,
    page_size: usize,
    page_move: PageMove,
) -> Result<CmdResult> {
    let matched = filter(store.records(), query.search_text(), query.category()).len();
    let total = total_pages(matched, page_size);

    let accepted = match page_move {
        PageMove::To(target) => query.change_page(target, total),
        PageMove::Next => query.next_page(total),
        PageMove::Previous => query.previous_page(total),
    };
    if !accepted {
        debug!("ignored {:?}: {} page(s) available", page_move, total);
    }

    Ok(list::run(store, query, page_size)?.with_page_accepted(accepted))
}
