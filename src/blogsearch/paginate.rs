//! # Paginator
//!
//! Slices a filtered result into fixed-size pages.
//!
//! - `total_pages = ceil(len / page_size)`, and `0` for an empty result.
//! - Page `n` starts at index `(n - 1) * page_size` and holds at most
//!   `page_size` records.
//! - A page outside `1..=total_pages` is an empty slice, never a failure.
//!
//! Range checking for navigation lives in [`accepts_page`]: the only guard
//! against moving to a page that does not exist. Nothing clamps a page number
//! elsewhere.
//!
//! [`page_controls`] derives what a UI needs to draw navigation. Controls exist
//! only when the result does not fit on a single page.

use crate::model::Record;
use serde::Serialize;

/// The records visible on one page plus the page count they were cut from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub visible_records: Vec<Record>,
    pub page_number: usize,
    pub total_pages: usize,
}

impl PageView {
    pub fn is_empty(&self) -> bool {
        self.visible_records.is_empty()
    }
}

/// One numbered page entry in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLink {
    pub number: usize,
    pub is_current: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageControls {
    pub pages: Vec<PageLink>,
    pub previous_enabled: bool,
    pub next_enabled: bool,
}

pub fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

pub fn paginate(subset: &[&Record], page_size: usize, page_number: usize) -> PageView {
    let total_pages = total_pages(subset.len(), page_size);

    let visible_records = if page_number == 0 || page_size == 0 {
        Vec::new()
    } else {
        let start = (page_number - 1).saturating_mul(page_size);
        subset
            .iter()
            .skip(start)
            .take(page_size)
            .map(|record| (*record).clone())
            .collect()
    };

    PageView {
        visible_records,
        page_number,
        total_pages,
    }
}

/// Whether a request to move to `target` should be honored.
pub fn accepts_page(target: usize, total_pages: usize) -> bool {
    target >= 1 && target <= total_pages
}

pub fn page_controls(
    filtered_len: usize,
    page_size: usize,
    page_number: usize,
) -> Option<PageControls> {
    if page_size == 0 || filtered_len <= page_size {
        return None;
    }

    let total = total_pages(filtered_len, page_size);
    let pages = (1..=total)
        .map(|number| PageLink {
            number,
            is_current: number == page_number,
        })
        .collect();

    Some(PageControls {
        pages,
        previous_enabled: page_number != 1,
        next_enabled: page_number != total,
    })
}
