//! # Query State
//!
//! The three fields a user can change: search text, selected category and
//! current page. A `QueryState` is a plain value owned by whoever drives the
//! UI (normally [`crate::api::BlogApi`]); there is no global instance.
//!
//! ## Invariants
//!
//! - `search_text` is always stored lowercased.
//! - `category` is always a member of the [`CategorySet`] it was checked against.
//! - `page_number >= 1`.
//! - **Criteria change rewinds**: any change to the search text or the category
//!   moves back to page 1, so a narrower result can never leave the user on a
//!   page that no longer exists. [`QueryState::set_search`] and
//!   [`QueryState::set_category`] are the only ways to change the criteria and
//!   both go through [`QueryState::rewind`].
//! - Page moves are guarded by [`accepts_page`]; a rejected move leaves the
//!   state untouched.

use crate::category::CategorySet;
use crate::error::{BlogError, Result};
use crate::model::ALL_CATEGORIES;
use crate::paginate::accepts_page;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryState {
    search_text: String,
    category: String,
    page_number: usize,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: ALL_CATEGORIES.to_string(),
            page_number: 1,
        }
    }
}

impl QueryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn set_search(&mut self, text: &str) {
        self.search_text = text.to_lowercase();
        self.rewind();
    }

    /// Selects a category. Labels outside `categories` are refused and the
    /// state is left as it was.
    pub fn set_category(&mut self, category: &str, categories: &CategorySet) -> Result<()> {
        if !categories.contains(category) {
            return Err(BlogError::UnknownCategory(category.to_string()));
        }
        self.category = category.to_string();
        self.rewind();
        Ok(())
    }

    /// Moves to `target` if it is within `1..=total_pages`. Returns whether the
    /// move happened.
    pub fn change_page(&mut self, target: usize, total_pages: usize) -> bool {
        if !accepts_page(target, total_pages) {
            return false;
        }
        self.page_number = target;
        true
    }

    pub fn next_page(&mut self, total_pages: usize) -> bool {
        match self.page_number.checked_add(1) {
            Some(target) => self.change_page(target, total_pages),
            None => false,
        }
    }

    pub fn previous_page(&mut self, total_pages: usize) -> bool {
        match self.page_number.checked_sub(1) {
            Some(target) => self.change_page(target, total_pages),
            None => false,
        }
    }

    /// Back to page 1 without touching the criteria.
    pub fn rewind(&mut self) {
        self.page_number = 1;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
