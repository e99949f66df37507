//! # API Facade
//!
//! `BlogApi` is the single entry point for every UI. It owns the record store,
//! the derived [`CategorySet`], one [`QueryState`] and the page size, and
//! dispatches each user action to the command layer.
//!
//! Every mutating method returns the freshly computed page, so a UI renders the
//! returned [`CmdResult`] after each action and never recomputes anything
//! itself.
//!
//! The facade does no formatting and no I/O apart from config access.
//!
//! ## Generic Over RecordStore
//!
//! - Production: `BlogApi<SeedStore>`
//! - Testing: `BlogApi<InMemoryStore>` with hand-picked records

use crate::category::CategorySet;
use crate::commands;
use crate::error::{BlogError, Result};
use crate::query::QueryState;
use crate::store::RecordStore;
use log::debug;
use std::path::{Path, PathBuf};

pub struct BlogApi<S: RecordStore> {
    store: S,
    categories: CategorySet,
    query: QueryState,
    page_size: usize,
    config_dir: Option<PathBuf>,
}

impl<S: RecordStore> BlogApi<S> {
    pub fn new(store: S, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(BlogError::InvalidPageSize(page_size));
        }
        let categories = CategorySet::from_records(store.records());
        debug!(
            "api ready: {} records, {} categories, page size {}",
            store.len(),
            categories.len(),
            page_size
        );
        Ok(Self {
            store,
            categories,
            query: QueryState::new(),
            page_size,
            config_dir: None,
        })
    }

    pub fn with_config_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config_dir = Some(dir.into());
        self
    }

    /// The current page, without changing anything.
    pub fn view(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, &self.query, self.page_size)
    }

    pub fn search(&mut self, text: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, &mut self.query, self.page_size, text)
    }

    pub fn select_category(&mut self, category: &str) -> Result<commands::CmdResult> {
        commands::category::select(
            &self.store,
            &self.categories,
            &mut self.query,
            self.page_size,
            category,
        )
    }

    pub fn change_page(&mut self, target: usize) -> Result<commands::CmdResult> {
        self.move_page(PageMove::To(target))
    }

    pub fn next_page(&mut self) -> Result<commands::CmdResult> {
        self.move_page(PageMove::Next)
    }

    pub fn previous_page(&mut self) -> Result<commands::CmdResult> {
        self.move_page(PageMove::Previous)
    }

    fn move_page(&mut self, page_move: PageMove) -> Result<commands::CmdResult> {
        commands::navigate::run(&self.store, &mut self.query, self.page_size, page_move)
    }

    /// Clears search and category and returns to page 1.
    pub fn reset(&mut self) -> Result<commands::CmdResult> {
        self.query.reset();
        self.view()
    }

    pub fn categories(&self) -> Result<commands::CmdResult> {
        commands::category::list(&self.categories)
    }

    pub fn category_set(&self) -> &CategorySet {
        &self.categories
    }

    pub fn query(&self) -> &QueryState {
        &self.query
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Changes the page size and returns to page 1, since the old page number
    /// may not exist under the new size.
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(BlogError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        self.query.rewind();
        Ok(())
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(self.config_dir()?, action)
    }

    fn config_dir(&self) -> Result<&Path> {
        self.config_dir
            .as_deref()
            .ok_or_else(|| BlogError::Config("No config directory available".to_string()))
    }
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::navigate::PageMove;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
