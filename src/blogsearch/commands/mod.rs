use crate::config::BlogConfig;
use crate::paginate::{PageControls, PageView};
use crate::query::QueryState;

pub mod category;
pub mod config;
pub mod list;
pub mod navigate;
pub mod search;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The query the page was computed for.
    pub query: Option<QueryState>,
    pub page_view: Option<PageView>,
    /// Present only when the filtered result spans more than one page.
    pub controls: Option<PageControls>,
    /// Size of the filtered result before pagination.
    pub matched: usize,
    /// Set by page moves: whether the requested page was accepted.
    pub page_accepted: Option<bool>,
    pub categories: Vec<String>,
    pub config: Option<BlogConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_query(mut self, query: QueryState) -> Self {
        self.query = Some(query);
        self
    }

    pub fn with_page_view(mut self, view: PageView) -> Self {
        self.page_view = Some(view);
        self
    }

    pub fn with_controls(mut self, controls: Option<PageControls>) -> Self {
        self.controls = controls;
        self
    }

    pub fn with_matched(mut self, matched: usize) -> Self {
        self.matched = matched;
        self
    }

    pub fn with_page_accepted(mut self, accepted: bool) -> Self {
        self.page_accepted = Some(accepted);
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_config(mut self, config: BlogConfig) -> Self {
        self.config = Some(config);
        self
    }
}
