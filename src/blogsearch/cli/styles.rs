//! Styles for the blogsearch CLI.
//!
//! Templates refer to styles by semantic name only (`title`, `page-current`,
//! ...); the names are mapped to concrete `console` styles here, once, through
//! `once_cell::sync::Lazy`. Changing how something looks means changing this
//! file, never a template.
use console::Style;
use once_cell::sync::Lazy;
use outstanding::{rgb_to_ansi256, Theme};

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const TITLE: &str = "title";
    pub const LABEL: &str = "label";
    pub const CATEGORY: &str = "category";
    pub const CONTENT: &str = "content";
    pub const MUTED: &str = "muted";
    pub const PAGE: &str = "page";
    pub const PAGE_CURRENT: &str = "page-current";
    pub const ARROW: &str = "arrow";
    pub const ARROW_DISABLED: &str = "arrow-disabled";
    pub const CATEGORY_SELECTED: &str = "category-selected";
    pub const COMMAND: &str = "command";
    pub const PROMPT: &str = "prompt";
    pub const INFO: &str = "info";
    pub const SUCCESS: &str = "success";
    pub const WARNING: &str = "warning";
    pub const ERROR: &str = "error";
}

pub static BLOG_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(rgb_to_ansi256((154, 154, 154)));
    let accent = Style::new().color256(rgb_to_ansi256((196, 140, 0)));

    Theme::new()
        .add(names::TITLE, Style::new().bold())
        .add(names::LABEL, muted.clone().bold())
        .add(names::CATEGORY, Style::new().cyan())
        .add(names::CONTENT, Style::new())
        .add(names::MUTED, muted.clone().italic())
        .add(names::PAGE, Style::new())
        .add(names::PAGE_CURRENT, accent.clone().bold())
        .add(names::ARROW, accent.clone())
        .add(names::ARROW_DISABLED, muted.clone().dim())
        .add(names::CATEGORY_SELECTED, accent.bold())
        .add(names::COMMAND, Style::new().green())
        .add(names::PROMPT, Style::new().cyan().bold())
        .add(names::INFO, muted)
        .add(names::SUCCESS, Style::new().green())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::ERROR, Style::new().red().bold())
});
