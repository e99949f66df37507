//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept in `templates/`,
//! included here as string constants.
//!
//! Templates receive pre-computed data: widths, labels and style names are
//! worked out in Rust (see `render.rs`), so templates only choose what to print
//! and which named style to print it with. Line breaks in the templates are
//! the line breaks in the output.

pub const PAGE_TEMPLATE: &str = include_str!("templates/page.tmp");
pub const CATEGORIES_TEMPLATE: &str = include_str!("templates/categories.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const BROWSE_HELP_TEMPLATE: &str = include_str!("templates/browse_help.tmp");
