//! # Rendering Module
//!
//! Styled terminal output through the `outstanding` crate: minijinja templates
//! plus the named styles in `styles.rs`, with automatic color detection.
//!
//! Layout work (truncation, labels, which arrow is disabled) happens here in
//! Rust. Templates only print what they are handed, using the style name they
//! are handed.

use super::styles::{names, BLOG_THEME};
use super::templates::{
    BROWSE_HELP_TEMPLATE, CATEGORIES_TEMPLATE, MESSAGES_TEMPLATE, PAGE_TEMPLATE,
};
use blogsearch::api::{CmdMessage, CmdResult, MessageLevel};
use blogsearch::error::Result;
use blogsearch::model::{Record, ALL_CATEGORIES};
use blogsearch::paginate::{PageControls, PageView};
use blogsearch::query::QueryState;
use outstanding::{render, render_with_color, ThemeChoice};
use serde::Serialize;
use unicode_width::UnicodeWidthChar;

pub const LINE_WIDTH: usize = 100;
const INDENT: usize = 2;
pub const NO_RESULTS: &str = "No results found. Try a different search.";
pub const PREVIOUS_MARKER: &str = "←";
pub const NEXT_MARKER: &str = "→";

#[derive(Serialize)]
struct RecordData {
    title: String,
    category: String,
    content: String,
}

#[derive(Serialize)]
struct PageLinkData {
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct ControlsData {
    previous: &'static str,
    previous_style: &'static str,
    next: &'static str,
    next_style: &'static str,
    pages: Vec<PageLinkData>,
}

#[derive(Serialize)]
struct PageData {
    criteria: String,
    records: Vec<RecordData>,
    empty: bool,
    empty_message: &'static str,
    controls: Option<ControlsData>,
    summary: String,
}

#[derive(Serialize)]
struct CategoryData {
    marker: &'static str,
    label: String,
    style: &'static str,
}

#[derive(Serialize)]
struct CategoriesData {
    categories: Vec<CategoryData>,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct HelpLine {
    usage: &'static str,
    padding: String,
    description: &'static str,
}

#[derive(Serialize)]
struct HelpData {
    commands: Vec<HelpLine>,
}

#[derive(Serialize)]
struct JsonPage<'a> {
    query: Option<&'a QueryState>,
    matched: usize,
    page: Option<&'a PageView>,
    controls: Option<&'a PageControls>,
}

const BROWSE_COMMANDS: [(&str, &str); 8] = [
    ("search <text>", "filter titles; empty text clears (alias: / <text>)"),
    ("category <name>", "pick a category, All for every post (alias: c)"),
    ("page <n>", "jump to a page (alias: just the number)"),
    ("next", "next page (alias: n)"),
    ("prev", "previous page (alias: p)"),
    ("reset", "clear search and category"),
    ("help", "show this help (alias: ?)"),
    ("quit", "leave (alias: q)"),
];

fn render_themed<T: Serialize>(template: &str, data: &T, use_color: Option<bool>) -> String {
    let theme = ThemeChoice::from(&*BLOG_THEME);
    match use_color {
        Some(c) => render_with_color(template, data, theme, c),
        None => render(template, data, theme),
    }
    .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

/// Renders the page held by `result`: the records, the page controls when the
/// result spans several pages, and a one-line summary.
pub fn render_page(result: &CmdResult, use_color: Option<bool>) -> String {
    let criteria = result.query.as_ref().map(criteria_line).unwrap_or_default();

    let Some(view) = &result.page_view else {
        return render_themed(PAGE_TEMPLATE, &empty_page(criteria), use_color);
    };

    let records: Vec<RecordData> = view.visible_records.iter().map(record_data).collect();
    let data = PageData {
        criteria,
        empty: records.is_empty(),
        records,
        empty_message: NO_RESULTS,
        controls: result.controls.as_ref().map(controls_data),
        summary: summary_line(result.matched, view),
    };

    render_themed(PAGE_TEMPLATE, &data, use_color)
}

fn empty_page(criteria: String) -> PageData {
    PageData {
        criteria,
        records: Vec::new(),
        empty: true,
        empty_message: NO_RESULTS,
        controls: None,
        summary: String::new(),
    }
}

fn record_data(record: &Record) -> RecordData {
    let width = LINE_WIDTH.saturating_sub(INDENT);
    RecordData {
        title: truncate_to_width(&record.title, LINE_WIDTH),
        category: record.category.clone(),
        content: truncate_to_width(&record.content, width),
    }
}

fn controls_data(controls: &PageControls) -> ControlsData {
    let pages = controls
        .pages
        .iter()
        .map(|link| {
            if link.is_current {
                PageLinkData {
                    label: format!("[{}]", link.number),
                    style: names::PAGE_CURRENT,
                }
            } else {
                PageLinkData {
                    label: link.number.to_string(),
                    style: names::PAGE,
                }
            }
        })
        .collect();

    ControlsData {
        previous: PREVIOUS_MARKER,
        previous_style: arrow_style(controls.previous_enabled),
        next: NEXT_MARKER,
        next_style: arrow_style(controls.next_enabled),
        pages,
    }
}

fn arrow_style(enabled: bool) -> &'static str {
    if enabled {
        names::ARROW
    } else {
        names::ARROW_DISABLED
    }
}

fn criteria_line(query: &QueryState) -> String {
    let mut parts = Vec::new();
    if !query.search_text().is_empty() {
        parts.push(format!("Search: \"{}\"", query.search_text()));
    }
    if query.category() != ALL_CATEGORIES {
        parts.push(format!("Category: {}", query.category()));
    }
    parts.join("  ")
}

fn summary_line(matched: usize, view: &PageView) -> String {
    if matched == 0 {
        return String::new();
    }
    let noun = if matched == 1 { "post" } else { "posts" };
    format!(
        "{} {} · page {} of {}",
        matched, noun, view.page_number, view.total_pages
    )
}

/// The page as pretty-printed JSON.
pub fn render_page_json(result: &CmdResult) -> Result<String> {
    let page = JsonPage {
        query: result.query.as_ref(),
        matched: result.matched,
        page: result.page_view.as_ref(),
        controls: result.controls.as_ref(),
    };
    Ok(serde_json::to_string_pretty(&page)?)
}

/// Lists category labels, marking `selected`.
pub fn render_categories(labels: &[String], selected: &str, use_color: Option<bool>) -> String {
    let categories = labels
        .iter()
        .map(|label| {
            let is_selected = label == selected;
            CategoryData {
                marker: if is_selected { "* " } else { "  " },
                label: label.clone(),
                style: if is_selected {
                    names::CATEGORY_SELECTED
                } else {
                    names::CATEGORY
                },
            }
        })
        .collect();

    render_themed(CATEGORIES_TEMPLATE, &CategoriesData { categories }, use_color)
}

pub fn render_messages(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let messages = messages
        .iter()
        .map(|msg| MessageData {
            content: msg.content.clone(),
            style: match msg.level {
                MessageLevel::Info => names::INFO,
                MessageLevel::Success => names::SUCCESS,
                MessageLevel::Warning => names::WARNING,
                MessageLevel::Error => names::ERROR,
            },
        })
        .collect();

    render_themed(MESSAGES_TEMPLATE, &MessagesData { messages }, use_color)
}

pub fn render_browse_help(use_color: Option<bool>) -> String {
    let width = BROWSE_COMMANDS
        .iter()
        .map(|(usage, _)| usage.len())
        .max()
        .unwrap_or(0)
        + 3;
    let commands = BROWSE_COMMANDS
        .iter()
        .map(|&(usage, description)| HelpLine {
            usage,
            padding: " ".repeat(width - usage.len()),
            description,
        })
        .collect();

    render_themed(BROWSE_HELP_TEMPLATE, &HelpData { commands }, use_color)
}

pub fn render_prompt(use_color: bool) -> String {
    if use_color {
        BLOG_THEME.styles().apply(names::PROMPT, "> ")
    } else {
        "> ".to_string()
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
