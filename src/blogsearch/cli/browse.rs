//! # Interactive Browsing
//!
//! `blogsearch browse` reads one event per line and re-renders the page after
//! each one, so the query state lives for the whole session. Events are handled
//! strictly one at a time, in input order.
//!
//! Input and output are generic so the loop can be driven from tests with
//! in-memory buffers.

use super::render::{render_browse_help, render_messages, render_page, render_prompt};
use blogsearch::api::{BlogApi, CmdMessage};
use blogsearch::error::{BlogError, Result};
use blogsearch::store::RecordStore;
use log::debug;
use std::io::{BufRead, Write};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseEvent {
    Search(String),
    Category(String),
    Page(usize),
    Next,
    Previous,
    Reset,
    Help,
    Quit,
}

impl FromStr for BrowseEvent {
    type Err = String;

    fn from_str(line: &str) -> std::result::Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "search" | "s" | "/" => Ok(BrowseEvent::Search(rest.to_string())),
            "category" | "c" => {
                if rest.is_empty() {
                    Err("Usage: category <name>".to_string())
                } else {
                    Ok(BrowseEvent::Category(rest.to_string()))
                }
            }
            "page" => rest
                .parse()
                .map(BrowseEvent::Page)
                .map_err(|_| format!("Not a page number: {:?}", rest)),
            "next" | "n" => Ok(BrowseEvent::Next),
            "prev" | "previous" | "p" => Ok(BrowseEvent::Previous),
            "reset" => Ok(BrowseEvent::Reset),
            "help" | "?" => Ok(BrowseEvent::Help),
            "quit" | "q" | "exit" => Ok(BrowseEvent::Quit),
            _ => match line.parse() {
                Ok(n) => Ok(BrowseEvent::Page(n)),
                Err(_) => Err(format!("Unknown command: {} (try help)", line)),
            },
        }
    }
}

/// Runs a browsing session until `quit` or end of input.
pub fn run_session<S, R, W>(
    api: &mut BlogApi<S>,
    input: R,
    out: &mut W,
    use_color: Option<bool>,
) -> Result<()>
where
    S: RecordStore,
    R: BufRead,
    W: Write,
{
    let prompt = render_prompt(use_color.unwrap_or(false));

    write!(out, "{}", render_page(&api.view()?, use_color))?;
    write!(out, "{}", prompt)?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "{}", prompt)?;
            out.flush()?;
            continue;
        }

        let event = match line.parse::<BrowseEvent>() {
            Ok(event) => event,
            Err(msg) => {
                write!(out, "{}", render_messages(&[CmdMessage::warning(msg)], use_color))?;
                write!(out, "{}", prompt)?;
                out.flush()?;
                continue;
            }
        };
        debug!("browse event {:?}", event);

        let outcome = match event {
            BrowseEvent::Quit => break,
            BrowseEvent::Help => {
                write!(out, "{}", render_browse_help(use_color))?;
                write!(out, "{}", prompt)?;
                out.flush()?;
                continue;
            }
            BrowseEvent::Search(text) => api.search(&text),
            BrowseEvent::Category(name) => api.select_category(&name),
            BrowseEvent::Page(n) => api.change_page(n),
            BrowseEvent::Next => api.next_page(),
            BrowseEvent::Previous => api.previous_page(),
            BrowseEvent::Reset => api.reset(),
        };

        match outcome {
            Ok(result) => {
                write!(out, "{}", render_messages(&result.messages, use_color))?;
                write!(out, "{}", render_page(&result, use_color))?;
            }
            Err(BlogError::UnknownCategory(name)) => {
                let choices = api.category_set().labels().join(", ");
                let msg = format!("Unknown category: {} (choose from {})", name, choices);
                write!(out, "{}", render_messages(&[CmdMessage::warning(msg)], use_color))?;
            }
            Err(e) => return Err(e),
        }
        write!(out, "{}", prompt)?;
        out.flush()?;
    }

    writeln!(out)?;
    Ok(())
}
