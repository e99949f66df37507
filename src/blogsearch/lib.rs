//! # blogsearch Architecture
//!
//! blogsearch is a **UI-agnostic search-and-page engine** over a small, fixed
//! collection of blog posts. It ships a terminal client, but the terminal client
//! is just one caller of the library.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments and interactive events                  │
//! │  - Renders pages through templates                          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the store, the category set and one QueryState      │
//! │  - Returns a freshly computed page after every action       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One function per user action, returning CmdResult        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (filter.rs, paginate.rs, query.rs)                  │
//! │  - Pure functions plus the query state and its invariants   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore trait                                        │
//! │  - SeedStore (built-in posts), InMemoryStore (custom)       │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! user input → [`query::QueryState`] update → [`filter::filter`] →
//! [`paginate::paginate`] → the UI renders the returned page.
//!
//! Everything is recomputed on each action. At this data size there is nothing
//! worth caching.
//!
//! ## No Failure States in the Engine
//!
//! An empty search, a category with no posts, or a page past the end all
//! degrade to an empty page or an ignored move. The only errors in the crate
//! come from configuration, I/O, and labels that are not in the category set.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user action
//! - [`filter`]: Search and category predicates
//! - [`paginate`]: Page slicing, the page-move guard and page controls
//! - [`query`]: The query state and its page-reset invariant
//! - [`category`]: The selectable category labels
//! - [`store`]: Record storage abstraction and implementations
//! - [`model`]: The `Record` type
//! - [`config`]: Persistent settings (page size)
//! - [`init`]: Wiring for the binary
//! - [`error`]: Error types

pub mod api;
pub mod category;
pub mod commands;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod model;
pub mod paginate;
pub mod query;
pub mod store;
