use clap::{Parser, Subcommand};

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.1.0" for releases, "0.1.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("BLOGSEARCH_GIT_HASH");
    const IS_RELEASE: &str = env!("BLOGSEARCH_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "blogsearch", bin_name = "blogsearch", version = get_version())]
#[command(about = "Search, filter and page through blog posts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of posts
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Only posts whose title contains this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,

        /// Only posts in this category (see `categories`)
        #[arg(short, long)]
        category: Option<String>,

        /// Page to show; out-of-range pages are ignored
        #[arg(short, long)]
        page: Option<usize>,

        /// Posts per page (overrides config)
        #[arg(short = 'n', long)]
        page_size: Option<usize>,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the selectable categories
    #[command(alias = "cats", display_order = 2)]
    Categories,

    /// Browse interactively, one command per line on stdin
    #[command(alias = "b", display_order = 3)]
    Browse {
        /// Posts per page (overrides config)
        #[arg(short = 'n', long)]
        page_size: Option<usize>,
    },

    /// Get or set configuration
    #[command(display_order = 4)]
    Config {
        /// Configuration key (e.g., page-size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
