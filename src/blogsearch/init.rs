use crate::api::BlogApi;
use crate::config::BlogConfig;
use crate::error::Result;
use crate::store::seed::SeedStore;
use directories::ProjectDirs;
use log::debug;
use std::path::PathBuf;

/// Overrides the config directory; used by tests and portable installs.
pub const HOME_ENV: &str = "BLOGSEARCH_HOME";

/// `$BLOGSEARCH_HOME` if set, otherwise the platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(home));
    }
    ProjectDirs::from("com", "blogsearch", "blogsearch").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Builds the API over the built-in posts.
///
/// `page_size` overrides the configured page size for this session only; the
/// config file is not read at all in that case.
pub fn initialize(page_size: Option<usize>) -> Result<BlogApi<SeedStore>> {
    let dir = config_dir();
    let page_size = match (page_size, &dir) {
        (Some(size), _) => size,
        (None, Some(dir)) => BlogConfig::load(dir)?.page_size,
        (None, None) => BlogConfig::default().page_size,
    };
    debug!("config dir {:?}, page size {}", dir, page_size);

    let mut api = BlogApi::new(SeedStore::new(), page_size)?;
    if let Some(dir) = dir {
        api = api.with_config_dir(dir);
    }
    Ok(api)
}
