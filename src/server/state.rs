//! Application State
//!
//! Shared, read-only state for the static host's handlers.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::catalog::Dataset;
use crate::config::ServerConfig;
use crate::routing::{Route, SiteRouter};

use super::error::{ServerError, ServerResult};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Project records, used to decide whether a detail path exists
    pub dataset: Dataset,
    /// Same route table the front end uses
    pub router: Arc<SiteRouter>,
    /// Contents of `index.html`, served for every client-side route
    pub shell: Arc<str>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build state from config, reading the shell from `dist_dir`
    pub fn new(dataset: Dataset, config: ServerConfig) -> ServerResult<Self> {
        let shell = read_shell(&config.dist_dir)?;
        Ok(Self::with_shell(dataset, config, shell))
    }

    /// Build state around an in-memory shell
    pub fn with_shell(dataset: Dataset, config: ServerConfig, shell: impl Into<Arc<str>>) -> Self {
        Self {
            dataset,
            router: Arc::new(SiteRouter::new()),
            shell: shell.into(),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Whether the front end would render a real page for `path`
    ///
    /// Unmatched paths and detail paths for unknown ids both render the
    /// front end's not-found views.
    pub fn has_page(&self, path: &str) -> bool {
        match self.router.resolve(path) {
            Some(Route::ProjectDetail { id }) => self.dataset.find(&id).is_some(),
            Some(_) => true,
            None => false,
        }
    }
}

fn read_shell(dist_dir: &Path) -> ServerResult<String> {
    let index = dist_dir.join("index.html");
    if !index.is_file() {
        return Err(ServerError::MissingShell(index));
    }
    Ok(std::fs::read_to_string(index)?)
}
