use crate::history::{MemoryHistory, SharedHistory};

/// Settings used by a [`Router`](crate::components::Router) that was not handed a history.
///
/// ```rust
/// # use podscraper_switch::prelude::*;
/// let config = RouterConfig::default().prefix("/app").initial_path("/feed");
/// let history = config.build_history();
/// assert_eq!(history.current_route(), "/feed");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RouterConfig {
    pub(crate) prefix: Option<String>,
    pub(crate) initial_path: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            prefix: None,
            initial_path: String::from("/"),
        }
    }
}

impl RouterConfig {
    /// Serve the app below `prefix`, e.g. `/podscraper` for `https://example.com/podscraper/`.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// The location a [`MemoryHistory`] starts at. Ignored by the browser history.
    pub fn initial_path(mut self, path: impl Into<String>) -> Self {
        self.initial_path = path.into();
        self
    }

    /// Create the history for the current platform.
    ///
    /// With the `web` feature on a wasm target this is the browser history. Everywhere else, or if
    /// the browser history is unavailable, an in-memory history is used.
    pub fn build_history(&self) -> SharedHistory {
        #[cfg(all(feature = "web", target_arch = "wasm32"))]
        match crate::history::WebHistory::new(self.prefix.clone()) {
            Ok(history) => return SharedHistory::new(history),
            Err(err) => tracing::error!("falling back to memory history: {err}"),
        }

        let history = MemoryHistory::with_initial_path(&self.initial_path);
        match &self.prefix {
            Some(prefix) => SharedHistory::new(history.with_prefix(prefix)),
            None => SharedHistory::new(history),
        }
    }
}
