use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use tracing::error;
use wasm_bindgen::JsValue;
use web_sys::{History, Window};

use super::HistoryProvider;
use crate::error::HistoryError;

fn rejected(err: JsValue) -> HistoryError {
    HistoryError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// A [`HistoryProvider`] that integrates with a browser via the [History API](https://developer.mozilla.org/en-US/docs/Web/API/History_API).
///
/// # Prefix
/// This [`HistoryProvider`] supports a prefix, which can be used for web apps that aren't located
/// at the root of their domain. The prefix must not end with a `/`.
///
/// Application developers are responsible for not rendering the router if the prefix is not present
/// in the URL. Otherwise, if a router navigation is triggered, the prefix will be added.
pub struct WebHistory {
    history: History,
    window: Window,
    prefix: Option<String>,
    listener: RefCell<Option<EventListener>>,
}

impl WebHistory {
    /// Create a new [`WebHistory`].
    pub fn new(prefix: Option<String>) -> Result<Self, HistoryError> {
        let window = web_sys::window().ok_or(HistoryError::NoWindow)?;
        let history = window.history().map_err(rejected)?;

        Ok(Self {
            history,
            window,
            prefix: prefix.map(|p| p.trim_end_matches('/').to_string()),
            listener: RefCell::new(None),
        })
    }

    fn full_url(&self, route: &str) -> String {
        match &self.prefix {
            Some(prefix) => format!("{prefix}{route}"),
            None => route.to_string(),
        }
    }
}

impl HistoryProvider for WebHistory {
    fn current_route(&self) -> String {
        let location = self.window.location();
        let path = location.pathname().unwrap_or_else(|_| String::from("/"));
        let search = location.search().unwrap_or_default();
        let hash = location.hash().unwrap_or_default();

        let path = match &self.prefix {
            Some(prefix) => path.strip_prefix(prefix.as_str()).unwrap_or(&path).to_string(),
            None => path,
        };

        match path.starts_with('/') {
            true => format!("{path}{search}{hash}"),
            false => format!("/{path}{search}{hash}"),
        }
    }

    fn current_prefix(&self) -> Option<String> {
        self.prefix.clone()
    }

    fn go_back(&self) {
        if let Err(err) = self.history.back() {
            error!("failed to go back: {}", rejected(err));
        }
    }

    fn go_forward(&self) {
        if let Err(err) = self.history.forward() {
            error!("failed to go forward: {}", rejected(err));
        }
    }

    fn push(&self, route: String) {
        if route.starts_with("//") {
            error!("{}", HistoryError::ForeignHost(route));
            return;
        }

        let url = self.full_url(&route);
        if let Err(err) = self
            .history
            .push_state_with_url(&JsValue::NULL, "", Some(&url))
        {
            error!("failed to push {route}: {}", rejected(err));
        }
    }

    fn replace(&self, route: String) {
        if route.starts_with("//") {
            error!("{}", HistoryError::ForeignHost(route));
            return;
        }

        let url = self.full_url(&route);
        if let Err(err) = self
            .history
            .replace_state_with_url(&JsValue::NULL, "", Some(&url))
        {
            error!("failed to replace {route}: {}", rejected(err));
        }
    }

    fn updater(&self, callback: Rc<dyn Fn()>) {
        // replacing the listener drops the old one, which detaches it
        *self.listener.borrow_mut() = Some(EventListener::new(&self.window, "popstate", move |_| {
            callback()
        }));
    }

    fn remove_updater(&self) {
        self.listener.borrow_mut().take();
    }
}
