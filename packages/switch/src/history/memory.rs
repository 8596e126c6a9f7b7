use std::cell::RefCell;
use std::rc::Rc;

use tracing::error;

use super::HistoryProvider;
use crate::error::HistoryError;

struct MemoryHistoryState {
    current: String,
    history: Vec<String>,
    future: Vec<String>,
}

/// A [`HistoryProvider`] that stores all navigation information in memory.
///
/// This is the history used by tests and by every platform without a browser location bar.
pub struct MemoryHistory {
    state: RefCell<MemoryHistoryState>,
    prefix: Option<String>,
    updater: RefCell<Option<Rc<dyn Fn()>>>,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_initial_path("/")
    }
}

impl MemoryHistory {
    /// Create a [`MemoryHistory`] starting at `path`.
    ///
    /// ```rust
    /// # use podscraper_switch::prelude::*;
    /// let history = MemoryHistory::with_initial_path("/foo");
    /// assert_eq!(history.current_route(), "/foo");
    /// assert!(!history.can_go_back());
    /// ```
    pub fn with_initial_path(path: impl ToString) -> Self {
        Self {
            state: RefCell::new(MemoryHistoryState {
                current: path.to_string(),
                history: Vec::new(),
                future: Vec::new(),
            }),
            prefix: None,
            updater: RefCell::new(None),
        }
    }

    /// Set the prefix used when rendering links. Routes themselves never contain it.
    pub fn with_prefix(mut self, prefix: impl ToString) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }

    fn notify(&self) {
        // clone out of the cell so the callback is free to read the history again
        let updater = self.updater.borrow().clone();
        if let Some(updater) = updater {
            updater();
        }
    }
}

fn foreign_host(route: &str) -> bool {
    if route.starts_with("//") {
        error!("{}", HistoryError::ForeignHost(route.to_string()));
        return true;
    }
    false
}

impl HistoryProvider for MemoryHistory {
    fn current_route(&self) -> String {
        self.state.borrow().current.clone()
    }

    fn current_prefix(&self) -> Option<String> {
        self.prefix.clone()
    }

    fn can_go_back(&self) -> bool {
        !self.state.borrow().history.is_empty()
    }

    fn go_back(&self) {
        {
            let mut write = self.state.borrow_mut();
            let Some(last) = write.history.pop() else {
                return;
            };
            let old = std::mem::replace(&mut write.current, last);
            write.future.push(old);
        }
        self.notify();
    }

    fn can_go_forward(&self) -> bool {
        !self.state.borrow().future.is_empty()
    }

    fn go_forward(&self) {
        {
            let mut write = self.state.borrow_mut();
            let Some(next) = write.future.pop() else {
                return;
            };
            let old = std::mem::replace(&mut write.current, next);
            write.history.push(old);
        }
        self.notify();
    }

    fn push(&self, route: String) {
        if foreign_host(&route) {
            return;
        }

        {
            let mut write = self.state.borrow_mut();
            // don't push the same route twice
            if write.current == route {
                return;
            }
            let old = std::mem::replace(&mut write.current, route);
            write.history.push(old);
            write.future.clear();
        }
        self.notify();
    }

    fn replace(&self, route: String) {
        if foreign_host(&route) {
            return;
        }

        {
            let mut write = self.state.borrow_mut();
            if write.current == route {
                return;
            }
            write.current = route;
        }
        self.notify();
    }

    fn updater(&self, callback: Rc<dyn Fn()>) {
        *self.updater.borrow_mut() = Some(callback);
    }

    fn remove_updater(&self) {
        self.updater.borrow_mut().take();
    }
}
