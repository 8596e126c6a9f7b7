use dioxus::prelude::*;
use tracing::trace;

use crate::history::SharedHistory;

/// A handle to the router, used to read the location and to navigate.
///
/// Every [`Router`](crate::components::Router) provides one to its descendants. It is [`Copy`], so
/// it can be moved into as many event handlers as needed.
#[derive(Clone, Copy, PartialEq)]
pub struct Navigator {
    location: Signal<String>,
    history: CopyValue<SharedHistory>,
}

impl Navigator {
    pub(crate) fn new(history: SharedHistory) -> Self {
        Self {
            location: Signal::new(history.current_route()),
            history: CopyValue::new(history),
        }
    }

    pub(crate) fn history(&self) -> SharedHistory {
        self.history.read().clone()
    }

    /// The current location. Reading it subscribes the calling component to navigations.
    pub fn location(&self) -> String {
        self.location.read().clone()
    }

    /// The path prefix the app is served under, if any.
    pub fn prefix(&self) -> Option<String> {
        self.history().current_prefix()
    }

    /// Navigate to `route`, remembering the current location.
    pub fn push(&self, route: impl Into<String>) {
        self.history().push(route.into());
        self.sync();
    }

    /// Navigate to `route`, replacing the current location.
    pub fn replace(&self, route: impl Into<String>) {
        self.history().replace(route.into());
        self.sync();
    }

    pub fn can_go_back(&self) -> bool {
        self.history().can_go_back()
    }

    pub fn go_back(&self) {
        self.history().go_back();
        self.sync();
    }

    pub fn can_go_forward(&self) -> bool {
        self.history().can_go_forward()
    }

    pub fn go_forward(&self) {
        self.history().go_forward();
        self.sync();
    }

    /// Copy the location of the history into the reactive location.
    ///
    /// Subscribers are only notified if the location actually changed.
    pub(crate) fn sync(&self) {
        let current = self.history().current_route();
        let mut location = self.location;

        if *location.peek() != current {
            trace!("navigated to {current}");
            location.set(current);
        }
    }
}

/// A hook that provides access to the [`Navigator`] of the closest [`Router`](crate::components::Router).
///
/// Unlike [`use_location`], this hook does not rerender the component when the location changes.
///
/// # Panic
/// If called outside of a router.
pub fn use_navigator() -> Navigator {
    use_hook(|| {
        try_consume_context::<Navigator>()
            .expect("`use_navigator` must be called in a descendant of a `Router` component")
    })
}

/// Like [`use_navigator`], but returns [`None`] outside of a router.
pub fn try_use_navigator() -> Option<Navigator> {
    use_hook(try_consume_context::<Navigator>)
}

/// A hook that returns the current location and rerenders the component when it changes.
pub fn use_location() -> String {
    use_navigator().location()
}
