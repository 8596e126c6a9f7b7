//! History Integration
//!
//! The router relies on [`HistoryProvider`]s to store the current location, and possibly a history
//! (i.e. a browsers back button) and future (i.e. a browsers forward button).
//!
//! [`MemoryHistory`] works everywhere. With the `web` feature, [`WebHistory`] drives the browsers
//! location bar through the [History API](https://developer.mozilla.org/en-US/docs/Web/API/History_API).

use std::fmt::{self, Debug};
use std::ops::Deref;
use std::rc::Rc;

mod memory;
pub use memory::*;

#[cfg(feature = "web")]
mod web;
#[cfg(feature = "web")]
pub use web::*;

/// An integration with some kind of navigation history.
///
/// Routes handed to and returned from a provider never contain the prefix. The provider is
/// responsible for removing it from the host location, and for adding it back in during navigation.
pub trait HistoryProvider {
    /// Get the current route, including its query and fragment.
    ///
    /// **Must start** with `/`. **Must _not_ contain** the prefix.
    fn current_route(&self) -> String;

    /// Get the current path prefix of the URL.
    ///
    /// Only used for creating `href`s, never for matching.
    fn current_prefix(&self) -> Option<String> {
        None
    }

    /// Check whether there is a previous page to navigate back to.
    ///
    /// If a [`HistoryProvider`] cannot know this, it should return [`true`].
    fn can_go_back(&self) -> bool {
        true
    }

    /// Go back to a previous page. Does nothing if there is none.
    fn go_back(&self);

    /// Check whether there is a future page to navigate forward to.
    ///
    /// If a [`HistoryProvider`] cannot know this, it should return [`true`].
    fn can_go_forward(&self) -> bool {
        true
    }

    /// Go forward to a future page. Does nothing if there is none.
    fn go_forward(&self);

    /// Go to another route, remembering the current one and clearing the future.
    fn push(&self, route: String);

    /// Replace the current route, leaving history and future untouched.
    fn replace(&self, route: String);

    /// Provide the [`HistoryProvider`] with an update callback.
    ///
    /// Providers that see location changes from outside the router (the back button, another
    /// handle to the same history) call `callback` after every change so the router can update.
    #[allow(unused_variables)]
    fn updater(&self, callback: Rc<dyn Fn()>) {}

    /// Stop calling the callback set by [`HistoryProvider::updater`].
    fn remove_updater(&self) {}
}

/// A cheaply cloneable handle to a [`HistoryProvider`].
///
/// Two handles are equal when they point at the same provider.
#[derive(Clone)]
pub struct SharedHistory(Rc<dyn HistoryProvider>);

impl SharedHistory {
    pub fn new(history: impl HistoryProvider + 'static) -> Self {
        Self(Rc::new(history))
    }
}

impl Deref for SharedHistory {
    type Target = dyn HistoryProvider;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for SharedHistory {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for SharedHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedHistory")
            .field(&self.0.current_route())
            .finish()
    }
}

impl<H: HistoryProvider + 'static> From<H> for SharedHistory {
    fn from(history: H) -> Self {
        Self::new(history)
    }
}
