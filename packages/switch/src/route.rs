//! The route table and the rules used to pick a route for a location.

use std::fmt::{self, Debug};

use dioxus::prelude::Element;
use tracing::warn;

use crate::error::RouteError;

/// A component that can be registered in a [`RouteTable`].
pub type RouteComponent = fn() -> Element;

/// A single entry of a [`RouteTable`].
///
/// A route pairs a path pattern with the component rendered when the pattern matches the current
/// location. An _exact_ route only matches a location whose path is identical to the pattern. Any
/// other route matches every path that starts with the pattern on a segment boundary:
///
/// - `/` matches every path,
/// - `/feed` matches `/feed` and `/feed/top`, but not `/feeds`,
/// - `/feed/` matches `/feed/` and `/feed/top`, but not `/feed`.
#[derive(Clone)]
pub struct Route {
    pattern: String,
    exact: bool,
    component: RouteComponent,
}

impl Route {
    /// Create a new prefix route.
    ///
    /// Patterns must start with a `/`. A pattern that does not is prefixed with one, use
    /// [`Route::try_new`] to reject it instead. A pattern containing `?` or `#` can never match
    /// and is kept with a warning.
    pub fn new(pattern: impl Into<String>, component: RouteComponent) -> Self {
        let mut pattern = pattern.into();
        if !pattern.starts_with('/') {
            warn!(r#"route pattern "{pattern}" does not start with "/", prefixing it"#);
            pattern.insert(0, '/');
        }
        if pattern.contains(['?', '#']) {
            warn!(r#"route pattern "{pattern}" contains a query or fragment and will never match"#);
        }

        Self {
            pattern,
            exact: false,
            component,
        }
    }

    /// Create a new prefix route, rejecting malformed patterns.
    pub fn try_new(pattern: impl Into<String>, component: RouteComponent) -> Result<Self, RouteError> {
        let pattern = pattern.into();

        if !pattern.starts_with('/') {
            return Err(RouteError::MissingLeadingSlash(pattern));
        }

        if pattern.contains(['?', '#']) {
            return Err(RouteError::QueryInPattern(pattern));
        }

        Ok(Self {
            pattern,
            exact: false,
            component,
        })
    }

    /// Set whether the route only matches its pattern verbatim.
    pub fn exact(mut self, exact: bool) -> Self {
        self.exact = exact;
        self
    }

    /// The path pattern of the route.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the route requires an exact match.
    pub fn is_exact(&self) -> bool {
        self.exact
    }

    /// The component rendered for the route.
    pub fn component(&self) -> RouteComponent {
        self.component
    }

    /// Check the route against a path without query or fragment.
    ///
    /// Returns the part of the path that follows the pattern.
    pub fn matches<'p>(&self, path: &'p str) -> Option<&'p str> {
        if self.exact {
            return (path == self.pattern).then_some("");
        }

        let rest = path.strip_prefix(self.pattern.as_str())?;
        let on_boundary = rest.is_empty() || rest.starts_with('/') || self.pattern.ends_with('/');

        on_boundary.then_some(rest)
    }
}

impl PartialEq for Route {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
            && self.exact == other.exact
            && std::ptr::fn_addr_eq(self.component, other.component)
    }
}

impl Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("pattern", &self.pattern)
            .field("exact", &self.exact)
            .finish_non_exhaustive()
    }
}

/// The route that was selected for a location.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch<'a> {
    /// The position of the route in its table.
    pub index: usize,
    /// The matched route.
    pub route: &'a Route,
    /// The part of the path that follows the pattern. Always empty for exact routes.
    pub remainder: &'a str,
}

/// An ordered list of routes.
///
/// Routes are checked in the order they were added and the first one that matches wins, so at most
/// one route is active for any location.
///
/// ```rust
/// # use dioxus::prelude::*;
/// # use podscraper_switch::prelude::*;
/// # fn Home() -> Element { VNode::empty() }
/// let routes = RouteTable::new().exact("/", Home);
///
/// assert!(routes.resolve("/").is_some());
/// assert!(routes.resolve("/foo").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteTable {
    routes: Vec<Route>,
}

impl RouteTable {
    /// Create an empty table. An empty table never matches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a route.
    pub fn route(mut self, route: Route) -> Self {
        if let Some(earlier) = self.routes.iter().find(|r| r.exact && **r == route) {
            warn!(
                r#"route "{}" is already registered as exact and will never be reached"#,
                earlier.pattern
            );
        }

        self.routes.push(route);
        self
    }

    /// Append a route that only matches `pattern` verbatim.
    pub fn exact(self, pattern: impl Into<String>, component: RouteComponent) -> Self {
        self.route(Route::new(pattern, component).exact(true))
    }

    /// Append a route that matches `pattern` and everything below it.
    pub fn prefix(self, pattern: impl Into<String>, component: RouteComponent) -> Self {
        self.route(Route::new(pattern, component))
    }

    /// Append a route, rejecting malformed patterns.
    pub fn try_route(
        self,
        pattern: impl Into<String>,
        exact: bool,
        component: RouteComponent,
    ) -> Result<Self, RouteError> {
        Ok(self.route(Route::try_new(pattern, component)?.exact(exact)))
    }

    /// The registered routes in match order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Find the first route matching `location`.
    ///
    /// Only the path is considered: anything after a `?` or `#` is ignored. The path is compared
    /// as is, so `/%2F` is not `//` and `%2F` is not `/`.
    pub fn resolve<'a>(&'a self, location: &'a str) -> Option<RouteMatch<'a>> {
        let path = location_path(location);

        self.routes.iter().enumerate().find_map(|(index, route)| {
            route.matches(path).map(|remainder| RouteMatch {
                index,
                route,
                remainder,
            })
        })
    }
}

/// Strip the query and fragment from a location.
pub fn location_path(location: &str) -> &str {
    match location.find(['?', '#']) {
        Some(end) => &location[..end],
        None => location,
    }
}
