use dioxus::prelude::*;
use tracing::{debug, trace};

use crate::navigator::use_location;
use crate::route::RouteTable;

/// Render the first route of `routes` that matches the current location.
///
/// Nothing is rendered if no route matches. The match is recomputed whenever the location of the
/// enclosing [`Router`](super::Router) changes, and only then.
///
/// ```rust
/// # use dioxus::prelude::*;
/// # use podscraper_switch::prelude::*;
/// # fn Home() -> Element { VNode::empty() }
/// # fn Feed() -> Element { VNode::empty() }
/// fn App() -> Element {
///     rsx! {
///         Router {
///             Switch {
///                 routes: RouteTable::new()
///                     .exact("/", Home)
///                     .prefix("/feed", Feed)
///             }
///         }
///     }
/// }
/// ```
#[component]
pub fn Switch(routes: RouteTable) -> Element {
    let location = use_location();

    let Some(found) = routes.resolve(&location) else {
        debug!("no route matches {location}");
        return VNode::empty();
    };

    trace!(
        "{location} matched route #{} ({})",
        found.index,
        found.route.pattern()
    );

    #[allow(non_snake_case)]
    let Matched = found.route.component();

    rsx! {
        Matched {}
    }
}
