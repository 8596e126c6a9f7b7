use std::rc::Rc;

use dioxus::prelude::*;

use crate::config::RouterConfig;
use crate::history::SharedHistory;
use crate::navigator::Navigator;

/// The props for [`Router`].
#[derive(Props, Clone, PartialEq)]
pub struct RouterProps {
    /// The history to read the location from. Built from `config` if not set.
    history: Option<SharedHistory>,

    /// Settings for the history created when none is passed.
    #[props(default)]
    config: RouterConfig,

    children: Element,
}

/// A component that makes the current location available to its descendants.
///
/// Put it above any [`Switch`](super::Switch), [`Link`](super::Link) or component calling
/// [`use_navigator`](crate::navigator::use_navigator). The history is chosen once, on the first
/// render; later changes to the props are ignored.
///
/// ```rust
/// # use dioxus::prelude::*;
/// # use podscraper_switch::prelude::*;
/// # fn Home() -> Element { VNode::empty() }
/// fn App() -> Element {
///     rsx! {
///         Router {
///             Switch { routes: RouteTable::new().exact("/", Home) }
///         }
///     }
/// }
/// ```
#[allow(non_snake_case)]
pub fn Router(props: RouterProps) -> Element {
    let navigator = use_context_provider(|| {
        let history = props
            .history
            .clone()
            .unwrap_or_else(|| props.config.build_history());
        Navigator::new(history)
    });

    // changes made behind the routers back (the back button, another handle to the history)
    let history = use_hook(|| {
        let history = navigator.history();
        history.updater(Rc::new(move || navigator.sync()));
        history
    });
    use_drop(move || history.remove_updater());

    rsx! { {props.children} }
}
