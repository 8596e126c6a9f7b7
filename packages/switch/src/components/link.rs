use dioxus::prelude::*;
use tracing::warn;

use crate::navigator::try_use_navigator;

/// A link to another location of the app.
///
/// Clicking it navigates through the enclosing [`Router`](super::Router) without reloading the page.
/// The rendered `href` carries the history prefix, so the link also works when opened in a new tab.
/// Targets starting with `//` belong to another host and render as a plain anchor.
#[component]
pub fn Link(
    /// The route to navigate to, e.g. `/` or `/feed?page=2`.
    to: String,

    /// A class to apply to the anchor.
    class: Option<String>,

    children: Element,
) -> Element {
    let Some(navigator) = try_use_navigator() else {
        warn!("attempted to create a `Link` to {to} outside of a `Router`");
        return rsx! {
            a { href: "{to}", class, {children} }
        };
    };

    // the router refuses to navigate to another host, leave those to the browser
    if to.starts_with("//") {
        warn!("`Link` to {to} points at another host and is rendered as a plain anchor");
        return rsx! {
            a { href: "{to}", class, {children} }
        };
    }

    let href = format!("{}{to}", navigator.prefix().unwrap_or_default());

    rsx! {
        a {
            href,
            class,
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                navigator.push(to.clone());
            },
            {children}
        }
    }
}
