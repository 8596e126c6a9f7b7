use dioxus::prelude::*;
use podscraper_cookies::prelude::CookiesProvider;
use podscraper_switch::prelude::{RouteTable, Router, Switch};

use crate::views::Home;

/// Every page of the app. Locations that match nothing render nothing.
pub fn routes() -> RouteTable {
    RouteTable::new().exact("/", Home)
}

/// The root component.
#[component]
pub fn App() -> Element {
    rsx! {
        CookiesProvider {
            Router {
                Switch { routes: routes() }
            }
        }
    }
}
