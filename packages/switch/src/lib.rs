//! Ordered route dispatch for Dioxus apps.
//!
//! A [`Router`](components::Router) tracks the current location through a
//! [`HistoryProvider`](history::HistoryProvider). A [`Switch`](components::Switch) renders the first
//! route of its [`RouteTable`](route::RouteTable) that matches the location, or nothing at all.
//!
//! ```rust
//! use dioxus::prelude::*;
//! use podscraper_switch::prelude::*;
//!
//! fn Home() -> Element {
//!     rsx! { h1 { "Home" } }
//! }
//!
//! fn App() -> Element {
//!     rsx! {
//!         Router {
//!             Switch { routes: RouteTable::new().exact("/", Home) }
//!         }
//!     }
//! }
//! ```
#![allow(non_snake_case)]

pub mod config;
pub mod error;
pub mod history;
pub mod navigator;
pub mod route;

/// Components interacting with the router.
pub mod components {
    mod link;
    pub use link::*;

    mod router;
    pub use router::*;

    mod switch;
    pub use switch::*;
}

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::components::*;
    pub use crate::config::RouterConfig;
    pub use crate::error::{HistoryError, RouteError};
    pub use crate::history::*;
    pub use crate::navigator::{try_use_navigator, use_location, use_navigator, Navigator};
    pub use crate::route::{Route, RouteComponent, RouteMatch, RouteTable};
}
