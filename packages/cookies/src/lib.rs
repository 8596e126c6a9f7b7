//! Cookies shared through a Dioxus component tree.
//!
//! Wrap the app in a [`CookiesProvider`](provider::CookiesProvider) and read or write cookies from
//! any descendant with [`use_cookies`](provider::use_cookies).
//!
//! ```rust
//! use dioxus::prelude::*;
//! use podscraper_cookies::prelude::*;
//!
//! fn Greeting() -> Element {
//!     let cookies = use_cookies();
//!     let name = cookies.get("name").unwrap_or_else(|| "stranger".to_string());
//!     rsx! { p { "Hello, {name}" } }
//! }
//!
//! fn App() -> Element {
//!     rsx! {
//!         CookiesProvider { Greeting {} }
//!     }
//! }
//! ```
#![allow(non_snake_case)]

pub mod cookie;
pub mod error;
pub mod jar;
pub mod provider;
pub mod store;

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::cookie::{Cookie, CookieOptions, SameSite};
    pub use crate::error::CookieError;
    pub use crate::jar::CookieJar;
    pub use crate::provider::{try_use_cookies, use_cookies, Cookies, CookiesProvider};
    pub use crate::store::{CookieStore, MemoryCookieStore, SharedCookieStore};

    #[cfg(feature = "web")]
    pub use crate::store::DocumentCookieStore;
}
