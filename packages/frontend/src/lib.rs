//! The Podscraper frontend shell: a cookie context around a router that renders [`views::Home`]
//! at `/` and nothing anywhere else.
#![allow(non_snake_case)]

mod app;
pub mod logging;
pub mod views;

pub use app::{routes, App};
