#![allow(non_snake_case)]

use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use podscraper_cookies::prelude::{CookiesProvider, MemoryCookieStore, SharedCookieStore};
use podscraper_frontend::{routes, App};
use podscraper_switch::prelude::{MemoryHistory, Router, SharedHistory, Switch};
use pretty_assertions::assert_eq;

const HOME: &str =
    r#"<section class="home"><h1>Podscraper</h1><p>Your podcasts, in one place.</p></section>"#;

#[component]
fn Shell(history: SharedHistory) -> Element {
    rsx! {
        CookiesProvider { store: SharedCookieStore::new(MemoryCookieStore::default()),
            Router { history,
                Switch { routes: routes() }
            }
        }
    }
}

fn mount(initial: &str) -> (VirtualDom, SharedHistory) {
    let history = SharedHistory::new(MemoryHistory::with_initial_path(initial));
    let mut dom = VirtualDom::new_with_props(
        Shell,
        ShellProps {
            history: history.clone(),
        },
    );
    dom.rebuild_in_place();
    (dom, history)
}

#[test]
fn app_starts_at_home() {
    let mut dom = VirtualDom::new(App);
    dom.rebuild_in_place();

    assert_eq!(dioxus_ssr::render(&dom), HOME);
}

#[test]
fn only_root_is_registered() {
    let table = routes();

    assert_eq!(table.len(), 1);
    let route = &table.routes()[0];
    assert_eq!(route.pattern(), "/");
    assert!(route.is_exact());
}

#[test]
fn root_renders_home() {
    let (dom, _) = mount("/");
    assert_eq!(dioxus_ssr::render(&dom), HOME);
}

#[test]
fn everything_else_renders_nothing() {
    for path in ["/foo", "/home/", "/home", "/feed/123", "/index.html", "%2F"] {
        let (dom, _) = mount(path);
        assert_eq!(dioxus_ssr::render(&dom), "", "{path}");
    }
}

#[test]
fn navigating_home_and_away() {
    let (mut dom, history) = mount("/foo");
    assert_eq!(dioxus_ssr::render(&dom), "");

    dom.in_runtime(|| history.push("/".to_string()));
    dom.render_immediate(&mut NoOpMutations);
    assert_eq!(dioxus_ssr::render(&dom), HOME);

    for _ in 0..3 {
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
        assert_eq!(dioxus_ssr::render(&dom), HOME);
    }

    dom.in_runtime(|| history.push("/home/".to_string()));
    dom.render_immediate(&mut NoOpMutations);
    assert_eq!(dioxus_ssr::render(&dom), "");
    assert_eq!(history.current_route(), "/home/");
}
