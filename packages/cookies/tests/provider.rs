#![allow(non_snake_case)]

use std::cell::Cell;

use dioxus::prelude::*;
use dioxus_core::NoOpMutations;
use podscraper_cookies::prelude::*;
use pretty_assertions::assert_eq;

thread_local! {
    static COOKIES: Cell<Option<Cookies>> = const { Cell::new(None) };
}

fn Theme() -> Element {
    let cookies = use_cookies();
    COOKIES.with(|c| c.set(Some(cookies)));

    match cookies.get("theme") {
        Some(theme) => rsx! { p { "theme: {theme}" } },
        None => rsx! { p { "no theme" } },
    }
}

#[component]
fn App(store: SharedCookieStore) -> Element {
    rsx! {
        CookiesProvider { store,
            Theme {}
        }
    }
}

fn mount(header: &str) -> (VirtualDom, SharedCookieStore, Cookies) {
    let store = SharedCookieStore::new(MemoryCookieStore::with_header(header));
    let mut dom = VirtualDom::new_with_props(
        App,
        AppProps {
            store: store.clone(),
        },
    );
    dom.rebuild_in_place();
    let cookies = COOKIES.with(|c| c.get()).expect("theme rendered");
    (dom, store, cookies)
}

#[test]
fn descendants_read_cookies() {
    let (dom, _, _) = mount("session=abc; theme=dark%20mode");
    assert_eq!(dioxus_ssr::render(&dom), "<p>theme: dark mode</p>");
}

#[test]
fn setting_a_cookie_rerenders_readers() {
    let (mut dom, store, cookies) = mount("");
    assert_eq!(dioxus_ssr::render(&dom), "<p>no theme</p>");

    dom.in_runtime(|| {
        cookies
            .set(Cookie::new("theme", "light").unwrap())
            .unwrap()
    });
    dom.render_immediate(&mut NoOpMutations);

    assert_eq!(dioxus_ssr::render(&dom), "<p>theme: light</p>");
    assert_eq!(store.read_all(), "theme=light");
}

#[test]
fn removing_a_cookie_rerenders_readers() {
    let (mut dom, store, cookies) = mount("theme=dark; session=abc");

    dom.in_runtime(|| {
        cookies
            .remove("theme", CookieOptions::default().path("/"))
            .unwrap()
    });
    dom.render_immediate(&mut NoOpMutations);

    assert_eq!(dioxus_ssr::render(&dom), "<p>no theme</p>");
    assert_eq!(store.read_all(), "session=abc");
}

#[test]
fn invalid_names_leave_the_jar_alone() {
    let (dom, store, cookies) = mount("theme=dark");

    let result = dom.in_runtime(|| cookies.set(Cookie::new("bad name", "x")?));

    assert_eq!(result, Err(CookieError::InvalidName("bad name".to_string())));
    assert_eq!(store.read_all(), "theme=dark");
    dom.in_runtime(|| assert_eq!(cookies.all().len(), 1));
}

#[test]
fn unusual_names_reach_descendants() {
    let (dom, _, cookies) = mount("a:b=1; theme=dark; x y=3");

    dom.in_runtime(|| {
        assert_eq!(cookies.get("a:b"), Some("1".to_string()));
        assert_eq!(cookies.get("x y"), Some("3".to_string()));
        assert_eq!(cookies.all().len(), 3);
    });
    assert_eq!(dioxus_ssr::render(&dom), "<p>theme: dark</p>");
}

#[test]
fn refresh_picks_up_outside_writes() {
    let (mut dom, store, cookies) = mount("");

    store.write(&Cookie::new("theme", "solarized").unwrap()).unwrap();
    assert_eq!(dioxus_ssr::render(&dom), "<p>no theme</p>");

    dom.in_runtime(|| cookies.refresh());
    dom.render_immediate(&mut NoOpMutations);
    assert_eq!(dioxus_ssr::render(&dom), "<p>theme: solarized</p>");
}

#[test]
fn cookies_are_optional_outside_a_provider() {
    thread_local! {
        static FOUND: Cell<Option<bool>> = const { Cell::new(None) };
    }

    fn Probe() -> Element {
        FOUND.with(|f| f.set(Some(try_use_cookies().is_some())));
        VNode::empty()
    }

    let mut dom = VirtualDom::new(Probe);
    dom.rebuild_in_place();

    assert_eq!(FOUND.with(|f| f.get()), Some(false));
}
