use dioxus::prelude::*;
use tracing::debug;

use crate::cookie::{Cookie, CookieOptions};
use crate::error::CookieError;
use crate::jar::CookieJar;
use crate::store::SharedCookieStore;

/// Access to the cookies of the page, provided by [`CookiesProvider`].
///
/// Reading through it subscribes the component, so setting or removing a cookie rerenders every
/// component that looked at the jar.
#[derive(Clone, Copy, PartialEq)]
pub struct Cookies {
    jar: Signal<CookieJar>,
    store: CopyValue<SharedCookieStore>,
}

impl Cookies {
    fn new(store: SharedCookieStore) -> Self {
        Self {
            jar: Signal::new(CookieJar::parse(&store.read_all())),
            store: CopyValue::new(store),
        }
    }

    fn store(&self) -> SharedCookieStore {
        self.store.read().clone()
    }

    /// The value of the cookie called `name`.
    pub fn get(&self, name: &str) -> Option<String> {
        self.jar.read().get(name).map(str::to_string)
    }

    /// Every cookie visible to the page.
    pub fn all(&self) -> CookieJar {
        self.jar.read().clone()
    }

    /// Write `cookie` to the store.
    pub fn set(&self, cookie: Cookie) -> Result<(), CookieError> {
        debug!("setting cookie {}", cookie.name());
        self.store().write(&cookie)?;
        self.refresh();
        Ok(())
    }

    /// Delete the cookie called `name`. `options` must carry the path and domain it was set with.
    pub fn remove(&self, name: &str, options: CookieOptions) -> Result<(), CookieError> {
        debug!("removing cookie {name}");
        self.store().write(&Cookie::removal(name, options)?)?;
        self.refresh();
        Ok(())
    }

    /// Reload the jar from the store, e.g. after a response set cookies behind our back.
    pub fn refresh(&self) {
        let jar = CookieJar::parse(&self.store().read_all());
        let mut current = self.jar;

        if *current.peek() != jar {
            current.set(jar);
        }
    }
}

/// The props for [`CookiesProvider`].
#[derive(Props, Clone, PartialEq)]
pub struct CookiesProviderProps {
    /// Where cookies live. Defaults to the store of the current platform.
    store: Option<SharedCookieStore>,

    children: Element,
}

/// Make the page's cookies available to every descendant through [`use_cookies`].
///
/// The store is chosen on the first render; later changes to the props are ignored.
#[allow(non_snake_case)]
pub fn CookiesProvider(props: CookiesProviderProps) -> Element {
    use_context_provider(|| {
        let store = props.store.clone().unwrap_or_else(SharedCookieStore::platform);
        Cookies::new(store)
    });

    rsx! { {props.children} }
}

/// The [`Cookies`] of the closest [`CookiesProvider`].
///
/// # Panic
/// If called outside of a cookies provider.
pub fn use_cookies() -> Cookies {
    use_hook(|| {
        try_consume_context::<Cookies>()
            .expect("`use_cookies` must be called in a descendant of a `CookiesProvider`")
    })
}

/// Like [`use_cookies`], but returns [`None`] outside of a cookies provider.
pub fn try_use_cookies() -> Option<Cookies> {
    use_hook(try_consume_context::<Cookies>)
}
