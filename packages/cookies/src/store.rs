//! Where cookies are read from and written to.

use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::ops::Deref;
use std::rc::Rc;

use crate::cookie::{encode_value, Cookie};
use crate::error::CookieError;
use crate::jar::CookieJar;

/// A source of cookies.
pub trait CookieStore {
    /// All cookies visible to the page, formatted like a `Cookie` header.
    fn read_all(&self) -> String;

    /// Set or, for [removals](Cookie::removal), delete a cookie.
    fn write(&self, cookie: &Cookie) -> Result<(), CookieError>;
}

/// A [`CookieStore`] kept in memory, for tests and platforms without a document.
///
/// Path and domain are not tracked: every cookie is visible everywhere.
#[derive(Default)]
pub struct MemoryCookieStore {
    jar: RefCell<CookieJar>,
}

impl MemoryCookieStore {
    /// Start with the cookies of a `Cookie` header, e.g. the one of the request that served the app.
    pub fn with_header(header: &str) -> Self {
        Self {
            jar: RefCell::new(CookieJar::parse(header)),
        }
    }
}

impl CookieStore for MemoryCookieStore {
    fn read_all(&self) -> String {
        self.jar
            .borrow()
            .iter()
            .map(|(name, value)| format!("{name}={}", encode_value(value)))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, cookie: &Cookie) -> Result<(), CookieError> {
        let mut jar = self.jar.borrow_mut();
        if cookie.is_removal() {
            jar.remove(cookie.name());
        } else {
            jar.insert(cookie.name(), cookie.value());
        }
        Ok(())
    }
}

/// A [`CookieStore`] backed by `document.cookie`.
#[cfg(feature = "web")]
pub struct DocumentCookieStore {
    document: web_sys::HtmlDocument,
}

#[cfg(feature = "web")]
impl DocumentCookieStore {
    pub fn new() -> Result<Self, CookieError> {
        use wasm_bindgen::JsCast;

        let document = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or_else(|| CookieError::Store("no html document is available".to_string()))?;

        Ok(Self { document })
    }
}

#[cfg(feature = "web")]
impl CookieStore for DocumentCookieStore {
    fn read_all(&self) -> String {
        self.document.cookie().unwrap_or_else(|err| {
            tracing::error!("failed to read document.cookie: {err:?}");
            String::new()
        })
    }

    fn write(&self, cookie: &Cookie) -> Result<(), CookieError> {
        self.document
            .set_cookie(&cookie.to_header_value())
            .map_err(|err| CookieError::Store(format!("{err:?}")))
    }
}

/// A cheaply cloneable handle to a [`CookieStore`].
///
/// Two handles are equal when they point at the same store.
#[derive(Clone)]
pub struct SharedCookieStore(Rc<dyn CookieStore>);

impl SharedCookieStore {
    pub fn new(store: impl CookieStore + 'static) -> Self {
        Self(Rc::new(store))
    }

    /// The store of the current platform: `document.cookie` with the `web` feature on a wasm
    /// target, memory everywhere else.
    pub fn platform() -> Self {
        #[cfg(all(feature = "web", target_arch = "wasm32"))]
        match DocumentCookieStore::new() {
            Ok(store) => return Self::new(store),
            Err(err) => tracing::error!("falling back to in-memory cookies: {err}"),
        }

        Self::new(MemoryCookieStore::default())
    }
}

impl Deref for SharedCookieStore {
    type Target = dyn CookieStore;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl PartialEq for SharedCookieStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for SharedCookieStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedCookieStore")
            .field(&self.0.read_all())
            .finish()
    }
}

impl<S: CookieStore + 'static> From<S> for SharedCookieStore {
    fn from(store: S) -> Self {
        Self::new(store)
    }
}
