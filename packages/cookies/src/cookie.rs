use std::fmt::{self, Display};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::error::CookieError;

/// Characters that may not appear verbatim in a cookie value.
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'\\')
    .add(b'%');

/// The `SameSite` attribute of a cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SameSite::Strict => f.write_str("Strict"),
            SameSite::Lax => f.write_str("Lax"),
            SameSite::None => f.write_str("None"),
        }
    }
}

/// The attributes sent along with a cookie when it is set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: Option<String>,
    pub domain: Option<String>,
    /// Lifetime in seconds. Zero or less expires the cookie immediately.
    pub max_age: Option<i64>,
    pub secure: bool,
    pub same_site: Option<SameSite>,
}

impl CookieOptions {
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = Some(same_site);
        self
    }
}

/// A cookie to be written to a [`CookieStore`](crate::store::CookieStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    name: String,
    value: String,
    options: CookieOptions,
}

impl Cookie {
    /// Create a session cookie.
    ///
    /// Fails if `name` is not a valid cookie name: it must be non-empty and may not contain
    /// whitespace, control characters or any of `()<>@,;:\"/[]?={}`.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Result<Self, CookieError> {
        let name = name.into();
        if !valid_name(&name) {
            return Err(CookieError::InvalidName(name));
        }

        Ok(Self {
            name,
            value: value.into(),
            options: CookieOptions::default(),
        })
    }

    /// Create a cookie that deletes `name` when written.
    ///
    /// `options` must carry the same path and domain the cookie was set with.
    pub fn removal(name: impl Into<String>, options: CookieOptions) -> Result<Self, CookieError> {
        Ok(Self::new(name, "")?.with_options(options.max_age(0)))
    }

    pub fn with_options(mut self, options: CookieOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn options(&self) -> &CookieOptions {
        &self.options
    }

    /// Whether writing the cookie deletes it.
    pub fn is_removal(&self) -> bool {
        matches!(self.options.max_age, Some(age) if age <= 0)
    }

    /// Serialize the cookie the way `document.cookie` and `Set-Cookie` expect it.
    ///
    /// ```rust
    /// # use podscraper_cookies::prelude::*;
    /// let cookie = Cookie::new("theme", "dark mode")
    ///     .unwrap()
    ///     .with_options(CookieOptions::default().path("/").same_site(SameSite::Lax));
    ///
    /// assert_eq!(cookie.to_header_value(), "theme=dark%20mode; Path=/; SameSite=Lax");
    /// ```
    pub fn to_header_value(&self) -> String {
        let mut header = format!("{}={}", self.name, encode_value(&self.value));

        let CookieOptions {
            path,
            domain,
            max_age,
            secure,
            same_site,
        } = &self.options;

        if let Some(path) = path {
            header.push_str(&format!("; Path={path}"));
        }
        if let Some(domain) = domain {
            header.push_str(&format!("; Domain={domain}"));
        }
        if let Some(max_age) = max_age {
            header.push_str(&format!("; Max-Age={max_age}"));
        }
        if *secure {
            header.push_str("; Secure");
        }
        if let Some(same_site) = same_site {
            header.push_str(&format!("; SameSite={same_site}"));
        }

        header
    }
}

/// Percent encode a cookie value so it survives a `Cookie` header.
pub(crate) fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, COOKIE_VALUE).to_string()
}

pub(crate) fn valid_name(name: &str) -> bool {
    const SEPARATORS: &[char] = &[
        '(', ')', '<', '>', '@', ',', ';', ':', '\\', '"', '/', '[', ']', '?', '=', '{', '}',
    ];

    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii() && !c.is_ascii_control() && c != ' ' && !SEPARATORS.contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_cookie() {
        let cookie = Cookie::new("session", "abc123").unwrap();
        assert_eq!(cookie.to_header_value(), "session=abc123");
        assert!(!cookie.is_removal());
    }

    #[test]
    fn all_attributes() {
        let cookie = Cookie::new("session", "abc")
            .unwrap()
            .with_options(
                CookieOptions::default()
                    .path("/")
                    .domain("podscraper.example")
                    .max_age(3600)
                    .secure(true)
                    .same_site(SameSite::Strict),
            );

        assert_eq!(
            cookie.to_header_value(),
            "session=abc; Path=/; Domain=podscraper.example; Max-Age=3600; Secure; SameSite=Strict"
        );
    }

    #[test]
    fn values_are_encoded() {
        let cookie = Cookie::new("q", "a;b,c \"d\" 100%").unwrap();
        assert_eq!(cookie.to_header_value(), "q=a%3Bb%2Cc%20%22d%22%20100%25");
    }

    #[test]
    fn removal_expires_immediately() {
        let cookie = Cookie::removal("session", CookieOptions::default().path("/")).unwrap();
        assert!(cookie.is_removal());
        assert_eq!(cookie.to_header_value(), "session=; Path=/; Max-Age=0");
    }

    #[test]
    fn invalid_names_are_rejected() {
        for name in ["", "a b", "a=b", "a;b", "tab\there", "ünï", "path/"] {
            assert_eq!(
                Cookie::new(name, "x").unwrap_err(),
                CookieError::InvalidName(name.to_string())
            );
        }
        assert!(Cookie::new("__Host-id", "x").is_ok());
    }
}
