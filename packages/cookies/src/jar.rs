use percent_encoding::percent_decode_str;

/// The cookies visible to the page, in the order the browser reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieJar {
    cookies: Vec<(String, String)>,
}

impl CookieJar {
    /// Parse a `Cookie` header or the value of `document.cookie`.
    ///
    /// Pairs without a name are skipped and values are percent decoded. When a name appears more
    /// than once the first value wins, since browsers list the cookie with the longest path first.
    ///
    /// ```rust
    /// # use podscraper_cookies::prelude::*;
    /// let jar = CookieJar::parse("theme=dark%20mode; session=abc; theme=light");
    /// assert_eq!(jar.get("theme"), Some("dark mode"));
    /// assert_eq!(jar.len(), 2);
    /// ```
    pub fn parse(header: &str) -> Self {
        let mut jar = Self::default();

        for pair in header.split(';') {
            let pair = pair.trim();
            let (name, value) = match pair.split_once('=') {
                Some((name, value)) => (name.trim(), value.trim()),
                None => ("", pair),
            };

            if name.is_empty() || jar.get(name).is_some() {
                continue;
            }

            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);
            let value = percent_decode_str(value).decode_utf8_lossy().into_owned();

            jar.cookies.push((name.to_string(), value));
        }

        jar
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.cookies
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Set `name` to `value`, keeping its position if it already exists.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.cookies.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.cookies.push((name, value)),
        }
    }

    /// Remove `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.cookies.iter().position(|(n, _)| n == name)?;
        Some(self.cookies.remove(index).1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cookies.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_header() {
        assert!(CookieJar::parse("").is_empty());
        assert!(CookieJar::parse(" ; ;").is_empty());
    }

    #[test]
    fn whitespace_is_trimmed() {
        let jar = CookieJar::parse("  a = 1 ;b=2;   c=3  ");
        let pairs: Vec<_> = jar.iter().collect();
        assert_eq!(pairs, [("a", "1"), ("b", "2"), ("c", "3")]);
    }

    #[test]
    fn values_may_contain_equals() {
        let jar = CookieJar::parse("token=abc==; empty=");
        assert_eq!(jar.get("token"), Some("abc=="));
        assert_eq!(jar.get("empty"), Some(""));
    }

    #[test]
    fn nameless_pairs_are_skipped() {
        let jar = CookieJar::parse("=orphan; bare; ok=1");
        assert_eq!(jar.len(), 1);
        assert_eq!(jar.get("ok"), Some("1"));
    }

    #[test]
    fn quoted_values_are_unwrapped() {
        let jar = CookieJar::parse(r#"q="hello world""#);
        assert_eq!(jar.get("q"), Some("hello world"));
    }

    #[test]
    fn insert_and_remove() {
        let mut jar = CookieJar::parse("a=1; b=2");
        jar.insert("a", "3");
        jar.insert("c", "4");
        assert_eq!(jar.iter().collect::<Vec<_>>(), [("a", "3"), ("b", "2"), ("c", "4")]);

        assert_eq!(jar.remove("b"), Some("2".to_string()));
        assert_eq!(jar.remove("b"), None);
        assert!(!jar.contains("b"));
    }
}
