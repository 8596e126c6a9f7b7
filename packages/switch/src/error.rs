use thiserror::Error;

/// Errors raised while building a [`RouteTable`](crate::route::RouteTable).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error(r#"route pattern "{0}" must start with "/""#)]
    MissingLeadingSlash(String),

    #[error(r#"route pattern "{0}" must not contain a query or fragment"#)]
    QueryInPattern(String),
}

/// Errors raised by a [`HistoryProvider`](crate::history::HistoryProvider) talking to its host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error(r#"cannot navigate to "{0}", paths starting with "//" point to another host"#)]
    ForeignHost(String),

    #[error("the browser rejected the navigation: {0}")]
    Rejected(String),

    #[error("no browser window is available")]
    NoWindow,
}
