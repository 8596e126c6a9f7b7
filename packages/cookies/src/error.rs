use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CookieError {
    #[error(r#"invalid cookie name "{0}""#)]
    InvalidName(String),

    #[error("the cookie store rejected the write: {0}")]
    Store(String),
}
