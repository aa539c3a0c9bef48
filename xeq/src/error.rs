use thiserror::Error;

/// Errors from the date-time and URI wrappers.
///
/// The sequence operations never produce an `Error`; over there absence is
/// an `Option`, not a failure.
#[derive(Debug, Error)]
pub enum Error {
    /// The input could not be parsed as a URL at all.
    #[error("invalid URL: {0}")]
    Uri(#[from] url::ParseError),
    /// The input parsed as a URL, but only after the parser repaired it.
    #[error("URL syntax violation: {0}")]
    UriViolation(url::SyntaxViolation),
    /// The input is not an RFC 3339 date-time.
    #[error("invalid date-time: {0}")]
    DateTime(#[from] chrono::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
