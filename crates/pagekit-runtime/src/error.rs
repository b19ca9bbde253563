//! Runtime errors

use pagekit_dom::DomError;

/// Result type for page operations
pub type PageResult<T> = Result<T, PageError>;

/// Page runtime errors
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Dom(#[from] DomError),
}
