//! Behavior setup errors

use pagekit_dom::DomError;
use pagekit_runtime::PageError;

pub type InitResult<T = ()> = Result<T, InitError>;

/// Failure while wiring up a behavior
///
/// Missing markup is not an error; behaviors skip themselves instead.
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    #[error(transparent)]
    Dom(#[from] DomError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error("invalid validation pattern: {0}")]
    Pattern(#[from] regex::Error),
}
