//! Pagekit
//!
//! Behaviors for a server-rendered marketing site: collapsible navigation,
//! smooth in-page scrolling, scroll-spy and path highlighting, image
//! normalization, form validation with simulated submission, toast
//! notifications, accordions and a scroll-to-top button.
//!
//! Each behavior looks for its markup and quietly does nothing when it is
//! absent. [`App`] runs them all once per page.

pub mod accordion;
pub mod active_menu;
mod app;
mod config;
mod error;
pub mod forms;
pub mod images;
pub mod logging;
pub mod nav_menu;
pub mod routes;
pub mod scroll_spy;
pub mod scroll_to_top;
pub mod smooth_scroll;
pub mod toast;

pub use app::{App, Behavior, InitState};
pub use config::{Config, Messages};
pub use error::{InitError, InitResult};
pub use forms::ValidationError;
pub use toast::Severity;

pub use pagekit_runtime::Page;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
