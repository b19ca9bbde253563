//! Window
//!
//! Viewport, scroll offset, location and session history.

use crate::{History, Location};

/// `behavior` member of `ScrollToOptions`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Auto,
    Smooth,
}

/// Browser window state
#[derive(Debug, Clone)]
pub struct Window {
    pub(crate) scroll_y: f64,
    pub(crate) inner_width: f64,
    pub(crate) inner_height: f64,
    pub(crate) last_scroll_behavior: Option<ScrollBehavior>,
    pub(crate) location: Location,
    pub(crate) history: History,
    pub(crate) navigations: Vec<String>,
}

impl Window {
    pub(crate) fn new(location: Location) -> Self {
        let history = History::new(location.href());
        Self {
            scroll_y: 0.0,
            inner_width: 1280.0,
            inner_height: 800.0,
            last_scroll_behavior: None,
            location,
            history,
            navigations: Vec::new(),
        }
    }

    /// Vertical scroll offset (`pageYOffset`)
    pub fn scroll_y(&self) -> f64 {
        self.scroll_y
    }

    pub fn inner_width(&self) -> f64 {
        self.inner_width
    }

    pub fn inner_height(&self) -> f64 {
        self.inner_height
    }

    /// Behavior of the most recent programmatic scroll
    pub fn last_scroll_behavior(&self) -> Option<ScrollBehavior> {
        self.last_scroll_behavior
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Cross-document navigations requested so far, oldest first
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }
}
