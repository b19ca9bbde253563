//! Pagekit Runtime
//!
//! The browser context the page behaviors run in: a [`Page`] owns the
//! document, the window (scrolling, viewport, location, history), a
//! virtual-clock timer queue and the event listeners. Time only moves
//! when [`Page::advance_time`] or [`Page::run_all`] is called.

mod error;
mod events;
mod history;
mod location;
mod page;
mod rate_limit;
mod timers;
mod window;

pub use error::{PageError, PageResult};
pub use events::{Event, EventTarget, EventType, Listener, ListenerId, ListenerStore};
pub use history::{History, HistoryEntry};
pub use location::Location;
pub use page::{Page, ReadyState};
pub use rate_limit::{debounce, throttle};
pub use timers::{TimerId, TimerQueue};
pub use window::{ScrollBehavior, Window};

pub use pagekit_dom::{Document, NodeId};
