//! Application entry point
//!
//! [`App`] wires every behavior onto a page exactly once. Which behaviors
//! have run is tracked in an [`InitState`] value owned by the app rather
//! than in globals, so separate apps (and tests) never share flags.

use std::cell::RefCell;
use std::rc::Rc;

use pagekit_dom::NodeId;
use pagekit_runtime::{EventTarget, EventType, Page, ReadyState};

use crate::toast::{self, Severity};
use crate::{Config, InitResult};
use crate::{accordion, active_menu, forms, images, nav_menu, scroll_spy, scroll_to_top, smooth_scroll};

/// One independently initialized unit of page functionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    NavMenu,
    SmoothScroll,
    ScrollSpy,
    ActiveMenu,
    Images,
    Forms,
    Accordion,
    ScrollToTop,
}

impl Behavior {
    /// Initialization order
    pub const ALL: [Behavior; 8] = [
        Behavior::NavMenu,
        Behavior::SmoothScroll,
        Behavior::ScrollSpy,
        Behavior::ActiveMenu,
        Behavior::Images,
        Behavior::Forms,
        Behavior::Accordion,
        Behavior::ScrollToTop,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Behavior::NavMenu => "nav-menu",
            Behavior::SmoothScroll => "smooth-scroll",
            Behavior::ScrollSpy => "scroll-spy",
            Behavior::ActiveMenu => "active-menu",
            Behavior::Images => "images",
            Behavior::Forms => "forms",
            Behavior::Accordion => "accordion",
            Behavior::ScrollToTop => "scroll-to-top",
        }
    }

    fn run(self, page: &mut Page, config: &Rc<Config>) -> InitResult {
        match self {
            Behavior::NavMenu => nav_menu::init(page, config),
            Behavior::SmoothScroll => smooth_scroll::init(page, config),
            Behavior::ScrollSpy => scroll_spy::init(page, config),
            Behavior::ActiveMenu => active_menu::init(page, config),
            Behavior::Images => images::init(page, config),
            Behavior::Forms => forms::init(page, config),
            Behavior::Accordion => accordion::init(page, config),
            Behavior::ScrollToTop => scroll_to_top::init(page, config),
        }
    }
}

impl std::fmt::Display for Behavior {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Which behaviors have been initialized; flags are never cleared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InitState {
    pub initialized: bool,
    pub nav_menu: bool,
    pub smooth_scroll: bool,
    pub scroll_spy: bool,
    pub active_menu: bool,
    pub images: bool,
    pub forms: bool,
    pub accordion: bool,
    pub scroll_to_top: bool,
}

impl InitState {
    pub fn is_done(&self, behavior: Behavior) -> bool {
        *self.flag(behavior)
    }

    fn mark(&mut self, behavior: Behavior) {
        *self.flag_mut(behavior) = true;
    }

    fn flag(&self, behavior: Behavior) -> &bool {
        match behavior {
            Behavior::NavMenu => &self.nav_menu,
            Behavior::SmoothScroll => &self.smooth_scroll,
            Behavior::ScrollSpy => &self.scroll_spy,
            Behavior::ActiveMenu => &self.active_menu,
            Behavior::Images => &self.images,
            Behavior::Forms => &self.forms,
            Behavior::Accordion => &self.accordion,
            Behavior::ScrollToTop => &self.scroll_to_top,
        }
    }

    fn flag_mut(&mut self, behavior: Behavior) -> &mut bool {
        match behavior {
            Behavior::NavMenu => &mut self.nav_menu,
            Behavior::SmoothScroll => &mut self.smooth_scroll,
            Behavior::ScrollSpy => &mut self.scroll_spy,
            Behavior::ActiveMenu => &mut self.active_menu,
            Behavior::Images => &mut self.images,
            Behavior::Forms => &mut self.forms,
            Behavior::Accordion => &mut self.accordion,
            Behavior::ScrollToTop => &mut self.scroll_to_top,
        }
    }
}

/// The page's behavior layer
///
/// Cloning shares the configuration and the init state.
#[derive(Clone, Default)]
pub struct App {
    config: Rc<Config>,
    state: Rc<RefCell<InitState>>,
}

impl App {
    pub fn new(config: Config) -> Self {
        Self {
            config: Rc::new(config),
            state: Rc::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Snapshot of the init flags
    pub fn state(&self) -> InitState {
        *self.state.borrow()
    }

    /// Initialize every behavior in order; later calls do nothing
    pub fn init(&self, page: &mut Page) -> InitState {
        if self.state.borrow().initialized {
            tracing::debug!("App already initialized");
            return self.state();
        }
        self.state.borrow_mut().initialized = true;

        for behavior in Behavior::ALL {
            self.init_behavior(page, behavior);
        }
        tracing::info!("Page behaviors initialized for {}", page.location().href());
        self.state()
    }

    /// Initialize a single behavior unless it already ran
    ///
    /// Failures are logged; the behavior still counts as initialized so
    /// its listeners are never attached twice.
    pub fn init_behavior(&self, page: &mut Page, behavior: Behavior) {
        if self.state.borrow().is_done(behavior) {
            return;
        }
        self.state.borrow_mut().mark(behavior);

        if let Err(err) = behavior.run(page, &self.config) {
            tracing::warn!("Behavior {} failed to initialize: {}", behavior, err);
        }
    }

    /// Initialize now, or on `DOMContentLoaded` if the page is still loading
    pub fn attach(&self, page: &mut Page) {
        if page.ready_state() == ReadyState::Loading {
            let app = self.clone();
            page.add_event_listener(EventTarget::Document, EventType::DomContentLoaded, move |page, _| {
                app.init(page);
            });
            tracing::debug!("Deferring init until DOMContentLoaded");
        } else {
            self.init(page);
        }
    }

    /// Show a toast; `severity` accepts a [`Severity`] or a tag like `"success"`
    pub fn notify(&self, page: &mut Page, message: &str, severity: impl Into<Severity>) -> Option<NodeId> {
        match toast::notify(page, &self.config, message, severity.into()) {
            Ok(toast) => Some(toast),
            Err(err) => {
                tracing::warn!("Could not show notification: {}", err);
                None
            }
        }
    }
}

impl std::fmt::Debug for App {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("App")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
