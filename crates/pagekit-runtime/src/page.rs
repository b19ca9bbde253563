//! Page
//!
//! Owns everything a script can touch and implements dispatch, default
//! actions, navigation and the user-input simulation used by hosts and
//! tests.

use pagekit_dom::{Document, NodeId};

use crate::events::{Event, EventTarget, EventType, ListenerId, ListenerStore};
use crate::location::Location;
use crate::timers::{TimerId, TimerQueue};
use crate::window::{ScrollBehavior, Window};
use crate::{History, PageResult};

/// Upper bound on tasks run by a single `run_all`
const MAX_FLUSH: usize = 10_000;

/// `document.readyState`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Interactive,
    Complete,
}

/// A loaded page: document, window, timers and listeners
pub struct Page {
    document: Document,
    window: Window,
    timers: TimerQueue,
    listeners: ListenerStore,
    focused: Option<NodeId>,
    ready_state: ReadyState,
}

impl Page {
    /// Wrap a parsed document; the page starts in the `Loading` state
    pub fn new(document: Document) -> PageResult<Self> {
        let location = Location::new(document.url())?;
        Ok(Self {
            document,
            window: Window::new(location),
            timers: TimerQueue::new(),
            listeners: ListenerStore::new(),
            focused: None,
            ready_state: ReadyState::Loading,
        })
    }

    /// Set the initial viewport size without firing `resize`
    pub fn with_viewport(mut self, width: f64, height: f64) -> Self {
        self.window.inner_width = width;
        self.window.inner_height = height;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn document_mut(&mut self) -> &mut Document {
        &mut self.document
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn location(&self) -> &Location {
        &self.window.location
    }

    pub fn history(&self) -> &History {
        &self.window.history
    }

    pub fn navigations(&self) -> &[String] {
        &self.window.navigations
    }

    pub fn scroll_y(&self) -> f64 {
        self.window.scroll_y
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    /// Currently focused element
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    // ---- listeners ----

    pub fn add_event_listener(
        &mut self,
        target: impl Into<EventTarget>,
        event_type: EventType,
        listener: impl Fn(&mut Page, &mut Event) + 'static,
    ) -> ListenerId {
        self.listeners
            .add(target.into(), event_type, std::rc::Rc::new(listener))
    }

    pub fn remove_event_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    pub fn listener_count(&self, target: impl Into<EventTarget>, event_type: EventType) -> usize {
        self.listeners.count(target.into(), event_type)
    }

    /// Dispatch `event`; returns false if a listener prevented the default
    pub fn dispatch_event(&mut self, event: &mut Event) -> bool {
        let path = self.propagation_path(event.target, event.event_type.bubbles());
        tracing::trace!("Dispatching {} to {:?}", event.event_type, event.target);

        for current in path {
            event.current_target = current;
            // Snapshot: listeners added during dispatch wait for the next event
            for listener in self.listeners.get(current, event.event_type) {
                listener(self, event);
            }
            if event.is_propagation_stopped() {
                break;
            }
        }
        event.current_target = event.target;
        !event.is_default_prevented()
    }

    /// Dispatch a plain event of `event_type` at `target`
    pub fn fire(&mut self, event_type: EventType, target: impl Into<EventTarget>) -> bool {
        let mut event = Event::new(event_type, target);
        self.dispatch_event(&mut event)
    }

    fn propagation_path(&self, target: EventTarget, bubbles: bool) -> Vec<EventTarget> {
        let mut path = vec![target];
        if !bubbles {
            return path;
        }
        match target {
            EventTarget::Window => {}
            EventTarget::Document => path.push(EventTarget::Window),
            EventTarget::Node(id) => {
                let tree = self.document.tree();
                let root = tree.root();
                path.extend(
                    tree.ancestors(id)
                        .filter(|&a| a != root)
                        .map(EventTarget::Node),
                );
                if tree.is_connected(id) {
                    path.push(EventTarget::Document);
                    path.push(EventTarget::Window);
                }
            }
        }
        path
    }

    // ---- user input ----

    /// Click an element, running default actions unless prevented
    pub fn click(&mut self, node: NodeId) -> bool {
        if self.is_disabled(node) {
            tracing::trace!("Ignoring click on disabled control {:?}", node);
            return false;
        }

        let checkable = self.document.tree().is_checkable(node);
        let was_checked = self.document.tree().checked(node);
        if checkable {
            let radio = self.document.tree().control_type(node) == "radio";
            self.document
                .tree_mut()
                .set_checked(node, radio || !was_checked);
        }

        let mut event = Event::new(EventType::Click, node);
        if !self.dispatch_event(&mut event) {
            if checkable {
                self.document.tree_mut().set_checked(node, was_checked);
            }
            return false;
        }

        if checkable && self.document.tree().checked(node) != was_checked {
            self.fire(EventType::Input, node);
            self.fire(EventType::Change, node);
        }
        self.activate(node);
        true
    }

    /// Activation behavior: follow links, submit forms
    fn activate(&mut self, node: NodeId) {
        if let Ok(Some(link)) = self.document.closest(node, "a[href]") {
            let href = self.document.attr(link, "href").unwrap_or_default().to_string();
            if let Err(err) = self.navigate(&href) {
                tracing::warn!("Link navigation to {:?} failed: {}", href, err);
            }
            return;
        }

        let Ok(Some(control)) = self.document.closest(node, "button, input") else {
            return;
        };
        if self.document.tree().control_type(control) != "submit" || self.is_disabled(control) {
            return;
        }
        if let Ok(Some(form)) = self.document.closest(control, "form") {
            self.request_submit(form);
        }
    }

    fn is_disabled(&self, node: NodeId) -> bool {
        matches!(
            self.document.tree().tag_name(node),
            Some("input" | "select" | "textarea" | "button")
        ) && self.document.has_attr(node, "disabled")
    }

    /// Fire `submit` at a form; navigates to its action unless prevented
    pub fn request_submit(&mut self, form: NodeId) -> bool {
        if !self.fire(EventType::Submit, form) {
            return false;
        }
        let action = match self.document.attr(form, "action") {
            Some(action) if !action.trim().is_empty() => action.trim().to_string(),
            _ => self.window.location.href().to_string(),
        };
        if let Err(err) = self.navigate(&action) {
            tracing::warn!("Form submission to {:?} failed: {}", action, err);
        }
        true
    }

    /// Key press at the focused element, or at `<body>` when nothing has focus
    pub fn press_key(&mut self, key: &str) -> bool {
        let target = self.focused.unwrap_or(self.document.body());
        let mut event = Event::key_down(target, key);
        self.dispatch_event(&mut event)
    }

    /// Focus `node`, replace its value with `text` and fire `input`
    pub fn type_text(&mut self, node: NodeId, text: &str) {
        self.focus(node);
        self.document.tree_mut().set_value(node, text);
        self.fire(EventType::Input, node);
    }

    /// Move focus, firing `blur` on the previous element first
    pub fn focus(&mut self, node: NodeId) {
        if self.focused == Some(node) {
            return;
        }
        if let Some(previous) = self.focused.take() {
            self.fire(EventType::Blur, previous);
        }
        self.focused = Some(node);
        self.fire(EventType::Focus, node);
    }

    /// Remove focus from `node` if it has it
    pub fn blur(&mut self, node: NodeId) {
        if self.focused == Some(node) {
            self.focused = None;
            self.fire(EventType::Blur, node);
        }
    }

    /// Report a failed resource load (`error` on an image)
    pub fn fail_image_load(&mut self, node: NodeId) {
        self.fire(EventType::Error, node);
    }

    /// Parsing finished: `interactive` plus `DOMContentLoaded`
    pub fn finish_loading(&mut self) {
        if self.ready_state != ReadyState::Loading {
            return;
        }
        self.ready_state = ReadyState::Interactive;
        self.fire(EventType::DomContentLoaded, EventTarget::Document);
    }

    /// Subresources finished: `complete` plus `load` on the window
    pub fn complete_loading(&mut self) {
        self.finish_loading();
        if self.ready_state == ReadyState::Complete {
            return;
        }
        self.ready_state = ReadyState::Complete;
        self.fire(EventType::Load, EventTarget::Window);
    }

    /// Change the viewport size and fire `resize`
    pub fn resize(&mut self, width: f64, height: f64) {
        self.window.inner_width = width;
        self.window.inner_height = height;
        self.fire(EventType::Resize, EventTarget::Window);
    }

    /// `window.scrollTo`; there is no animation, smooth scrolls land at once
    pub fn scroll_to(&mut self, top: f64, behavior: ScrollBehavior) {
        let top = top.max(0.0);
        self.window.last_scroll_behavior = Some(behavior);
        if top != self.window.scroll_y {
            self.window.scroll_y = top;
            self.fire(EventType::Scroll, EventTarget::Window);
        }
    }

    // ---- timers ----

    pub fn set_timeout(&mut self, delay_ms: u64, task: impl FnOnce(&mut Page) + 'static) -> TimerId {
        self.timers.schedule(delay_ms, Box::new(task))
    }

    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        self.timers.clear(id)
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.timers.now_ms()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.pending()
    }

    /// Advance the clock by `ms`, running every task that comes due
    pub fn advance_time(&mut self, ms: u64) {
        let target = self.timers.now_ms().saturating_add(ms);
        while let Some((id, due, task)) = self.timers.pop_due(target) {
            self.timers.set_now(due);
            tracing::trace!("Running timer {:?} at {}ms", id, due);
            task(self);
        }
        self.timers.set_now(target);
    }

    /// Run tasks until the queue is empty; returns how many ran
    pub fn run_all(&mut self) -> usize {
        let mut ran = 0;
        while let Some(due) = self.timers.next_due() {
            if ran >= MAX_FLUSH {
                tracing::warn!("Timer queue still busy after {} tasks", ran);
                break;
            }
            if let Some((_, due, task)) = self.timers.pop_due(due) {
                self.timers.set_now(due);
                task(self);
                ran += 1;
            }
        }
        ran
    }

    // ---- navigation ----

    /// Follow `href`. A fragment-only change stays in the document and
    /// scrolls to the target; anything else is recorded as a navigation.
    pub fn navigate(&mut self, href: &str) -> PageResult<()> {
        let url = self.window.location.resolve(href)?;

        if let Some(fragment) = url.fragment().filter(|_| self.window.location.is_same_document(&url)) {
            let fragment = fragment.to_string();
            tracing::debug!("Fragment navigation to #{}", fragment);
            self.set_current_url(url);
            if let Some(target) = self.document.get_element_by_id(&fragment) {
                let top = self.document.geometry(target).offset_top;
                self.scroll_to(top, ScrollBehavior::Auto);
            }
            return Ok(());
        }

        tracing::info!("Navigating to {}", url);
        self.window.navigations.push(url.to_string());
        self.set_current_url(url);
        Ok(())
    }

    /// `history.pushState(null, "", url)`; never scrolls or navigates
    pub fn push_state(&mut self, url: &str) -> PageResult<()> {
        let url = self.window.location.resolve(url)?;
        self.set_current_url(url);
        Ok(())
    }

    fn set_current_url(&mut self, url: url::Url) {
        self.window.history.push_state(None, url.to_string());
        self.document.set_url(url.as_str());
        self.window.location.set(url);
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("url", &self.window.location.href())
            .field("ready_state", &self.ready_state)
            .field("focused", &self.focused)
            .field("timers", &self.timers)
            .field("listeners", &self.listeners)
            .finish()
    }
}
