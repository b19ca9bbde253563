//! Events
//!
//! Event types, the event object handed to listeners, and per-target
//! listener storage.

use std::collections::HashMap;
use std::rc::Rc;

use pagekit_dom::NodeId;

use crate::Page;

/// Event type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventType {
    Click,
    KeyDown,
    Input,
    Change,
    Focus,
    Blur,
    Submit,
    Scroll,
    Resize,
    Error,
    Load,
    DomContentLoaded,
}

impl EventType {
    /// Check if this event type bubbles
    pub fn bubbles(&self) -> bool {
        matches!(
            self,
            EventType::Click
                | EventType::KeyDown
                | EventType::Input
                | EventType::Change
                | EventType::Submit
                | EventType::DomContentLoaded
        )
    }

    /// Check if `prevent_default` has any effect
    pub fn cancelable(&self) -> bool {
        matches!(self, EventType::Click | EventType::KeyDown | EventType::Submit)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Click => "click",
            EventType::KeyDown => "keydown",
            EventType::Input => "input",
            EventType::Change => "change",
            EventType::Focus => "focus",
            EventType::Blur => "blur",
            EventType::Submit => "submit",
            EventType::Scroll => "scroll",
            EventType::Resize => "resize",
            EventType::Error => "error",
            EventType::Load => "load",
            EventType::DomContentLoaded => "DOMContentLoaded",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a listener is registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    Window,
    Document,
    Node(NodeId),
}

impl From<NodeId> for EventTarget {
    fn from(id: NodeId) -> Self {
        EventTarget::Node(id)
    }
}

/// Event passed to listeners
#[derive(Debug, Clone)]
pub struct Event {
    pub event_type: EventType,
    pub target: EventTarget,
    pub current_target: EventTarget,
    /// Key value for keyboard events (`"Escape"`, `"a"`, ...)
    pub key: Option<String>,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl Event {
    pub fn new(event_type: EventType, target: impl Into<EventTarget>) -> Self {
        let target = target.into();
        Self {
            event_type,
            target,
            current_target: target,
            key: None,
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    /// Keyboard event
    pub fn key_down(target: impl Into<EventTarget>, key: &str) -> Self {
        let mut event = Self::new(EventType::KeyDown, target);
        event.key = Some(key.to_string());
        event
    }

    /// Target node, if the event was dispatched at one
    pub fn target_node(&self) -> Option<NodeId> {
        match self.target {
            EventTarget::Node(id) => Some(id),
            _ => None,
        }
    }

    /// Prevent default action
    pub fn prevent_default(&mut self) {
        if self.event_type.cancelable() {
            self.default_prevented = true;
        }
    }

    /// Stop propagation
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Check if default was prevented
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Event listener callback
pub type Listener = Rc<dyn Fn(&mut Page, &mut Event)>;

/// Handle for removing a listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

/// Listeners by target and event type, in registration order
#[derive(Default)]
pub struct ListenerStore {
    handlers: HashMap<(EventTarget, EventType), Vec<(ListenerId, Listener)>>,
    next_id: u64,
}

impl ListenerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add event listener
    pub fn add(&mut self, target: EventTarget, event_type: EventType, listener: Listener) -> ListenerId {
        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.handlers
            .entry((target, event_type))
            .or_default()
            .push((id, listener));
        id
    }

    /// Remove event listener
    pub fn remove(&mut self, id: ListenerId) -> bool {
        for listeners in self.handlers.values_mut() {
            if let Some(pos) = listeners.iter().position(|(l, _)| *l == id) {
                listeners.remove(pos);
                return true;
            }
        }
        false
    }

    /// Snapshot of the listeners for a target and type
    pub fn get(&self, target: EventTarget, event_type: EventType) -> Vec<Listener> {
        self.handlers
            .get(&(target, event_type))
            .map(|v| v.iter().map(|(_, l)| Rc::clone(l)).collect())
            .unwrap_or_default()
    }

    pub fn count(&self, target: EventTarget, event_type: EventType) -> usize {
        self.handlers
            .get(&(target, event_type))
            .map_or(0, Vec::len)
    }

    /// Total number of registered listeners
    pub fn len(&self) -> usize {
        self.handlers.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ListenerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerStore")
            .field("listeners", &self.len())
            .finish()
    }
}
