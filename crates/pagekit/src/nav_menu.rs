//! Collapsible mobile navigation
//!
//! The toggler shows and hides `.navbar-collapse`, mirrors the state into
//! `aria-expanded` and locks body scrolling while open. Escape, clicks
//! outside the menu, clicks on a nav link and widening the viewport past
//! the breakpoint all close it.

use std::cell::Cell;
use std::rc::Rc;

use pagekit_dom::NodeId;
use pagekit_runtime::{EventTarget, EventType, Page, debounce};

use crate::{Config, InitResult};

/// Body class that stops background scrolling
pub const NO_SCROLL_CLASS: &str = "u-no-scroll";

struct NavMenu {
    toggle: NodeId,
    collapse: NodeId,
    open: Cell<bool>,
}

impl NavMenu {
    fn open(&self, page: &mut Page) {
        self.set_open(page, true);
    }

    fn close(&self, page: &mut Page) {
        self.set_open(page, false);
    }

    fn toggle(&self, page: &mut Page) {
        self.set_open(page, !self.open.get());
    }

    fn set_open(&self, page: &mut Page, open: bool) {
        let doc = page.document_mut();
        let body = doc.body();
        if open {
            doc.add_class(self.collapse, "show");
            doc.add_class(body, NO_SCROLL_CLASS);
        } else {
            doc.remove_class(self.collapse, "show");
            doc.remove_class(body, NO_SCROLL_CLASS);
        }
        doc.set_attr(self.toggle, "aria-expanded", if open { "true" } else { "false" });
        self.open.set(open);
        tracing::trace!("Navigation menu {}", if open { "opened" } else { "closed" });
    }
}

pub fn init(page: &mut Page, config: &Rc<Config>) -> InitResult {
    let doc = page.document();
    let (Some(toggle), Some(collapse)) = (
        doc.query_selector(".navbar-toggler")?,
        doc.query_selector(".navbar-collapse")?,
    ) else {
        tracing::debug!("No navbar toggler or collapse, skipping menu");
        return Ok(());
    };
    let links = match doc.query_selector(".navbar-nav")? {
        Some(nav) => doc.query_selector_all_in(nav, ".nav-link")?,
        None => Vec::new(),
    };

    let menu = Rc::new(NavMenu {
        toggle,
        collapse,
        open: Cell::new(false),
    });

    let m = Rc::clone(&menu);
    page.add_event_listener(toggle, EventType::Click, move |page, event| {
        event.prevent_default();
        m.toggle(page);
    });

    let m = Rc::clone(&menu);
    page.add_event_listener(EventTarget::Document, EventType::KeyDown, move |page, event| {
        if event.key.as_deref() == Some("Escape") && m.open.get() {
            m.close(page);
            page.focus(m.toggle);
        }
    });

    let m = Rc::clone(&menu);
    page.add_event_listener(EventTarget::Document, EventType::Click, move |page, event| {
        if !m.open.get() {
            return;
        }
        let Some(target) = event.target_node() else {
            return;
        };
        let doc = page.document();
        if !doc.contains(m.collapse, target) && !doc.contains(m.toggle, target) {
            m.close(page);
        }
    });

    for link in links {
        let m = Rc::clone(&menu);
        page.add_event_listener(link, EventType::Click, move |page, _| {
            if m.open.get() {
                m.close(page);
            }
        });
    }

    let m = Rc::clone(&menu);
    let breakpoint = config.nav_breakpoint;
    let on_resize = debounce(config.resize_debounce_ms, move |page: &mut Page, ()| {
        if page.window().inner_width() >= breakpoint && m.open.get() {
            m.close(page);
        }
    });
    page.add_event_listener(EventTarget::Window, EventType::Resize, move |page, _| on_resize(page, ()));

    tracing::debug!("Navigation menu ready");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_close_sync_markers() {
        let mut doc = pagekit_dom::Document::new("https://example.lv/");
        let body = doc.body();
        let toggle = doc.tree_mut().create_element("button");
        let collapse = doc.tree_mut().create_element("div");
        doc.tree_mut().append_child(body, toggle).unwrap();
        doc.tree_mut().append_child(body, collapse).unwrap();
        let mut page = Page::new(doc).unwrap();
        let menu = NavMenu { toggle, collapse, open: Cell::new(false) };

        menu.open(&mut page);
        assert!(page.document().has_class(collapse, "show"));
        assert!(page.document().has_class(body, NO_SCROLL_CLASS));
        assert_eq!(page.document().attr(toggle, "aria-expanded"), Some("true"));

        menu.toggle(&mut page);
        assert!(!page.document().has_class(collapse, "show"));
        assert!(!page.document().has_class(body, NO_SCROLL_CLASS));
        assert_eq!(page.document().attr(toggle, "aria-expanded"), Some("false"));
    }
}
