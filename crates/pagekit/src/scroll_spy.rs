//! Scroll-spy
//!
//! Highlights the nav link of the section under the scroll position.

use std::rc::Rc;

use pagekit_dom::NodeId;
use pagekit_runtime::{EventTarget, EventType, Page, throttle};

use crate::{Config, InitResult};

struct ScrollSpy {
    sections: Vec<NodeId>,
    links: Vec<NodeId>,
    lookahead: f64,
}

impl ScrollSpy {
    /// Mark the link for the section containing `scroll_y + lookahead`.
    /// Positions between sections leave the current marks alone.
    fn update(&self, page: &mut Page) {
        let position = page.scroll_y() + self.lookahead;
        let doc = page.document();
        let Some(current) = self
            .sections
            .iter()
            .rev()
            .find(|&&section| doc.geometry(section).spans_y(position))
            .and_then(|&section| doc.attr(section, "id"))
        else {
            return;
        };
        let wanted = format!("#{current}");

        let doc = page.document_mut();
        for &link in &self.links {
            if doc.attr(link, "href") == Some(wanted.as_str()) {
                doc.add_class(link, "active");
                doc.set_attr(link, "aria-current", "page");
            } else {
                doc.remove_class(link, "active");
                doc.remove_attr(link, "aria-current");
            }
        }
    }
}

pub fn init(page: &mut Page, config: &Rc<Config>) -> InitResult {
    let doc = page.document();
    let sections = doc.query_selector_all("section[id]")?;
    let links = doc.query_selector_all(r##".nav-link[href^="#"]"##)?;
    if sections.is_empty() || links.is_empty() {
        tracing::debug!("No sections or hash nav links, skipping scroll-spy");
        return Ok(());
    }

    let spy = Rc::new(ScrollSpy {
        sections,
        links,
        lookahead: config.scroll_spy_offset,
    });

    let s = Rc::clone(&spy);
    let on_scroll = throttle(config.scroll_throttle_ms, move |page: &mut Page, ()| s.update(page));
    page.add_event_listener(EventTarget::Window, EventType::Scroll, move |page, _| on_scroll(page, ()));

    spy.update(page);
    tracing::debug!("Scroll-spy tracking {} sections", spy.sections.len());
    Ok(())
}
