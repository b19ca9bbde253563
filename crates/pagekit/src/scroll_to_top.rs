//! Scroll-to-top button
//!
//! A floating button appended to `<body>` that fades in past the scroll
//! threshold. Visibility changes through opacity so it can transition.

use std::rc::Rc;

use pagekit_dom::NodeId;
use pagekit_runtime::{EventTarget, EventType, Page, ScrollBehavior, throttle};

use crate::{Config, InitResult};

pub const BUTTON_CLASS: &str = "scroll-to-top";

const BUTTON_STYLE: &str = "position: fixed; bottom: 20px; right: 20px; width: 48px; height: 48px; \
    border-radius: 50%; background: var(--color-accent); color: white; border: none; cursor: pointer; \
    opacity: 0; visibility: hidden; transition: all 0.3s; z-index: 1000; font-size: 20px; \
    box-shadow: 0 4px 12px rgba(0,0,0,0.15);";

pub fn init(page: &mut Page, config: &Rc<Config>) -> InitResult {
    let doc = page.document_mut();
    let body = doc.body();
    let button = doc.tree_mut().create_element("button");
    doc.set_attr(button, "class", BUTTON_CLASS);
    doc.set_attr(button, "aria-label", &config.messages.scroll_to_top_label);
    if let Some(el) = doc.element_mut(button) {
        el.set_css_text(BUTTON_STYLE);
    }
    doc.tree_mut().set_text_content(button, "↑")?;
    doc.tree_mut().append_child(body, button)?;

    page.add_event_listener(button, EventType::Click, |page, _| {
        page.scroll_to(0.0, ScrollBehavior::Smooth);
    });

    let threshold = config.scroll_to_top_threshold;
    let on_scroll = throttle(config.scroll_throttle_ms, move |page: &mut Page, ()| {
        update(page, button, threshold);
    });
    page.add_event_listener(EventTarget::Window, EventType::Scroll, move |page, _| on_scroll(page, ()));

    update(page, button, threshold);
    tracing::debug!("Scroll-to-top button added");
    Ok(())
}

fn update(page: &mut Page, button: NodeId, threshold: f64) {
    let visible = page.scroll_y() > threshold;
    let doc = page.document_mut();
    doc.set_style(button, "opacity", if visible { "1" } else { "0" });
    doc.set_style(button, "visibility", if visible { "visible" } else { "hidden" });
}
