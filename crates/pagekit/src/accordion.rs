//! Accordion
//!
//! Single-open panel groups: expanding one panel collapses every other
//! panel in the same `.accordion`.

use std::rc::Rc;

use pagekit_dom::NodeId;
use pagekit_runtime::{EventType, Page};

use crate::{Config, InitResult};

pub fn init(page: &mut Page, _config: &Rc<Config>) -> InitResult {
    let buttons = page.document().query_selector_all(".accordion-button")?;
    for &button in &buttons {
        page.add_event_listener(button, EventType::Click, move |page, event| {
            event.prevent_default();
            if let Err(err) = toggle(page, button) {
                tracing::warn!("Accordion toggle failed: {}", err);
            }
        });
    }
    tracing::debug!("Accordion wired {} button(s)", buttons.len());
    Ok(())
}

/// Collapse the button's panel if open, otherwise open it alone
pub fn toggle(page: &mut Page, button: NodeId) -> InitResult {
    let doc = page.document_mut();
    let Some(target) = doc.attr(button, "data-bs-target").map(str::to_string) else {
        return Ok(());
    };
    let Some(panel) = doc.query_selector(&target)? else {
        return Ok(());
    };

    if doc.attr(button, "aria-expanded") == Some("true") {
        doc.set_attr(button, "aria-expanded", "false");
        doc.add_class(button, "collapsed");
        doc.remove_class(panel, "show");
        return Ok(());
    }

    if let Some(group) = doc.closest(button, ".accordion")? {
        for other in doc.query_selector_all_in(group, ".accordion-button")? {
            doc.set_attr(other, "aria-expanded", "false");
            doc.add_class(other, "collapsed");
        }
        for other in doc.query_selector_all_in(group, ".accordion-collapse")? {
            doc.remove_class(other, "show");
        }
    }

    doc.set_attr(button, "aria-expanded", "true");
    doc.remove_class(button, "collapsed");
    doc.add_class(panel, "show");
    Ok(())
}
