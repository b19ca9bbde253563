//! Smooth in-page anchor scrolling
//!
//! On the home page `#section` links scroll smoothly, leaving room for the
//! fixed navbar, and record the hash in history. Elsewhere they are
//! rewritten to `/#section` so they lead back to the home page section.

use std::rc::Rc;

use pagekit_dom::NodeId;
use pagekit_runtime::{Event, EventType, Page, ScrollBehavior};

use crate::{Config, InitResult, routes};

/// Marks links owned by another widget (collapse, modal, tab)
const TOGGLE_ATTR: &str = "data-bs-toggle";

fn is_placeholder(href: &str) -> bool {
    href.is_empty() || href == "#" || href == "#!"
}

pub fn init(page: &mut Page, config: &Rc<Config>) -> InitResult {
    let home = routes::is_home_route(page.location().pathname());
    let anchors = page.document().query_selector_all(r##"a[href^="#"]"##)?;

    for anchor in anchors {
        let doc = page.document_mut();
        let href = doc.attr(anchor, "href").unwrap_or_default().to_string();
        if is_placeholder(&href) {
            continue;
        }

        let section = &href[1..];
        if !home && !section.is_empty() && !doc.has_attr(anchor, TOGGLE_ATTR) {
            doc.set_attr(anchor, "href", &format!("/#{section}"));
        }

        let config = Rc::clone(config);
        page.add_event_listener(anchor, EventType::Click, move |page, event| {
            on_click(page, event, anchor, home, &config);
        });
    }

    tracing::debug!("Smooth scrolling ready (home page: {})", home);
    Ok(())
}

fn on_click(page: &mut Page, event: &mut Event, anchor: NodeId, home: bool, config: &Config) {
    let doc = page.document();
    let href = doc.attr(anchor, "href").unwrap_or_default().to_string();
    if is_placeholder(&href) || doc.has_attr(anchor, TOGGLE_ATTR) {
        return;
    }
    let Some(hash_index) = href.find('#') else {
        return;
    };
    let hash = &href[hash_index + 1..];
    let Some(target) = doc.get_element_by_id(hash) else {
        return;
    };
    if !(home || hash_index == 0) {
        return;
    }

    event.prevent_default();
    let navbar_height = match doc.query_selector(".navbar") {
        Ok(Some(navbar)) => doc.geometry(navbar).offset_height,
        _ => config.fallback_navbar_height,
    };
    let element_top = doc
        .geometry(target)
        .bounding_client_rect(0.0, page.scroll_y())
        .top()
        + page.scroll_y();

    page.scroll_to(element_top - navbar_height, ScrollBehavior::Smooth);
    if let Err(err) = page.push_state(&format!("#{hash}")) {
        tracing::warn!("Could not record #{} in history: {}", hash, err);
    }
}
