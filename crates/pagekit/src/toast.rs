//! Toast notifications
//!
//! Each toast is an independent alert in a singleton fixed-position
//! container. It removes itself after the display time, or on a click of
//! its close button, in both cases after a short fade-out.

use std::rc::Rc;

use pagekit_dom::NodeId;
use pagekit_runtime::{EventType, Page};

use crate::{Config, InitResult};

/// Id of the container appended to `<body>`
pub const CONTAINER_ID: &str = "toast-container";

const CONTAINER_STYLE: &str = "position: fixed; top: 20px; right: 20px; z-index: 9999;";
const TOAST_STYLE: &str = "min-width: 250px; box-shadow: 0 4px 6px rgba(0,0,0,0.1);";

/// Alert flavor, rendered as the `alert-<tag>` class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Danger,
    Primary,
    Secondary,
    Light,
    Dark,
}

impl Severity {
    /// Parse a tag; unknown tags fall back to `Info`
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "warning" => Self::Warning,
            "danger" => Self::Danger,
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl From<&str> for Severity {
    fn from(tag: &str) -> Self {
        Self::from_tag(tag)
    }
}

/// Show `message` as a toast and return the toast element
///
/// The message is inserted as text; markup in it is not interpreted.
pub fn notify(page: &mut Page, config: &Rc<Config>, message: &str, severity: Severity) -> InitResult<NodeId> {
    let container = container(page)?;

    let doc = page.document_mut();
    let tree = doc.tree_mut();
    let toast = tree.create_element("div");
    let text = tree.create_text(message);
    let close = tree.create_element("button");
    tree.append_child(toast, text)?;
    tree.append_child(toast, close)?;
    tree.append_child(container, toast)?;

    doc.set_attr(
        toast,
        "class",
        &format!("alert alert-{} alert-dismissible fade show", severity.as_str()),
    );
    doc.set_attr(toast, "role", "alert");
    doc.set_attr(toast, "style", TOAST_STYLE);
    doc.set_attr(close, "type", "button");
    doc.set_attr(close, "class", "btn-close");
    doc.set_attr(close, "data-bs-dismiss", "alert");
    doc.set_attr(close, "aria-label", &config.messages.close_label);

    let fade_ms = config.toast_fade_ms;
    page.add_event_listener(close, EventType::Click, move |page, _| {
        dismiss(page, container, toast, fade_ms);
    });
    page.set_timeout(config.toast_display_ms, move |page| {
        dismiss(page, container, toast, fade_ms);
    });

    tracing::debug!("Toast ({}) shown: {}", severity.as_str(), message);
    Ok(toast)
}

/// Start the fade, then detach once it finishes
fn dismiss(page: &mut Page, container: NodeId, toast: NodeId, fade_ms: u64) {
    page.document_mut().remove_class(toast, "show");
    page.set_timeout(fade_ms, move |page| {
        let doc = page.document_mut();
        if doc.tree().parent(toast) == Some(container) {
            doc.tree_mut().detach(toast);
        }
    });
}

/// Existing container, or a new one appended to `<body>`
fn container(page: &mut Page) -> InitResult<NodeId> {
    let doc = page.document_mut();
    if let Some(existing) = doc.get_element_by_id(CONTAINER_ID) {
        return Ok(existing);
    }
    let body = doc.body();
    let container = doc.tree_mut().create_element("div");
    doc.tree_mut().append_child(body, container)?;
    doc.set_attr(container, "id", CONTAINER_ID);
    doc.set_attr(container, "style", CONTAINER_STYLE);
    Ok(container)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_dom::Document;

    fn setup() -> (Page, Rc<Config>) {
        let page = Page::new(Document::new("https://example.lv/")).unwrap();
        (page, Rc::new(Config::default()))
    }

    #[test]
    fn test_severity_tags() {
        assert_eq!(Severity::from_tag("success"), Severity::Success);
        assert_eq!(Severity::from("DANGER"), Severity::Danger);
        assert_eq!(Severity::from_tag("shiny"), Severity::Info);
        assert_eq!(Severity::default().as_str(), "info");
    }

    #[test]
    fn test_single_container() {
        let (mut page, config) = setup();
        let a = notify(&mut page, &config, "one", Severity::Info).unwrap();
        let b = notify(&mut page, &config, "two", Severity::Warning).unwrap();

        let containers = page.document().query_selector_all("#toast-container").unwrap();
        assert_eq!(containers.len(), 1);
        assert_eq!(page.document().tree().parent(a), page.document().tree().parent(b));
        assert!(page.document().has_class(b, "alert-warning"));
    }

    #[test]
    fn test_message_is_text() {
        let (mut page, config) = setup();
        let toast = notify(&mut page, &config, "<b>hi</b>", Severity::Info).unwrap();

        assert!(page.document().query_selector_in(toast, "b").unwrap().is_none());
        assert!(page.document().tree().text_content(toast).contains("<b>hi</b>"));
    }

    #[test]
    fn test_auto_dismiss_timing() {
        let (mut page, config) = setup();
        let toast = notify(&mut page, &config, "bye", Severity::Success).unwrap();

        page.advance_time(5000);
        assert!(!page.document().has_class(toast, "show"));
        assert!(page.document().tree().is_connected(toast));

        page.advance_time(150);
        assert!(!page.document().tree().is_connected(toast));
    }

    #[test]
    fn test_close_button() {
        let (mut page, config) = setup();
        let toast = notify(&mut page, &config, "bye", Severity::Info).unwrap();
        let close = page.document().query_selector_in(toast, ".btn-close").unwrap().unwrap();

        page.click(close);
        page.advance_time(150);
        assert!(!page.document().tree().is_connected(toast));

        // the auto-dismiss timer still fires later and finds nothing to do
        page.run_all();
        assert!(!page.document().tree().is_connected(toast));
    }
}
