//! Default actions and input simulation on parsed markup

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::{Context, Result};
use pagekit_runtime::{EventTarget, EventType, Page, ReadyState};

const PAGE: &str = r##"<!DOCTYPE html>
<html><body>
  <a id="docs" href="docs.html"><span id="label">Docs</span></a>
  <a id="jump" href="#faq">FAQ</a>
  <form id="signup" action="/signup">
    <input id="email" type="email" value="a@b.lv">
    <input id="agree" type="checkbox" required>
    <button id="send" type="submit">Send</button>
    <button id="off" type="submit" disabled>Off</button>
  </form>
  <section id="faq"></section>
</body></html>"##;

fn load() -> Result<Page> {
    let doc = pagekit_html::parse_with_url(PAGE, "https://example.lv/index.html")?;
    Ok(Page::new(doc)?)
}

fn id(page: &Page, id: &str) -> Result<pagekit_runtime::NodeId> {
    page.document()
        .get_element_by_id(id)
        .with_context(|| format!("missing #{id}"))
}

#[test]
fn test_link_click_navigates_from_descendant() -> Result<()> {
    let mut page = load()?;
    let label = id(&page, "label")?;

    assert!(page.click(label));
    assert_eq!(page.navigations(), ["https://example.lv/docs.html"]);
    Ok(())
}

#[test]
fn test_prevented_link_does_not_navigate() -> Result<()> {
    let mut page = load()?;
    let docs = id(&page, "docs")?;
    page.add_event_listener(docs, EventType::Click, |_, event| event.prevent_default());

    assert!(!page.click(docs));
    assert!(page.navigations().is_empty());
    Ok(())
}

#[test]
fn test_hash_link_is_same_document() -> Result<()> {
    let mut page = load()?;
    let jump = id(&page, "jump")?;

    page.click(jump);
    assert!(page.navigations().is_empty());
    assert_eq!(page.location().hash(), "#faq");
    Ok(())
}

#[test]
fn test_checkbox_toggles_and_fires_change() -> Result<()> {
    let mut page = load()?;
    let agree = id(&page, "agree")?;
    let events = Rc::new(RefCell::new(Vec::new()));
    for kind in [EventType::Input, EventType::Change] {
        let events = events.clone();
        page.add_event_listener(agree, kind, move |_, e| events.borrow_mut().push(e.event_type));
    }

    page.click(agree);
    assert!(page.document().tree().checked(agree));
    assert_eq!(*events.borrow(), vec![EventType::Input, EventType::Change]);

    page.add_event_listener(agree, EventType::Click, |_, e| e.prevent_default());
    page.click(agree);
    assert!(page.document().tree().checked(agree));
    assert_eq!(events.borrow().len(), 2);
    Ok(())
}

#[test]
fn test_submit_button_submits_form() -> Result<()> {
    let mut page = load()?;
    let form = id(&page, "signup")?;
    let send = id(&page, "send")?;
    let submits = Rc::new(RefCell::new(0));
    let s = submits.clone();
    page.add_event_listener(form, EventType::Submit, move |_, _| *s.borrow_mut() += 1);

    page.click(send);
    assert_eq!(*submits.borrow(), 1);
    assert_eq!(page.navigations(), ["https://example.lv/signup"]);

    let off = id(&page, "off")?;
    assert!(!page.click(off));
    assert_eq!(*submits.borrow(), 1);
    Ok(())
}

#[test]
fn test_typing_and_keys() -> Result<()> {
    let mut page = load()?;
    let email = id(&page, "email")?;
    let keys = Rc::new(RefCell::new(Vec::new()));
    let k = keys.clone();
    page.add_event_listener(EventTarget::Document, EventType::KeyDown, move |_, e| {
        k.borrow_mut().push(e.key.clone().unwrap_or_default());
    });

    page.type_text(email, "new@b.lv");
    page.press_key("Escape");
    assert_eq!(page.document().tree().value(email), "new@b.lv");
    assert_eq!(page.focused(), Some(email));
    assert_eq!(*keys.borrow(), vec!["Escape".to_string()]);

    page.blur(email);
    assert_eq!(page.focused(), None);
    Ok(())
}

#[test]
fn test_dom_content_loaded_once() -> Result<()> {
    let mut page = load()?;
    let count = Rc::new(RefCell::new(0));
    let c = count.clone();
    page.add_event_listener(EventTarget::Window, EventType::DomContentLoaded, move |_, _| {
        *c.borrow_mut() += 1;
    });

    assert_eq!(page.ready_state(), ReadyState::Loading);
    page.finish_loading();
    page.complete_loading();
    assert_eq!(*count.borrow(), 1);
    assert_eq!(page.ready_state(), ReadyState::Complete);
    Ok(())
}
