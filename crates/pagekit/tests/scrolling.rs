//! Scroll-spy and the scroll-to-top button

mod common;

use anyhow::{Context, Result};
use common::{HOME, el, is_active, load};
use pagekit_runtime::ScrollBehavior;

const SECTION_LINKS: [&str; 3] = ["link-about", "link-services", "link-contact"];

fn active_section_links(page: &pagekit::Page) -> Result<Vec<&'static str>> {
    let mut active = Vec::new();
    for id in SECTION_LINKS {
        if is_active(page, id)? {
            active.push(id);
        }
    }
    Ok(active)
}

#[test]
fn test_hash_links_start_unmarked() -> Result<()> {
    let (page, _) = load(HOME)?;
    // the menu pass after scroll-spy clears every nav link
    assert!(active_section_links(&page)?.is_empty());
    assert!(is_active(&page, "link-home")?);
    Ok(())
}

#[test]
fn test_first_scroll_marks_current_section() -> Result<()> {
    let (mut page, _) = load(HOME)?;

    page.scroll_to(10.0, ScrollBehavior::Auto);
    assert_eq!(active_section_links(&page)?, ["link-about"]);
    Ok(())
}

#[test]
fn test_scrolling_into_second_section() -> Result<()> {
    let (mut page, _) = load(HOME)?;

    // 650 + 100 lookahead lands inside services (700..1500)
    page.scroll_to(650.0, ScrollBehavior::Auto);
    assert_eq!(active_section_links(&page)?, ["link-services"]);

    let services = el(&page, "link-services")?;
    let about = el(&page, "link-about")?;
    assert!(page.document().attr(about, "aria-current").is_none());
    assert!(page.document().has_class(services, "active"));
    Ok(())
}

#[test]
fn test_section_boundaries_are_half_open() -> Result<()> {
    let (mut page, _) = load(HOME)?;

    page.scroll_to(1400.0, ScrollBehavior::Auto);
    assert_eq!(active_section_links(&page)?, ["link-contact"]);
    Ok(())
}

#[test]
fn test_scroll_updates_are_throttled() -> Result<()> {
    let (mut page, _) = load(HOME)?;

    page.scroll_to(900.0, ScrollBehavior::Auto);
    page.advance_time(50);
    page.scroll_to(1600.0, ScrollBehavior::Auto);
    assert_eq!(active_section_links(&page)?, ["link-services"]);

    page.advance_time(50);
    page.scroll_to(1700.0, ScrollBehavior::Auto);
    assert_eq!(active_section_links(&page)?, ["link-contact"]);
    Ok(())
}

#[test]
fn test_gap_between_sections_keeps_marks() -> Result<()> {
    let (mut page, _) = load(HOME)?;

    page.scroll_to(900.0, ScrollBehavior::Auto);
    page.advance_time(100);
    page.scroll_to(5000.0, ScrollBehavior::Auto);
    assert_eq!(active_section_links(&page)?, ["link-services"]);
    Ok(())
}

fn scroll_button(page: &pagekit::Page) -> Result<pagekit_dom::NodeId> {
    page.document()
        .query_selector(".scroll-to-top")?
        .context("scroll-to-top button missing")
}

fn button_visible(page: &pagekit::Page) -> Result<bool> {
    let button = scroll_button(page)?;
    let doc = page.document();
    let opacity = doc.style(button, "opacity");
    let visibility = doc.style(button, "visibility");
    match (opacity.as_deref(), visibility.as_deref()) {
        (Some("1"), Some("visible")) => Ok(true),
        (Some("0"), Some("hidden")) => Ok(false),
        other => anyhow::bail!("inconsistent button style: {other:?}"),
    }
}

#[test]
fn test_scroll_to_top_button_created_hidden() -> Result<()> {
    let (page, _) = load(HOME)?;
    let button = scroll_button(&page)?;
    let doc = page.document();

    assert_eq!(doc.tree().parent(button), Some(doc.body()));
    assert_eq!(doc.attr(button, "aria-label"), Some("Atpakaļ uz augšu"));
    assert_eq!(doc.tree().text_content(button), "↑");
    assert!(!button_visible(&page)?);
    Ok(())
}

#[test]
fn test_scroll_to_top_visibility_and_click() -> Result<()> {
    let (mut page, _) = load(HOME)?;

    page.scroll_to(300.0, ScrollBehavior::Auto);
    assert!(!button_visible(&page)?);

    page.advance_time(100);
    page.scroll_to(301.0, ScrollBehavior::Auto);
    assert!(button_visible(&page)?);

    page.advance_time(100);
    let button = scroll_button(&page)?;
    page.click(button);
    assert_eq!(page.scroll_y(), 0.0);
    assert_eq!(page.window().last_scroll_behavior(), Some(ScrollBehavior::Smooth));
    assert!(!button_visible(&page)?);
    Ok(())
}
