//! Shared fixture: the site's home page with a hand-made layout
#![allow(dead_code)]

use anyhow::{Context, Result};
use pagekit::{App, Config, Page};
use pagekit_dom::{ElementGeometry, NodeId};

pub const SITE: &str = include_str!("../fixtures/site.html");
pub const HOME: &str = "https://example.lv/";
pub const BLOG: &str = "https://example.lv/blog.html";

pub const NAVBAR_HEIGHT: f64 = 70.0;

/// Parse the fixture at `url`, lay it out and run the app on DOM ready
pub fn load(url: &str) -> Result<(Page, App)> {
    load_with(url, Config::default())
}

pub fn load_with(url: &str, config: Config) -> Result<(Page, App)> {
    let doc = pagekit_html::parse_with_url(SITE, url)?;
    let mut page = Page::new(doc)?.with_viewport(375.0, 700.0);
    layout(&mut page)?;

    let app = App::new(config);
    app.attach(&mut page);
    page.finish_loading();
    Ok((page, app))
}

/// navbar 0..70, about 100..700, services 700..1500, contact 1500..2300
fn layout(page: &mut Page) -> Result<()> {
    for (id, top, height) in [
        ("navbar", 0.0, NAVBAR_HEIGHT),
        ("about", 100.0, 600.0),
        ("services", 700.0, 800.0),
        ("contact", 1500.0, 800.0),
    ] {
        let node = el(page, id)?;
        page.document_mut()
            .set_geometry(node, ElementGeometry::band(top, height));
    }
    Ok(())
}

pub fn el(page: &Page, id: &str) -> Result<NodeId> {
    page.document()
        .get_element_by_id(id)
        .with_context(|| format!("fixture has no #{id}"))
}

pub fn is_active(page: &Page, id: &str) -> Result<bool> {
    let link = el(page, id)?;
    let doc = page.document();
    Ok(doc.has_class(link, "active") && doc.attr(link, "aria-current") == Some("page"))
}
