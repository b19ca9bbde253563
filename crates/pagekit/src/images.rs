//! Image normalization
//!
//! Every image gets the responsive class and native lazy loading (except
//! the brand logo and images marked critical). Broken images fall back to
//! a neutral placeholder.

use std::rc::Rc;

use pagekit_runtime::{EventType, Page};

use crate::{Config, InitResult};

pub const RESPONSIVE_CLASS: &str = "img-fluid";

pub fn init(page: &mut Page, config: &Rc<Config>) -> InitResult {
    let images = page.document().query_selector_all("img")?;
    let count = images.len();

    for img in images {
        let doc = page.document_mut();
        doc.add_class(img, RESPONSIVE_CLASS);

        let is_logo = doc.has_class(img, "navbar-brand") || doc.closest(img, ".navbar-brand")?.is_some();
        let is_critical = doc.has_attr(img, "data-critical");
        if !doc.has_attr(img, "loading") && !is_logo && !is_critical {
            doc.set_attr(img, "loading", "lazy");
        }

        let placeholder = config.placeholder_image.clone();
        page.add_event_listener(img, EventType::Error, move |page, _| {
            tracing::debug!("Image {:?} failed to load, using placeholder", img);
            let doc = page.document_mut();
            doc.set_attr(img, "src", &placeholder);
            doc.set_style(img, "object-fit", "contain");
        });
    }

    tracing::debug!("Normalized {} image(s)", count);
    Ok(())
}
