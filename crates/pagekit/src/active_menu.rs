//! Active menu item by path
//!
//! Marks the nav link pointing at the current page. Every link is cleared
//! first; hash links are then left for scroll-spy to mark on scroll.

use std::rc::Rc;

use pagekit_runtime::Page;

use crate::{Config, InitResult, routes};

pub fn init(page: &mut Page, _config: &Rc<Config>) -> InitResult {
    let pathname = page.location().pathname().to_string();
    let home = routes::is_home_route(&pathname);
    let current = routes::normalize_current_path(&pathname);

    let doc = page.document_mut();
    let links = doc.query_selector_all(".nav-link")?;
    let mut marked = 0;

    for link in links {
        doc.remove_class(link, "active");
        doc.remove_attr(link, "aria-current");

        let href = doc.attr(link, "href").unwrap_or_default().to_string();
        if href.is_empty() || href.starts_with('#') {
            continue;
        }

        let matches = routes::normalize_link_path(&href) == current
            || (home && routes::is_home_alias(&href));
        if matches {
            doc.add_class(link, "active");
            doc.set_attr(link, "aria-current", "page");
            marked += 1;
        }
    }

    tracing::debug!("Active menu marked {} link(s) for {}", marked, pathname);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pagekit_dom::{Document, NodeId};

    fn page_with_links(url: &str, hrefs: &[&str]) -> (Page, Vec<NodeId>) {
        let mut doc = Document::new(url);
        let body = doc.body();
        let mut links = Vec::new();
        for href in hrefs {
            let link = doc.tree_mut().create_element("a");
            doc.tree_mut().append_child(body, link).unwrap();
            doc.set_attr(link, "class", "nav-link");
            doc.set_attr(link, "href", href);
            links.push(link);
        }
        (Page::new(doc).unwrap(), links)
    }

    #[test]
    fn test_clears_stale_hash_link_marks() {
        let (mut page, links) = page_with_links("https://example.lv/", &["index.html", "#about"]);
        let about = links[1];
        page.document_mut().add_class(about, "active");
        page.document_mut().set_attr(about, "aria-current", "page");

        init(&mut page, &Rc::new(Config::default())).unwrap();

        let doc = page.document();
        assert!(doc.has_class(links[0], "active"));
        assert!(!doc.has_class(about, "active"));
        assert_eq!(doc.attr(about, "aria-current"), None);
    }

    #[test]
    fn test_marks_matching_subpage() {
        let (mut page, links) =
            page_with_links("https://example.lv/blog.html", &["/", "./blog.html", "#team"]);

        init(&mut page, &Rc::new(Config::default())).unwrap();

        let doc = page.document();
        assert!(!doc.has_class(links[0], "active"));
        assert_eq!(doc.attr(links[1], "aria-current"), Some("page"));
        assert!(!doc.has_class(links[2], "active"));
    }
}
