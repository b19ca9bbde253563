//! Document - High-level document API

use crate::{DomResult, DomTree, ElementData, ElementGeometry, NodeId, Selector};

/// HTML Document
#[derive(Debug, Clone)]
pub struct Document {
    /// The DOM tree
    tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with an empty html/head/body skeleton
    pub fn new(url: &str) -> Self {
        let mut doc = Self::empty(url);
        doc.finalize();
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate `<html>`, `<head>` and `<body>`, creating any that are missing
    pub fn finalize(&mut self) {
        let root = self.tree.root();
        let html = match self.find_child_element(root, "html") {
            Some(html) => html,
            None => self.create_attached(root, "html"),
        };
        let head = match self.find_child_element(html, "head") {
            Some(head) => head,
            None => self.create_attached(html, "head"),
        };
        let body = match self.find_child_element(html, "body") {
            Some(body) => body,
            None => self.create_attached(html, "body"),
        };
        self.html_element = html;
        self.head_element = head;
        self.body_element = body;
        tracing::trace!("Document finalized with {} nodes", self.tree.len());
    }

    fn find_child_element(&self, parent: NodeId, tag: &str) -> Option<NodeId> {
        self.tree
            .element_children(parent)
            .find(|&c| self.tree.tag_name(c) == Some(tag))
    }

    fn create_attached(&mut self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.tree.create_element(tag);
        // Parent is the root or a freshly found element, so this cannot fail.
        let _ = self.tree.append_child(parent, id);
        id
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn set_url(&mut self, url: &str) {
        self.url = url.to_string();
    }

    /// Text of the first `<title>` in `<head>`
    pub fn title(&self) -> String {
        self.tree
            .element_children(self.head_element)
            .find(|&c| self.tree.tag_name(c) == Some("title"))
            .map(|t| self.tree.text_content(t).trim().to_string())
            .unwrap_or_default()
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }

    /// First connected element with the given id
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        if id.is_empty() {
            return None;
        }
        self.tree
            .descendants(self.tree.root())
            .into_iter()
            .find(|&n| self.tree.element(n).and_then(ElementData::id) == Some(id))
    }

    /// First element in the document matching `selector`
    pub fn query_selector(&self, selector: &str) -> DomResult<Option<NodeId>> {
        self.query_selector_in(self.tree.root(), selector)
    }

    /// All elements in the document matching `selector`, in document order
    pub fn query_selector_all(&self, selector: &str) -> DomResult<Vec<NodeId>> {
        self.query_selector_all_in(self.tree.root(), selector)
    }

    /// First descendant of `scope` matching `selector`
    pub fn query_selector_in(&self, scope: NodeId, selector: &str) -> DomResult<Option<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .tree
            .descendants(scope)
            .into_iter()
            .find(|&n| selector.matches(&self.tree, n)))
    }

    /// All descendants of `scope` matching `selector`
    pub fn query_selector_all_in(&self, scope: NodeId, selector: &str) -> DomResult<Vec<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(self
            .tree
            .descendants(scope)
            .into_iter()
            .filter(|&n| selector.matches(&self.tree, n))
            .collect())
    }

    /// Check if an element matches `selector`
    pub fn matches(&self, node: NodeId, selector: &str) -> DomResult<bool> {
        Ok(Selector::parse(selector)?.matches(&self.tree, node))
    }

    /// Closest inclusive ancestor matching `selector`
    pub fn closest(&self, node: NodeId, selector: &str) -> DomResult<Option<NodeId>> {
        let selector = Selector::parse(selector)?;
        Ok(std::iter::once(node)
            .chain(self.tree.ancestors(node))
            .find(|&n| selector.matches(&self.tree, n)))
    }

    /// Inclusive containment (`ancestor.contains(node)`)
    pub fn contains(&self, ancestor: NodeId, node: NodeId) -> bool {
        self.tree.contains(ancestor, node)
    }

    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        self.tree.element(id)
    }

    pub fn element_mut(&mut self, id: NodeId) -> Option<&mut ElementData> {
        self.tree.element_mut(id)
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        self.element(id)?.get_attr(name)
    }

    pub fn has_attr(&self, id: NodeId, name: &str) -> bool {
        self.attr(id, name).is_some()
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_attr(name, value);
        }
    }

    pub fn remove_attr(&mut self, id: NodeId, name: &str) {
        if let Some(el) = self.element_mut(id) {
            el.remove_attr(name);
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.element(id).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.add_class(class);
        }
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) {
        if let Some(el) = self.element_mut(id) {
            el.remove_class(class);
        }
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<String> {
        self.element(id)?.style_property(property)
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.set_style_property(property, value);
        }
    }

    /// Element geometry (zeroed for non-elements)
    pub fn geometry(&self, id: NodeId) -> ElementGeometry {
        self.element(id).map(|el| el.geometry).unwrap_or_default()
    }

    pub fn set_geometry(&mut self, id: NodeId, geometry: ElementGeometry) {
        if let Some(el) = self.element_mut(id) {
            el.geometry = geometry;
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        let mut doc = Document::new("https://example.com/");
        let body = doc.body();
        let tree = doc.tree_mut();
        for (tag, id, class) in [("section", "hero", "band"), ("section", "about", "band dark")] {
            let el = tree.create_element(tag);
            let data = tree.element_mut(el).unwrap();
            data.set_attr("id", id);
            data.set_attr("class", class);
            tree.append_child(body, el).unwrap();
        }
        doc
    }

    #[test]
    fn test_skeleton() {
        let doc = Document::default();
        assert_eq!(doc.tree().tag_name(doc.document_element()), Some("html"));
        assert_eq!(doc.tree().tag_name(doc.head()), Some("head"));
        assert_eq!(doc.tree().tag_name(doc.body()), Some("body"));
        assert_eq!(doc.title(), "");
    }

    #[test]
    fn test_lookup_by_id_and_selector() {
        let doc = sample();
        let about = doc.get_element_by_id("about").unwrap();

        assert_eq!(doc.query_selector(".dark").unwrap(), Some(about));
        assert_eq!(doc.query_selector_all("section[id]").unwrap().len(), 2);
        assert_eq!(doc.closest(about, "body").unwrap(), Some(doc.body()));
        assert!(doc.matches(about, "section.band").unwrap());
        assert!(doc.get_element_by_id("").is_none());
    }

    #[test]
    fn test_detached_nodes_are_not_found_by_id() {
        let mut doc = sample();
        let about = doc.get_element_by_id("about").unwrap();
        doc.tree_mut().detach(about);
        assert!(doc.get_element_by_id("about").is_none());
    }

    #[test]
    fn test_invalid_selector_is_reported() {
        let doc = sample();
        assert!(doc.query_selector("section:first-child").is_err());
    }
}
