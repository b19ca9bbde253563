//! DOM Node
//!
//! Nodes link to each other through `NodeId`s rather than pointers so the
//! whole tree lives in one arena.

use crate::forms::ControlState;
use crate::geometry::ElementGeometry;
use crate::{ClassList, InlineStyle, NodeId};

/// DOM Node - Core structure
#[derive(Debug, Clone)]
pub struct Node {
    /// Parent node (NONE if detached or root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    pub(crate) fn with_data(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug, Clone)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: String },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// Element-specific data
#[derive(Debug, Clone)]
pub struct ElementData {
    /// Lower-cased tag name
    tag: String,
    /// Attributes in source order
    attrs: Vec<Attribute>,
    /// Host-supplied box geometry
    pub geometry: ElementGeometry,
    /// Form control state (dirty value / checkedness)
    pub(crate) control: ControlState,
}

impl ElementData {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attrs: Vec::new(),
            geometry: ElementGeometry::default(),
            control: ControlState::default(),
        }
    }

    /// Lower-cased tag name
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// All attributes in source order
    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    /// Get an attribute value
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
            .map(|a| a.value.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.get_attr(name).is_some()
    }

    /// Set an attribute, replacing an existing value
    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        if let Some(attr) = self.attrs.iter_mut().find(|a| a.name.eq_ignore_ascii_case(name)) {
            attr.value = value;
            return;
        }
        self.attrs.push(Attribute {
            name: name.to_ascii_lowercase(),
            value,
        });
    }

    /// Remove an attribute, returning its old value
    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|a| a.name.eq_ignore_ascii_case(name))?;
        Some(self.attrs.remove(pos).value)
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attr("id")
    }

    /// Snapshot of the class list
    pub fn class_list(&self) -> ClassList {
        ClassList::parse(self.get_attr("class").unwrap_or(""))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    }

    /// Add a class; returns false if it was already present
    pub fn add_class(&mut self, class: &str) -> bool {
        self.update_classes(|list| list.add(class))
    }

    /// Remove a class; returns false if it was not present
    pub fn remove_class(&mut self, class: &str) -> bool {
        self.update_classes(|list| list.remove(class))
    }

    /// Toggle a class, returns the new state
    pub fn toggle_class(&mut self, class: &str, force: Option<bool>) -> bool {
        let mut state = false;
        self.update_classes(|list| {
            let before = list.contains(class);
            state = list.toggle(class, force);
            before != state
        });
        state
    }

    fn update_classes(&mut self, f: impl FnOnce(&mut ClassList) -> bool) -> bool {
        let mut list = self.class_list();
        let changed = f(&mut list);
        if changed {
            self.set_attr("class", list.to_string());
        }
        changed
    }

    /// Snapshot of the inline style declarations
    pub fn style(&self) -> InlineStyle {
        InlineStyle::parse(self.get_attr("style").unwrap_or(""))
    }

    /// Read one inline style property
    pub fn style_property(&self, property: &str) -> Option<String> {
        self.style().get(property).map(str::to_string)
    }

    /// Set one inline style property
    pub fn set_style_property(&mut self, property: &str, value: &str) {
        let mut style = self.style();
        style.set(property, value);
        self.set_attr("style", style.to_css_text());
    }

    /// Replace the whole inline style (like `style.cssText = ...`)
    pub fn set_css_text(&mut self, css: &str) {
        let style = InlineStyle::parse(css);
        self.set_attr("style", style.to_css_text());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attributes_are_case_insensitive() {
        let mut el = ElementData::new("A");
        el.set_attr("HREF", "#about");

        assert_eq!(el.tag(), "a");
        assert_eq!(el.get_attr("href"), Some("#about"));

        el.set_attr("href", "#team");
        assert_eq!(el.attrs().len(), 1);
        assert_eq!(el.remove_attr("Href"), Some("#team".to_string()));
        assert!(!el.has_attr("href"));
    }

    #[test]
    fn test_class_helpers_write_back_attribute() {
        let mut el = ElementData::new("div");
        el.set_attr("class", "alert  fade show");

        assert!(el.has_class("fade"));
        assert!(el.remove_class("show"));
        assert!(!el.remove_class("show"));
        assert_eq!(el.get_attr("class"), Some("alert fade"));

        assert!(el.toggle_class("collapsed", None));
        assert!(el.has_class("collapsed"));
        assert!(!el.toggle_class("collapsed", Some(false)));
    }

    #[test]
    fn test_style_property_roundtrip() {
        let mut el = ElementData::new("button");
        el.set_css_text("opacity:0;visibility:hidden");
        el.set_style_property("opacity", "1");

        assert_eq!(el.style_property("opacity").as_deref(), Some("1"));
        assert_eq!(el.get_attr("style"), Some("opacity: 1; visibility: hidden;"));
    }
}
