//! Form control state
//!
//! Controls keep a "dirty" value and checkedness once the user has edited
//! them; until then their defaults come from the markup.

use crate::{DomTree, NodeId};

/// User-edited state of a form control
#[derive(Debug, Clone, Default)]
pub(crate) struct ControlState {
    pub value: Option<String>,
    pub checked: Option<bool>,
}

impl DomTree {
    /// Whether the element is an `input`, `select` or `textarea`
    pub fn is_form_control(&self, id: NodeId) -> bool {
        matches!(self.tag_name(id), Some("input" | "select" | "textarea"))
    }

    /// Effective control type: the lower-cased `type` of an input
    /// (`text` when absent), or the tag name for other controls
    pub fn control_type(&self, id: NodeId) -> String {
        match self.element(id) {
            Some(el) if el.tag() == "input" => el
                .get_attr("type")
                .map(|t| t.trim().to_ascii_lowercase())
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "text".to_string()),
            Some(el) if el.tag() == "button" => el
                .get_attr("type")
                .map(|t| t.trim().to_ascii_lowercase())
                .unwrap_or_else(|| "submit".to_string()),
            Some(el) => el.tag().to_string(),
            None => String::new(),
        }
    }

    /// Checkbox or radio input
    pub fn is_checkable(&self, id: NodeId) -> bool {
        self.tag_name(id) == Some("input")
            && matches!(self.control_type(id).as_str(), "checkbox" | "radio")
    }

    /// Current value of a control
    pub fn value(&self, id: NodeId) -> String {
        let Some(el) = self.element(id) else {
            return String::new();
        };
        if let Some(value) = &el.control.value {
            return value.clone();
        }
        match el.tag() {
            "textarea" => self.text_content(id),
            "select" => self.select_value(id),
            "option" => el
                .get_attr("value")
                .map(str::to_string)
                .unwrap_or_else(|| self.text_content(id).trim().to_string()),
            _ if self.is_checkable(id) => el.get_attr("value").unwrap_or("on").to_string(),
            _ => el.get_attr("value").unwrap_or("").to_string(),
        }
    }

    /// Set the value as if the user edited it
    pub fn set_value(&mut self, id: NodeId, value: &str) {
        if let Some(el) = self.element_mut(id) {
            el.control.value = Some(value.to_string());
        }
    }

    /// Current checkedness
    pub fn checked(&self, id: NodeId) -> bool {
        self.element(id)
            .map(|el| el.control.checked.unwrap_or_else(|| el.has_attr("checked")))
            .unwrap_or(false)
    }

    pub fn set_checked(&mut self, id: NodeId, checked: bool) {
        if let Some(el) = self.element_mut(id) {
            el.control.checked = Some(checked);
        }
    }

    /// Drop user edits so the control shows its markup defaults again
    pub fn reset_control(&mut self, id: NodeId) {
        if let Some(el) = self.element_mut(id) {
            el.control = ControlState::default();
        }
    }

    fn select_value(&self, id: NodeId) -> String {
        let options: Vec<NodeId> = self
            .descendants(id)
            .into_iter()
            .filter(|&n| self.tag_name(n) == Some("option"))
            .collect();
        let chosen = options
            .iter()
            .copied()
            .find(|&o| self.element(o).is_some_and(|el| el.has_attr("selected")))
            .or_else(|| options.first().copied());
        chosen.map(|o| self.value(o)).unwrap_or_default()
    }
}
