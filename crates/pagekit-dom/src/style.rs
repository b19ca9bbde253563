//! Inline style declarations
//!
//! Parses and serializes the `style` attribute as ordered
//! `property: value` pairs.

/// Parsed `style` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyle {
    decls: Vec<(String, String)>,
}

impl InlineStyle {
    /// Parse CSS declaration text, later duplicates win
    pub fn parse(css: &str) -> Self {
        let mut style = Self::default();
        for raw in css.split(';') {
            let Some((property, value)) = raw.split_once(':') else {
                continue;
            };
            let property = property.trim();
            let value = value.trim();
            if property.is_empty() || value.is_empty() {
                continue;
            }
            style.set(property, value);
        }
        style
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(p, _)| p.eq_ignore_ascii_case(property))
            .map(|(_, v)| v.as_str())
    }

    /// Set a property; an empty value removes it
    pub fn set(&mut self, property: &str, value: &str) {
        let value = value.trim();
        if value.is_empty() {
            self.remove(property);
            return;
        }
        match self.decls.iter_mut().find(|(p, _)| p.eq_ignore_ascii_case(property)) {
            Some(decl) => decl.1 = value.to_string(),
            None => self
                .decls
                .push((property.trim().to_ascii_lowercase(), value.to_string())),
        }
    }

    pub fn remove(&mut self, property: &str) {
        self.decls.retain(|(p, _)| !p.eq_ignore_ascii_case(property));
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Serialize as `a: b; c: d;`
    pub fn to_css_text(&self) -> String {
        self.decls
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
