//! Class list
//!
//! Ordered, duplicate-free view over a space-separated `class` attribute.

use std::fmt;

/// Token list for the `class` attribute
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from an attribute value, dropping duplicates
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for token in value.split_ascii_whitespace() {
            list.add(token);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token; false if empty or already present
    pub fn add(&mut self, token: &str) -> bool {
        if token.is_empty() || self.contains(token) {
            return false;
        }
        self.tokens.push(token.to_string());
        true
    }

    /// Remove a token; false if it was absent
    pub fn remove(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        self.tokens.len() != before
    }

    /// Toggle a token, returns whether it is present afterwards
    pub fn toggle(&mut self, token: &str, force: Option<bool>) -> bool {
        let present = force.unwrap_or(!self.contains(token));
        if present {
            self.add(token);
        } else {
            self.remove(token);
        }
        present
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
