//! History
//!
//! Session history for pushState, back, forward and go.

/// History entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    pub state: Option<String>,
}

/// Session history manager
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
    current: usize,
}

impl History {
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![HistoryEntry {
                url: initial_url.to_string(),
                state: None,
            }],
            current: 0,
        }
    }

    /// Push a new history entry
    pub fn push_state(&mut self, state: Option<String>, url: String) {
        // Remove forward history
        self.entries.truncate(self.current + 1);

        self.entries.push(HistoryEntry { url, state });
        self.current = self.entries.len() - 1;
    }

    /// Replace current entry
    pub fn replace_state(&mut self, state: Option<String>, url: String) {
        if let Some(entry) = self.entries.get_mut(self.current) {
            entry.url = url;
            entry.state = state;
        }
    }

    /// Go back
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        self.go(-1)
    }

    /// Go forward
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        self.go(1)
    }

    /// Go to a relative offset; out-of-range deltas leave the index alone
    pub fn go(&mut self, delta: isize) -> Option<&HistoryEntry> {
        let index = self.current.checked_add_signed(delta)?;
        if index >= self.entries.len() {
            return None;
        }
        self.current = index;
        self.entries.get(index)
    }

    /// Get current entry
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.current]
    }

    /// Get history length
    pub fn length(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_push() {
        let mut history = History::new("https://example.com/");

        history.push_state(None, "https://example.com/#about".into());
        assert_eq!(history.length(), 2);
        assert_eq!(history.current().url, "https://example.com/#about");
    }

    #[test]
    fn test_history_navigation() {
        let mut history = History::new("https://example.com/");
        history.push_state(None, "/page1".into());
        history.push_state(None, "/page2".into());

        history.back();
        assert_eq!(history.current().url, "/page1");

        history.back();
        assert_eq!(history.current().url, "https://example.com/");
        assert!(history.back().is_none());

        history.forward();
        assert_eq!(history.current().url, "/page1");
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = History::new("/");
        history.push_state(None, "/a".into());
        history.push_state(None, "/b".into());
        history.go(-2);
        history.push_state(Some("{}".into()), "/c".into());

        assert_eq!(history.length(), 2);
        assert_eq!(history.current().state.as_deref(), Some("{}"));
        assert!(history.go(5).is_none());
        assert_eq!(history.current().url, "/c");
    }

    #[test]
    fn test_history_replace() {
        let mut history = History::new("https://example.com/");
        history.replace_state(None, "https://example.com/new".into());

        assert_eq!(history.length(), 1);
        assert_eq!(history.current().url, "https://example.com/new");
    }
}
