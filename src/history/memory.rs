use super::stack::EntryStack;
use super::{decode, parse_url, HistoryAdapter, HistoryMode};

/// A [`HistoryAdapter`] that stores all navigation information in memory.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    stack: EntryStack,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::with_initial_path("/")
    }
}

impl MemoryHistory {
    /// Create a [`MemoryHistory`] starting at `path`.
    ///
    /// ```rust
    /// # use view_router::history::{HistoryAdapter, MemoryHistory};
    /// let history = MemoryHistory::with_initial_path("/about");
    /// assert_eq!(history.location(), "/about");
    /// assert_eq!(history.can_go_back(), false);
    /// ```
    pub fn with_initial_path(path: &str) -> Self {
        Self {
            stack: EntryStack::new(path),
        }
    }
}

impl HistoryAdapter for MemoryHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Memory
    }

    fn base(&self) -> &str {
        ""
    }

    fn location(&self) -> &str {
        self.stack.current()
    }

    fn can_go_back(&self) -> bool {
        self.stack.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.stack.can_go_forward()
    }

    fn go_back(&mut self) -> bool {
        self.stack.go_back()
    }

    fn go_forward(&mut self) -> bool {
        self.stack.go_forward()
    }

    fn push(&mut self, location: &str) -> bool {
        self.stack.push(location)
    }

    fn replace(&mut self, location: &str) -> bool {
        self.stack.replace(location)
    }

    fn href(&self, location: &str) -> String {
        location.to_string()
    }

    fn parse_external(&self, url: &str) -> Option<String> {
        let url = parse_url(url)?;
        let mut location = decode(url.path());
        if let Some(query) = url.query() {
            location.push('?');
            location.push_str(query);
        }
        if let Some(fragment) = url.fragment() {
            location.push('#');
            location.push_str(&decode(fragment));
        }
        Some(location)
    }
}
