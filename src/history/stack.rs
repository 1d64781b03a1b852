//! Back/forward entry stack shared by every history strategy.

/// Locations starting with this prefix would leave the application origin.
const PROTOCOL_RELATIVE: &str = "//";

#[derive(Debug, Clone)]
pub(crate) struct EntryStack {
    current: String,
    past: Vec<String>,
    future: Vec<String>,
}

impl EntryStack {
    pub(crate) fn new(initial: &str) -> Self {
        let current = if initial.starts_with(PROTOCOL_RELATIVE) {
            tracing::error!(location = %initial, "Rejected initial location, starting at /");
            "/".to_string()
        } else {
            normalize_location(initial)
        };
        Self {
            current,
            past: Vec::new(),
            future: Vec::new(),
        }
    }

    pub(crate) fn current(&self) -> &str {
        &self.current
    }

    pub(crate) fn can_go_back(&self) -> bool {
        !self.past.is_empty()
    }

    pub(crate) fn can_go_forward(&self) -> bool {
        !self.future.is_empty()
    }

    pub(crate) fn go_back(&mut self) -> bool {
        match self.past.pop() {
            Some(last) => {
                let old = std::mem::replace(&mut self.current, last);
                self.future.push(old);
                true
            }
            None => false,
        }
    }

    pub(crate) fn go_forward(&mut self) -> bool {
        match self.future.pop() {
            Some(next) => {
                let old = std::mem::replace(&mut self.current, next);
                self.past.push(old);
                true
            }
            None => false,
        }
    }

    pub(crate) fn push(&mut self, location: &str) -> bool {
        let Some(location) = accept(location) else {
            return false;
        };
        // don't push the same location twice
        if self.current == location {
            return false;
        }
        let old = std::mem::replace(&mut self.current, location);
        self.past.push(old);
        self.future.clear();
        true
    }

    pub(crate) fn replace(&mut self, location: &str) -> bool {
        let Some(location) = accept(location) else {
            return false;
        };
        if self.current == location {
            return false;
        }
        self.current = location;
        true
    }
}

fn accept(location: &str) -> Option<String> {
    if location.starts_with(PROTOCOL_RELATIVE) {
        tracing::error!(location = %location, r#"cannot navigate to locations starting with "//""#);
        return None;
    }
    Some(normalize_location(location))
}

/// Ensure an in-app location starts with `/`.
pub(crate) fn normalize_location(location: &str) -> String {
    if location.is_empty() {
        "/".to_string()
    } else if location.starts_with('/') {
        location.to_string()
    } else {
        format!("/{location}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_back_forward() {
        let mut stack = EntryStack::new("/");
        assert!(!stack.can_go_back());

        assert!(stack.push("/a"));
        assert!(stack.push("/b"));
        assert_eq!(stack.current(), "/b");

        assert!(stack.go_back());
        assert_eq!(stack.current(), "/a");
        assert!(stack.can_go_forward());

        assert!(stack.go_forward());
        assert_eq!(stack.current(), "/b");
        assert!(!stack.go_forward());
    }

    #[test]
    fn test_push_clears_future() {
        let mut stack = EntryStack::new("/");
        stack.push("/a");
        stack.go_back();
        stack.push("/c");
        assert!(!stack.can_go_forward());
        assert!(stack.go_back());
        assert_eq!(stack.current(), "/");
    }

    #[test]
    fn test_same_location_not_pushed() {
        let mut stack = EntryStack::new("/a");
        assert!(!stack.push("/a"));
        assert!(!stack.can_go_back());
    }

    #[test]
    fn test_replace_keeps_stacks() {
        let mut stack = EntryStack::new("/");
        stack.push("/a");
        assert!(stack.replace("/b"));
        assert_eq!(stack.current(), "/b");
        stack.go_back();
        assert_eq!(stack.current(), "/");
    }

    #[test]
    fn test_rejects_protocol_relative() {
        let mut stack = EntryStack::new("//evil.example");
        assert_eq!(stack.current(), "/");
        assert!(!stack.push("//evil.example/x"));
        assert!(!stack.replace("//evil.example/x"));
        assert_eq!(stack.current(), "/");
    }

    #[test]
    fn test_normalize_location() {
        assert_eq!(normalize_location(""), "/");
        assert_eq!(normalize_location("about"), "/about");
        assert_eq!(normalize_location("/about?x=1"), "/about?x=1");
    }
}
