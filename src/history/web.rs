use super::stack::EntryStack;
use super::{decode, normalize_base, parse_url, HistoryAdapter, HistoryMode};

/// A [`HistoryAdapter`] addressing entries with plain path URLs under a base,
/// the way the HTML5 history API does.
#[derive(Debug, Clone)]
pub struct WebHistory {
    base: String,
    stack: EntryStack,
}

impl WebHistory {
    pub fn new(base: &str, initial: &str) -> Self {
        Self {
            base: normalize_base(base),
            stack: EntryStack::new(initial),
        }
    }
}

impl Default for WebHistory {
    fn default() -> Self {
        Self::new("/", "/")
    }
}

impl HistoryAdapter for WebHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Web
    }

    fn base(&self) -> &str {
        &self.base
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
        format!("{}{}", self.base, location)
    }

    fn parse_external(&self, url: &str) -> Option<String> {
        let url = parse_url(url)?;
        let path = decode(url.path());
        let path = path.as_str();

        let rest = if self.base.is_empty() {
            path
        } else if path == self.base {
            "/"
        } else {
            path.strip_prefix(self.base.as_str())
                .filter(|rest| rest.starts_with('/'))?
        };

        let mut location = rest.to_string();
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_with_base() {
        let history = WebHistory::new("/app/", "/");
        assert_eq!(history.base(), "/app");
        assert_eq!(history.href("/"), "/app/");
        assert_eq!(history.href("/about?x=1"), "/app/about?x=1");

        let root = WebHistory::default();
        assert_eq!(root.href("/about"), "/about");
    }

    #[test]
    fn test_parse_external() {
        let history = WebHistory::new("/app", "/");
        assert_eq!(
            history.parse_external("https://example.com/app/about?x=1#top"),
            Some("/about?x=1#top".to_string())
        );
        assert_eq!(history.parse_external("/app"), Some("/".to_string()));
        assert_eq!(history.parse_external("/application"), None);
        assert_eq!(history.parse_external("/other"), None);

        let root = WebHistory::default();
        assert_eq!(root.parse_external("/"), Some("/".to_string()));
    }

    #[test]
    fn test_href_round_trip() {
        let mut history = WebHistory::new("/app", "/");
        for location in ["/café", "/a b", "/about?x=1#top"] {
            assert!(history.push(location));
            let external = format!("https://example.com{}", history.href(location));
            assert_eq!(history.parse_external(&external).as_deref(), Some(location));
        }
    }
}
