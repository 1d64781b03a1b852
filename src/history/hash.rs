use super::stack::{normalize_location, EntryStack};
use super::{decode, normalize_base, parse_url, HistoryAdapter, HistoryMode};

/// A [`HistoryAdapter`] that keeps the in-app location in the URL fragment,
/// so the server only ever sees the base path.
#[derive(Debug, Clone)]
pub struct HashHistory {
    base: String,
    stack: EntryStack,
}

impl HashHistory {
    pub fn new(base: &str, initial: &str) -> Self {
        Self {
            base: normalize_base(base),
            stack: EntryStack::new(initial),
        }
    }
}

impl Default for HashHistory {
    fn default() -> Self {
        Self::new("/", "/")
    }
}

impl HistoryAdapter for HashHistory {
    fn mode(&self) -> HistoryMode {
        HistoryMode::Hash
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
        format!("{}/#{}", self.base, location)
    }

    fn parse_external(&self, url: &str) -> Option<String> {
        let url = parse_url(url)?;
        let path = decode(url.path());
        if path.trim_end_matches('/') != self.base {
            return None;
        }

        match url.fragment() {
            None | Some("") => Some("/".to_string()),
            Some(fragment) => Some(normalize_location(&decode(fragment))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href() {
        let history = HashHistory::new("/app/", "/");
        assert_eq!(history.href("/"), "/app/#/");
        assert_eq!(history.href("/about"), "/app/#/about");

        let root = HashHistory::default();
        assert_eq!(root.href("/about"), "/#/about");
    }

    #[test]
    fn test_parse_external() {
        let history = HashHistory::new("/app", "/");
        assert_eq!(
            history.parse_external("https://example.com/app/#/about?x=1"),
            Some("/about?x=1".to_string())
        );
        assert_eq!(history.parse_external("/app/"), Some("/".to_string()));
        assert_eq!(history.parse_external("/app"), Some("/".to_string()));
        assert_eq!(history.parse_external("/other/#/about"), None);

        let root = HashHistory::default();
        assert_eq!(root.parse_external("/#/"), Some("/".to_string()));
    }

    #[test]
    fn test_href_round_trip() {
        let mut history = HashHistory::new("/app", "/");
        for location in ["/café", "/a b", "/about?x=1"] {
            assert!(history.push(location));
            let external = format!("https://example.com{}", history.href(location));
            assert_eq!(history.parse_external(&external).as_deref(), Some(location));
        }
    }
}
