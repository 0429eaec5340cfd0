//! Ordered attribute storage.
//!
//! Attributes keep their insertion order because serialization and
//! hydration both walk them in the order the markup author wrote them.
//! Lookups are a linear scan; real-world elements carry a handful of
//! attributes at most.

/// A single name/value attribute pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attr {
    pub name: String,
    pub value: String,
}

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttrMap {
    entries: Vec<Attr>,
}

impl AttrMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets `name` to `value`, replacing in place so the original
    /// position is kept for existing attributes.
    pub fn set(&mut self, name: &str, value: &str) {
        match self.entries.iter_mut().find(|attr| attr.name == name) {
            Some(attr) => attr.value = value.to_string(),
            None => self.entries.push(Attr {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    /// Removes `name`, reporting whether it was present.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|attr| attr.name != name);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Attr> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut attrs = AttrMap::new();
        attrs.set("id", "main");
        attrs.set("class", "box");
        assert_eq!(attrs.get("id"), Some("main"));
        assert_eq!(attrs.get("class"), Some("box"));
        assert_eq!(attrs.get("missing"), None);
        assert_eq!(attrs.len(), 2);
    }

    #[test]
    fn overwrite_keeps_position() {
        let mut attrs = AttrMap::new();
        attrs.set("a", "1");
        attrs.set("b", "2");
        attrs.set("a", "3");
        let names: Vec<&str> = attrs.iter().map(|attr| attr.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(attrs.get("a"), Some("3"));
    }

    #[test]
    fn remove_reports_presence() {
        let mut attrs = AttrMap::new();
        attrs.set("id", "x");
        assert!(attrs.remove("id"));
        assert!(!attrs.remove("id"));
        assert!(attrs.is_empty());
    }
}
