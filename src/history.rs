//! In-memory navigation history.
//!
//! Holds the current navigation path and the stack of visited paths.
//! Navigation events (push, replace, back, forward) are the only way the
//! current path changes; rendering reads it and never writes it.

/// Navigation stack kept entirely in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryHistory {
    entries: Vec<String>,
    index: usize,
}

impl MemoryHistory {
    /// Start with `initial_entries`, positioned on the last one.
    /// An empty list starts at `/`.
    pub fn new<I, S>(initial_entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: Vec<String> = initial_entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            entries.push("/".to_string());
        }
        let index = entries.len() - 1;
        Self { entries, index }
    }

    /// The current navigation path.
    pub fn location(&self) -> &str {
        &self.entries[self.index]
    }

    /// Navigate to `path`, discarding any forward entries.
    pub fn push(&mut self, path: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(path.into());
        self.index += 1;
    }

    /// Replace the current entry without growing the stack.
    pub fn replace(&mut self, path: impl Into<String>) {
        self.entries[self.index] = path.into();
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Move `delta` entries through the stack, clamped to its ends.
    /// Returns whether the position changed.
    pub fn go(&mut self, delta: isize) -> bool {
        let max = (self.entries.len() - 1) as isize;
        let target = (self.index as isize).saturating_add(delta).clamp(0, max) as usize;
        let moved = target != self.index;
        self.index = target;
        moved
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the stack holds at least one entry.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new(["/"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_last_initial_entry() {
        let history = MemoryHistory::new(["/", "/posts"]);
        assert_eq!(history.location(), "/posts");
        assert_eq!(history.len(), 2);
        assert!(history.can_go_back());
        assert!(!history.can_go_forward());
    }

    #[test]
    fn test_empty_initial_entries_start_at_root() {
        let history = MemoryHistory::new(Vec::<String>::new());
        assert_eq!(history.location(), "/");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = MemoryHistory::default();
        history.push("/posts");
        history.push("/missing");
        assert!(history.back());
        assert!(history.back());
        assert_eq!(history.location(), "/");

        history.push("/posts");
        assert_eq!(history.len(), 2);
        assert!(!history.forward());
        assert_eq!(history.location(), "/posts");
    }

    #[test]
    fn test_replace_keeps_length() {
        let mut history = MemoryHistory::new(["/", "/posts"]);
        history.replace("/other");
        assert_eq!(history.location(), "/other");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_go_clamps() {
        let mut history = MemoryHistory::new(["/a", "/b", "/c"]);
        assert!(history.go(-10));
        assert_eq!(history.location(), "/a");
        assert!(!history.back());
        assert!(history.go(isize::MAX));
        assert_eq!(history.location(), "/c");
        assert!(!history.go(0));
    }
}
