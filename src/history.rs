// history.rs

/// Ordered log of formatted operation records. Append-only apart from `clear`.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
    pub fn add(&mut self, entry: String) {
        self.entries.push(entry);
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn clear(&mut self) {
        self.entries.clear();
    }
    pub fn all(&self) -> &[String] {
        &self.entries
    }
    /// Owned copy of every record, oldest first.
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.clone()
    }
    /// The last `n` records; all of them when `n` exceeds the length.
    pub fn tail(&self, n: usize) -> &[String] {
        let start = self.entries.len().saturating_sub(n);
        &self.entries[start..]
    }
    /// Records containing `term`, case-sensitive, in insertion order.
    pub fn search(&self, term: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| entry.contains(term))
            .cloned()
            .collect()
    }
}
