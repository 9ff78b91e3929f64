//! Curated skill vocabulary

/// Ordered, duplicate-free list of lowercase skill phrases
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    entries: Vec<String>,
}

impl Vocabulary {
    /// Parse a newline-delimited list; `#` comments and blank lines are skipped
    pub fn parse(text: &str) -> Self {
        let mut vocabulary = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            vocabulary.push(line);
        }
        vocabulary
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        for entry in entries {
            vocabulary.push(entry.as_ref());
        }
        vocabulary
    }

    /// Append an entry (lowercased). Returns false if it was already present.
    pub fn push(&mut self, entry: &str) -> bool {
        let entry = entry.trim().to_lowercase();
        if entry.is_empty() || self.entries.contains(&entry) {
            return false;
        }
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
