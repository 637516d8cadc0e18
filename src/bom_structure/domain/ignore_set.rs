use std::collections::HashSet;

/// Part numbers to leave out of both listings, together with their subtrees.
///
/// Entries and lookups are both trimmed, so `" P100 "` matches `"P100"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    part_numbers: HashSet<String>,
}

impl IgnoreSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses ignore-file content: one part number per line, blank lines skipped
    pub fn from_lines(content: &str) -> Self {
        content.lines().collect()
    }

    pub fn contains(&self, part_number: &str) -> bool {
        self.part_numbers.contains(part_number.trim())
    }

    pub fn len(&self) -> usize {
        self.part_numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.part_numbers.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let part_numbers = iter
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        Self { part_numbers }
    }
}
