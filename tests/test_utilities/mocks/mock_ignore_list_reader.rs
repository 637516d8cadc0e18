use bom_flat::prelude::*;
use std::path::Path;

/// Mock IgnoreListReader returning a fixed ignore set
#[derive(Default)]
pub struct MockIgnoreListReader {
    part_numbers: Vec<String>,
}

impl MockIgnoreListReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_part_number(mut self, part_number: &str) -> Self {
        self.part_numbers.push(part_number.to_string());
        self
    }
}

impl IgnoreListReader for MockIgnoreListReader {
    fn read_ignore_set(&self, _path: &Path) -> Result<IgnoreSet> {
        Ok(self.part_numbers.iter().collect())
    }
}
