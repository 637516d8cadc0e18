use bom_flat::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock RowSource serving canned rows per path
#[derive(Default)]
pub struct MockRowSource {
    files: HashMap<PathBuf, Vec<BomRow>>,
}

impl MockRowSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, rows: &[(&str, &str, &str, &str)]) -> Self {
        let rows = rows
            .iter()
            .map(|(position, part_number, description, quantity)| {
                BomRow::new(*position, *part_number, *description, *quantity)
            })
            .collect();
        self.files.insert(PathBuf::from(path), rows);
        self
    }
}

impl RowSource for MockRowSource {
    fn read_rows(&self, path: &Path) -> Result<Vec<BomRow>> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("BOM file not found: {}", path.display()))
    }
}
