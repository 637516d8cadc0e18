use bom_flat::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock SheetWriter that captures written workbooks instead of saving them
#[derive(Default, Clone)]
pub struct MockSheetWriter {
    pub written: Arc<Mutex<Vec<(PathBuf, Vec<Sheet>)>>>,
}

impl MockSheetWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workbook_count(&self) -> usize {
        self.written.lock().unwrap().len()
    }

    /// Sheets of the most recently written workbook
    pub fn last_sheets(&self) -> Vec<Sheet> {
        self.written
            .lock()
            .unwrap()
            .last()
            .map(|(_, sheets)| sheets.clone())
            .unwrap_or_default()
    }

    pub fn last_path(&self) -> Option<PathBuf> {
        self.written
            .lock()
            .unwrap()
            .last()
            .map(|(path, _)| path.clone())
    }
}

impl SheetWriter for MockSheetWriter {
    fn write_sheets(&self, sheets: &[Sheet], path: &Path) -> Result<()> {
        self.written
            .lock()
            .unwrap()
            .push((path.to_path_buf(), sheets.to_vec()));
        Ok(())
    }
}
