use crate::bom_structure::domain::{BomRow, IgnoreSet};
use crate::ports::outbound::{IgnoreListReader, RowSource};
use crate::shared::error::BomError;
use crate::shared::security::validate_regular_file;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Field separator of BOM exports
const DELIMITER: u8 = b'\t';

/// FileSystemReader adapter for reading BOM exports and ignore lists
///
/// This adapter implements both the RowSource and IgnoreListReader ports.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after the safety checks (no symlinks, regular file,
    /// size limit)
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<Vec<u8>> {
        validate_regular_file(path, file_type)?;
        fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }

    /// Splits tab-delimited content into rows, discarding the first line
    fn parse_rows(path: &Path, content: &[u8]) -> Result<Vec<BomRow>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .has_headers(true)
            .flexible(true)
            .from_reader(content);

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|e| BomError::BomFileParseError {
                path: path.to_path_buf(),
                line: e.position().map(|p| p.line()).unwrap_or_default(),
                details: e.to_string(),
            })?;
            rows.push(BomRow::from_fields(record.iter()));
        }
        Ok(rows)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl RowSource for FileSystemReader {
    fn read_rows(&self, path: &Path) -> Result<Vec<BomRow>> {
        if !path.exists() {
            return Err(BomError::BomFileNotFound {
                path: path.to_path_buf(),
                suggestion: "Check the file name, or run without arguments to convert every *.txt file in the current directory.".to_string(),
            }
            .into());
        }

        let content = self
            .safe_read_file(path, "BOM file")
            .map_err(|e| BomError::BomFileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        Self::parse_rows(path, &content)
    }
}

impl IgnoreListReader for FileSystemReader {
    fn read_ignore_set(&self, path: &Path) -> Result<IgnoreSet> {
        if !path.exists() {
            return Ok(IgnoreSet::new());
        }

        let to_error = |details: String| BomError::IgnoreFileReadError {
            path: path.to_path_buf(),
            details,
        };
        let content = self
            .safe_read_file(path, "ignore file")
            .map_err(|e| to_error(e.to_string()))?;
        let content = String::from_utf8(content).map_err(|e| to_error(e.to_string()))?;

        Ok(IgnoreSet::from_lines(
            content.strip_prefix('\u{feff}').unwrap_or(&content),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_read_rows_skips_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("top.txt");
        fs::write(
            &path,
            "Item\tPart Number\tDescription\tQty\n1\tP100\tWidget\t2\n1.1\tP200 \tScrew\t4\n",
        )
        .unwrap();

        let rows = FileSystemReader::new().read_rows(&path).unwrap();
        assert_eq!(
            rows,
            vec![
                BomRow::new("1", "P100", "Widget", "2"),
                BomRow::new("1.1", "P200 ", "Screw", "4"),
            ]
        );
    }

    #[test]
    fn test_read_rows_pads_short_records() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("short.txt");
        fs::write(&path, "h1\th2\th3\th4\n1\tP100\n2\tP200\tGadget\t1\textra\n").unwrap();

        let rows = FileSystemReader::new().read_rows(&path).unwrap();
        assert_eq!(rows[0], BomRow::new("1", "P100", "", ""));
        assert_eq!(rows[1], BomRow::new("2", "P200", "Gadget", "1"));
    }

    #[test]
    fn test_read_rows_keeps_spaces_and_commas_in_description() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("desc.txt");
        fs::write(&path, "h\th\th\th\n1\tP100\tScrew, M4 x 10 \t8\n").unwrap();

        let rows = FileSystemReader::new().read_rows(&path).unwrap();
        assert_eq!(rows[0].description, "Screw, M4 x 10 ");
    }

    #[test]
    fn test_read_rows_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.txt");
        fs::write(&path, "Item\tPart Number\tDescription\tQty\n").unwrap();

        let rows = FileSystemReader::new().read_rows(&path).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_read_rows_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_rows(&temp_dir.path().join("missing.txt"));

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("BOM file not found"));
    }

    #[test]
    fn test_read_rows_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_rows(temp_dir.path());

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to read BOM file"));
        assert!(err_string.contains("not a regular file"));
    }

    #[test]
    fn test_read_rows_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("latin1.txt");
        fs::write(&path, b"h\th\th\th\n1\tP100\tWidget \xe9\t2\n").unwrap();

        let result = FileSystemReader::new().read_rows(&path);
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Failed to parse BOM file"));
    }

    #[test]
    fn test_read_ignore_set() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ignore.txt");
        fs::write(&path, "\u{feff}P100\n P200 \n\n").unwrap();

        let set = FileSystemReader::new().read_ignore_set(&path).unwrap();
        assert_eq!(set.len(), 2);
        assert!(set.contains("P100"));
        assert!(set.contains("P200"));
    }

    #[test]
    fn test_read_ignore_set_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let set = FileSystemReader::new()
            .read_ignore_set(&temp_dir.path().join("ignore.txt"))
            .unwrap();
        assert!(set.is_empty());
    }
}
