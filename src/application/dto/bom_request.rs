use crate::adapters::outbound::spreadsheet::XLSX_EXTENSION;
use crate::shared::error::BomError;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// Default ignore list, looked up relative to the working directory
pub const DEFAULT_IGNORE_FILE: &str = "ignore.txt";

/// BomRequest - Request DTO for converting one BOM export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BomRequest {
    /// Path to the tab-delimited BOM export
    pub bom_path: PathBuf,
    /// Path to the ignore list (missing file means nothing is ignored)
    pub ignore_file: PathBuf,
    /// Directory for the workbook; defaults to the BOM's own directory
    pub output_dir: Option<PathBuf>,
    /// Report every dropped row instead of only the per-reason counts
    pub report_dropped_rows: bool,
}

impl BomRequest {
    pub fn builder() -> BomRequestBuilder {
        BomRequestBuilder::default()
    }

    /// Workbook path for this BOM: the part of the file name before the
    /// first `.`, with an `.xlsx` extension.
    ///
    /// # Errors
    /// Returns a validation error if the file name has nothing before its
    /// first `.` (e.g. `.txt`).
    pub fn output_path(&self) -> Result<PathBuf> {
        let base = self
            .bom_path
            .file_name()
            .map(|name| name.to_string_lossy())
            .and_then(|name| name.split('.').next().map(str::to_string))
            .filter(|base| !base.is_empty())
            .ok_or_else(|| BomError::Validation {
                message: format!(
                    "Cannot derive a workbook name from {}",
                    self.bom_path.display()
                ),
            })?;

        let dir = match &self.output_dir {
            Some(dir) => dir.as_path(),
            None => self.bom_path.parent().unwrap_or(Path::new("")),
        };
        Ok(dir.join(format!("{}.{}", base, XLSX_EXTENSION)))
    }
}

/// Builder for [`BomRequest`]
#[derive(Debug, Default)]
pub struct BomRequestBuilder {
    bom_path: Option<PathBuf>,
    ignore_file: Option<PathBuf>,
    output_dir: Option<PathBuf>,
    report_dropped_rows: bool,
}

impl BomRequestBuilder {
    pub fn bom_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.bom_path = Some(path.into());
        self
    }

    pub fn ignore_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.ignore_file = Some(path.into());
        self
    }

    pub fn output_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.output_dir = dir;
        self
    }

    pub fn report_dropped_rows(mut self, enabled: bool) -> Self {
        self.report_dropped_rows = enabled;
        self
    }

    /// # Errors
    /// Returns a validation error if no BOM path was set
    pub fn build(self) -> Result<BomRequest> {
        let bom_path = self.bom_path.ok_or_else(|| BomError::Validation {
            message: "bom_path is required".to_string(),
        })?;

        Ok(BomRequest {
            bom_path,
            ignore_file: self
                .ignore_file
                .unwrap_or_else(|| PathBuf::from(DEFAULT_IGNORE_FILE)),
            output_dir: self.output_dir,
            report_dropped_rows: self.report_dropped_rows,
        })
    }
}
