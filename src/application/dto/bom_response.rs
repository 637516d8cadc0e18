use crate::bom_structure::domain::BomTree;
use crate::bom_structure::services::BuildReport;
use std::path::PathBuf;

/// BomResponse - Response DTO from converting one BOM export
///
/// Carries the reconstructed tree so callers can render or inspect it
/// after the workbook has been written.
#[derive(Debug, Clone)]
pub struct BomResponse {
    /// Reconstructed assembly hierarchy
    pub tree: BomTree,
    /// Row accounting for the build (attached / ignored / dropped)
    pub report: BuildReport,
    /// Where the workbook was written
    pub output_path: PathBuf,
}

impl BomResponse {
    pub fn new(tree: BomTree, report: BuildReport, output_path: PathBuf) -> Self {
        Self {
            tree,
            report,
            output_path,
        }
    }
}
