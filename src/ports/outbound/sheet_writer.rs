use crate::application::read_models::Sheet;
use crate::shared::Result;
use std::path::Path;

/// SheetWriter port for persisting the derived listings
///
/// This port abstracts the workbook format; the use case hands over the
/// sheets in order and a destination path.
pub trait SheetWriter {
    /// Writes `sheets`, in order, as one workbook at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The destination directory does not exist
    /// - The destination is a symbolic link
    /// - The workbook cannot be serialized or saved
    fn write_sheets(&self, sheets: &[Sheet], path: &Path) -> Result<()>;
}
