use crate::bom_structure::domain::BomRow;
use crate::shared::Result;
use std::path::Path;

/// RowSource port for reading the raw rows of a BOM export
///
/// Implementations know the file format; the core only sees ordered
/// four-field rows with the header line already removed.
pub trait RowSource {
    /// Reads every data row of the BOM at `path`, in file order
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or is not a regular file
    /// - The file cannot be read or is not valid UTF-8
    fn read_rows(&self, path: &Path) -> Result<Vec<BomRow>>;
}
