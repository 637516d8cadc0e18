use crate::bom_structure::domain::IgnoreSet;
use crate::shared::Result;
use std::path::Path;

/// IgnoreListReader port for loading the part numbers to leave out
pub trait IgnoreListReader {
    /// Loads the ignore list at `path`
    ///
    /// # Returns
    /// The ignore set; an empty set when the file does not exist
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read
    fn read_ignore_set(&self, path: &Path) -> Result<IgnoreSet>;
}
