/// Filesystem adapters for file I/O operations
mod discovery;
mod file_reader;

pub use discovery::{discover_bom_files, BOM_EXTENSION};
pub use file_reader::FileSystemReader;
