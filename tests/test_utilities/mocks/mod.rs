/// Mock implementations for testing
mod mock_ignore_list_reader;
mod mock_progress_reporter;
mod mock_row_source;
mod mock_sheet_writer;

pub use mock_ignore_list_reader::MockIgnoreListReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_row_source::MockRowSource;
pub use mock_sheet_writer::MockSheetWriter;
