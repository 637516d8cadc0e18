/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define what the conversion use case needs from the file
/// system, the spreadsheet library and the console.
pub mod ignore_list_reader;
pub mod progress_reporter;
pub mod row_source;
pub mod sheet_writer;

pub use ignore_list_reader::IgnoreListReader;
pub use progress_reporter::ProgressReporter;
pub use row_source::RowSource;
pub use sheet_writer::SheetWriter;
