/// Spreadsheet adapters for persisting listings
mod xlsx_writer;

pub use xlsx_writer::{XlsxSheetWriter, XLSX_EXTENSION};
