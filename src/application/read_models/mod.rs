//! Read models
//!
//! Presentation-ready views of the domain, handed to the outbound ports.

pub mod workbook_model;

pub use workbook_model::{Sheet, WorkbookModelBuilder, FLAT_SHEET, INDENTED_SHEET};
