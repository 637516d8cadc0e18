//! bom-flat - BOM hierarchy reconstruction and parts list export
//!
//! This library rebuilds the assembly tree of a tab-delimited BOM export from
//! its dotted item positions, and derives an indented listing (hierarchy with
//! per-parent quantities) and a flattened listing (total quantity per part per
//! top-level assembly). It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_structure`): Item positions, nodes, the tree and its listings
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): File system, xlsx and console implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use bom_flat::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = GenerateWorkbookUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     XlsxSheetWriter::new(),
//!     StderrProgressReporter::new(),
//!     PartNumberValidator::default(),
//! );
//!
//! let request = BomRequest::builder().bom_path("top_assembly.txt").build()?;
//! let response = use_case.execute(request)?;
//!
//! println!("{}", TreeRenderer::render(&response.tree));
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bom_structure;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{discover_bom_files, FileSystemReader};
    pub use crate::adapters::outbound::spreadsheet::XlsxSheetWriter;
    pub use crate::application::dto::{BomRequest, BomResponse};
    pub use crate::application::read_models::{Sheet, WorkbookModelBuilder};
    pub use crate::application::use_cases::GenerateWorkbookUseCase;
    pub use crate::bom_structure::domain::{
        BomRow, BomTree, Cell, FlatRow, HierarchyNode, IgnoreSet, IndentedRow, ItemPosition,
        Listing, NodeId, RowError, RowOutcome,
    };
    pub use crate::bom_structure::policies::PartNumberValidator;
    pub use crate::bom_structure::services::{BomTreeBuilder, BuildReport, TreeRenderer};
    pub use crate::ports::outbound::{IgnoreListReader, ProgressReporter, RowSource, SheetWriter};
    pub use crate::shared::Result;
}
