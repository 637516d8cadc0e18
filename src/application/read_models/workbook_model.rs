//! Workbook read model built from a [`BomTree`]

use crate::bom_structure::domain::{BomTree, Cell};

/// Name of the sheet holding the indented listing
pub const INDENTED_SHEET: &str = "Indented";

/// Name of the sheet holding the flattened listing
pub const FLAT_SHEET: &str = "Flat";

/// A named table of cells, written row-major from the top-left corner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<Vec<Cell>>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, rows: Vec<Vec<Cell>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }
}

/// Builder turning a tree into the two sheets of the output workbook
pub struct WorkbookModelBuilder;

impl WorkbookModelBuilder {
    /// Indented sheet first, flat sheet second, each starting with its header
    pub fn build(tree: &BomTree) -> Vec<Sheet> {
        vec![
            Sheet::new(INDENTED_SHEET, tree.indented_rows().to_table()),
            Sheet::new(FLAT_SHEET, tree.flattened_rows().to_table()),
        ]
    }
}
