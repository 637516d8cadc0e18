pub mod bom_row;
pub mod bom_tree;
pub mod hierarchy_node;
pub mod ignore_set;
pub mod item_position;
pub mod listing;
pub mod row_error;

pub use bom_row::BomRow;
pub use bom_tree::{BomTree, NodeId, Preorder};
pub use hierarchy_node::HierarchyNode;
pub use ignore_set::IgnoreSet;
pub use item_position::ItemPosition;
pub use listing::{Cell, FlatRow, IndentedRow, Listing, ToCells, FLAT_HEADER, INDENTED_HEADER};
pub use row_error::{RowError, RowOutcome};
