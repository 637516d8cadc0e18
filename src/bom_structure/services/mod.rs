mod tree_builder;
mod tree_renderer;

pub use tree_builder::{BomTreeBuilder, BuildReport, DroppedRow};
pub use tree_renderer::TreeRenderer;
