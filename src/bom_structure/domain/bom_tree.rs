use super::hierarchy_node::{ROOT_DESCRIPTION, ROOT_PART_NUMBER};
use super::{
    BomRow, FlatRow, HierarchyNode, IndentedRow, ItemPosition, Listing, RowError, FLAT_HEADER,
    INDENTED_HEADER,
};
use crate::bom_structure::policies::PartNumberValidator;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::ops::Index;

/// Handle to a node inside a [`BomTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// The synthetic root of every tree
    pub const ROOT: NodeId = NodeId(0);

    pub fn index(self) -> usize {
        self.0
    }
}

/// Assembly hierarchy reconstructed from a BOM export.
///
/// All nodes are owned by the tree in insertion order; a position index gives
/// constant-time parent lookup while rows are added. Once populated the tree
/// is only read.
#[derive(Debug, Clone)]
pub struct BomTree {
    nodes: Vec<HierarchyNode>,
    by_position: HashMap<ItemPosition, NodeId>,
}

impl BomTree {
    /// Creates a tree holding only the synthetic root
    pub fn new() -> Self {
        let mut by_position = HashMap::new();
        by_position.insert(ItemPosition::root(), NodeId::ROOT);
        Self {
            nodes: vec![HierarchyNode::root()],
            by_position,
        }
    }

    /// Adds one row below the node whose position is the row's parent position.
    ///
    /// Parents must already be present: a row that arrives before its parent
    /// is rejected and never revisited. When several nodes share a position,
    /// later rows attach to the first of them.
    ///
    /// # Errors
    /// - `RowError::Format` for a malformed position or quantity
    /// - `RowError::ParentNotFound` if no node has the parent position
    /// - `RowError::InvalidPartNumber` if the validator rejects the part number
    pub fn insert_row(
        &mut self,
        row: &BomRow,
        validator: &PartNumberValidator,
    ) -> Result<NodeId, RowError> {
        let position = ItemPosition::parse(&row.position)?;
        let parent_position = position.parent();
        let parent = match self.find(&parent_position) {
            Some(parent) => parent,
            None => {
                return Err(RowError::ParentNotFound {
                    position,
                    parent: parent_position,
                })
            }
        };

        let node = HierarchyNode::from_row(row, position, parent, validator)?;
        Ok(self.attach(parent, node))
    }

    fn attach(&mut self, parent: NodeId, node: HierarchyNode) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.by_position
            .entry(node.position().clone())
            .or_insert(id);
        self.nodes[parent.0].attach_child(id);
        self.nodes.push(node);
        id
    }

    /// Node registered for `position`, if any
    pub fn find(&self, position: &ItemPosition) -> Option<NodeId> {
        self.by_position.get(position).copied()
    }

    pub fn get(&self, id: NodeId) -> Option<&HierarchyNode> {
        self.nodes.get(id.0)
    }

    pub fn root(&self) -> &HierarchyNode {
        &self.nodes[NodeId::ROOT.0]
    }

    /// Number of nodes, the synthetic root included
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node ids in pre-order: root first, then each child's subtree in
    /// attachment order. Each call starts a fresh walk.
    pub fn preorder_ids(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            stack: vec![NodeId::ROOT],
        }
    }

    /// Nodes in pre-order
    pub fn preorder(&self) -> impl Iterator<Item = &HierarchyNode> + '_ {
        self.preorder_ids().map(move |id| &self[id])
    }

    /// Walks from `id` up to the root, `id` first
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = &HierarchyNode> + '_ {
        std::iter::successors(self.get(id), move |node| node.parent().map(|p| &self[p]))
    }

    /// Nodes from the root down to and including `id`
    pub fn ancestor_path(&self, id: NodeId) -> Vec<&HierarchyNode> {
        let mut path: Vec<_> = self.ancestors(id).collect();
        path.reverse();
        path
    }

    /// Quantity of the node per one top-level assembly: the product of the
    /// quantities along its ancestor path. Saturates instead of overflowing.
    pub fn rollup_quantity(&self, id: NodeId) -> u64 {
        self.ancestors(id)
            .fold(1u64, |acc, node| acc.saturating_mul(node.quantity()))
    }

    /// Hierarchy-preserving listing with per-parent quantities.
    ///
    /// The root's own row is replaced by the column titles.
    pub fn indented_rows(&self) -> Listing<IndentedRow> {
        let rows = self
            .preorder()
            .skip(1)
            .map(|node| IndentedRow {
                item: node.position().to_string(),
                part_number: node.part_number().to_string(),
                description: node.description().to_string(),
                quantity: node.quantity(),
            })
            .collect();
        Listing::new(&INDENTED_HEADER, rows)
    }

    /// Parts list with rolled-up quantities summed per (part number, description).
    ///
    /// Entries keep first-seen pre-order. The root takes part in aggregation
    /// like any node, and the first entry (normally the root's own) is then
    /// replaced by the column titles. A real part that shares the root's key
    /// is folded into that first entry and disappears with it.
    pub fn flattened_rows(&self) -> Listing<FlatRow> {
        let mut entries: Vec<FlatRow> = Vec::new();
        let mut slots: HashMap<(&str, &str), usize> = HashMap::new();

        for id in self.preorder_ids() {
            let node = &self[id];
            let rollup = self.rollup_quantity(id);
            match slots.entry((node.part_number(), node.description())) {
                Entry::Occupied(slot) => {
                    let entry = &mut entries[*slot.get()];
                    entry.total_quantity = entry.total_quantity.saturating_add(rollup);
                }
                Entry::Vacant(slot) => {
                    slot.insert(entries.len());
                    entries.push(FlatRow {
                        part_number: node.part_number().to_string(),
                        description: node.description().to_string(),
                        total_quantity: rollup,
                    });
                }
            }
        }

        Listing::new(&FLAT_HEADER, entries.into_iter().skip(1).collect())
    }

    /// True if a real node carries the root's captions as its key
    pub fn has_header_collision(&self) -> bool {
        self.preorder().skip(1).any(|node| {
            node.part_number() == ROOT_PART_NUMBER && node.description() == ROOT_DESCRIPTION
        })
    }
}

impl Default for BomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<NodeId> for BomTree {
    type Output = HierarchyNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0]
    }
}

/// Lazy pre-order walk over a [`BomTree`]
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    tree: &'a BomTree,
    stack: Vec<NodeId>,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.tree[id].children().iter().rev().copied());
        Some(id)
    }
}
