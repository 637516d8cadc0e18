use super::{BomRow, ItemPosition, NodeId, RowError};
use crate::bom_structure::policies::PartNumberValidator;

/// Column titles carried by the synthetic root node
pub(crate) const ROOT_PART_NUMBER: &str = "Part Number";
pub(crate) const ROOT_DESCRIPTION: &str = "Description";

/// One BOM line placed in the assembly hierarchy.
///
/// Nodes live in a [`BomTree`](super::BomTree) arena. The parent link is a
/// plain [`NodeId`], children are kept in attachment order.
#[derive(Debug, Clone)]
pub struct HierarchyNode {
    position: ItemPosition,
    part_number: String,
    description: String,
    quantity: u64,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl HierarchyNode {
    /// The synthetic root: empty position, header captions, quantity 1
    pub(crate) fn root() -> Self {
        Self {
            position: ItemPosition::root(),
            part_number: ROOT_PART_NUMBER.to_string(),
            description: ROOT_DESCRIPTION.to_string(),
            quantity: 1,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Validates a raw row into a node at `position` below `parent`.
    ///
    /// `position` is the row's item number, already parsed by the caller for
    /// the parent lookup. The part number is trimmed before validation. The
    /// quantity must be a non-negative integer (surrounding whitespace allowed).
    ///
    /// # Errors
    /// - `RowError::InvalidPartNumber` if the validator rejects the part number
    /// - `RowError::Format` for a malformed quantity
    pub fn from_row(
        row: &BomRow,
        position: ItemPosition,
        parent: NodeId,
        validator: &PartNumberValidator,
    ) -> Result<Self, RowError> {
        let part_number = validator.validate(row.trimmed_part_number())?;
        let quantity = parse_quantity(&row.quantity)?;

        Ok(Self {
            position,
            part_number: part_number.to_string(),
            description: row.description.clone(),
            quantity,
            parent: Some(parent),
            children: Vec::new(),
        })
    }

    pub fn position(&self) -> &ItemPosition {
        &self.position
    }

    pub fn part_number(&self) -> &str {
        &self.part_number
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Quantity per one unit of the immediate parent
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub(crate) fn attach_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

/// Nodes compare by part number only.
///
/// Two occurrences of the same part at different positions are "equal"; this
/// is for display and lookups, not structural comparison.
impl PartialEq for HierarchyNode {
    fn eq(&self, other: &Self) -> bool {
        self.part_number == other.part_number
    }
}

impl Eq for HierarchyNode {}

impl std::fmt::Display for HierarchyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -- {} -- {}",
            self.position, self.part_number, self.quantity
        )
    }
}

fn parse_quantity(text: &str) -> Result<u64, RowError> {
    text.trim()
        .parse::<u64>()
        .map_err(|_| RowError::format("quantity", text))
}
