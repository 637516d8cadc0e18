use crate::bom_structure::domain::{BomRow, BomTree, IgnoreSet, RowError, RowOutcome};
use crate::bom_structure::policies::PartNumberValidator;

/// A row that did not make it into the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRow {
    /// 1-based index among the data rows (header excluded)
    pub row_number: usize,
    pub row: BomRow,
    pub reason: RowError,
}

/// What happened to the rows of one BOM while building its tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    pub rows_read: usize,
    pub attached: usize,
    pub ignored: usize,
    pub dropped: Vec<DroppedRow>,
}

impl BuildReport {
    pub fn dropped_count(&self) -> usize {
        self.dropped.len()
    }

    /// Number of dropped rows per reason, in a fixed order, zero counts omitted
    pub fn drop_counts(&self) -> Vec<(&'static str, usize)> {
        ["malformed", "invalid part number", "parent not found"]
            .into_iter()
            .map(|kind| {
                let count = self
                    .dropped
                    .iter()
                    .filter(|d| d.reason.kind() == kind)
                    .count();
                (kind, count)
            })
            .filter(|(_, count)| *count > 0)
            .collect()
    }

    fn record(&mut self, row_number: usize, row: BomRow, outcome: RowOutcome) {
        self.rows_read += 1;
        match outcome {
            RowOutcome::Attached(_) => self.attached += 1,
            RowOutcome::Ignored => self.ignored += 1,
            RowOutcome::Dropped(reason) => self.dropped.push(DroppedRow {
                row_number,
                row,
                reason,
            }),
        }
    }
}

/// BomTreeBuilder service turning an ordered row stream into a [`BomTree`].
///
/// Single pass, no backtracking: parents have to precede their children,
/// which depth-first BOM exports guarantee. Rows that are ignored or fail to
/// parse are left out and recorded in the [`BuildReport`]; building never fails.
pub struct BomTreeBuilder<'a> {
    validator: &'a PartNumberValidator,
    ignore_set: &'a IgnoreSet,
}

impl<'a> BomTreeBuilder<'a> {
    pub fn new(validator: &'a PartNumberValidator, ignore_set: &'a IgnoreSet) -> Self {
        Self {
            validator,
            ignore_set,
        }
    }

    /// Builds the tree for one BOM
    pub fn build<I>(&self, rows: I) -> (BomTree, BuildReport)
    where
        I: IntoIterator<Item = BomRow>,
    {
        let mut tree = BomTree::new();
        let mut report = BuildReport::default();

        for (index, row) in rows.into_iter().enumerate() {
            let outcome = self.add_row(&mut tree, &row);
            report.record(index + 1, row, outcome);
        }

        (tree, report)
    }

    /// Feeds a single row to `tree`.
    ///
    /// The ignore list is consulted before anything is parsed, so an ignored
    /// row is never reported as malformed.
    pub fn add_row(&self, tree: &mut BomTree, row: &BomRow) -> RowOutcome {
        if self.ignore_set.contains(row.trimmed_part_number()) {
            return RowOutcome::Ignored;
        }

        match tree.insert_row(row, self.validator) {
            Ok(id) => RowOutcome::Attached(id),
            Err(reason) => RowOutcome::Dropped(reason),
        }
    }
}
