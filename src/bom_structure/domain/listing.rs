/// Column titles of the indented listing
pub const INDENTED_HEADER: [&str; 4] = ["Item", "Part Number", "Description", "Qty."];

/// Column titles of the flattened listing
pub const FLAT_HEADER: [&str; 3] = ["Part Number", "Description", "Qty."];

/// A single spreadsheet value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Integer(u64),
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl From<u64> for Cell {
    fn from(value: u64) -> Self {
        Cell::Integer(value)
    }
}

/// Rows that can be laid out positionally in a sheet
pub trait ToCells {
    fn to_cells(&self) -> Vec<Cell>;
}

/// One line of the indented listing, quantity local to the parent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndentedRow {
    pub item: String,
    pub part_number: String,
    pub description: String,
    pub quantity: u64,
}

impl ToCells for IndentedRow {
    fn to_cells(&self) -> Vec<Cell> {
        vec![
            self.item.as_str().into(),
            self.part_number.as_str().into(),
            self.description.as_str().into(),
            self.quantity.into(),
        ]
    }
}

/// One part of the flattened listing, quantity per top-level assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatRow {
    pub part_number: String,
    pub description: String,
    pub total_quantity: u64,
}

impl ToCells for FlatRow {
    fn to_cells(&self) -> Vec<Cell> {
        vec![
            self.part_number.as_str().into(),
            self.description.as_str().into(),
            self.total_quantity.into(),
        ]
    }
}

/// A header line followed by data rows.
///
/// The header takes the place of the first entry produced by the tree walk;
/// that entry is not part of `rows`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing<R> {
    header: &'static [&'static str],
    rows: Vec<R>,
}

impl<R> Listing<R> {
    pub fn new(header: &'static [&'static str], rows: Vec<R>) -> Self {
        Self { header, rows }
    }

    pub fn header(&self) -> &[&'static str] {
        self.header
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Number of sheet lines including the header
    pub fn line_count(&self) -> usize {
        self.rows.len() + 1
    }
}

impl<R: ToCells> Listing<R> {
    /// Header and rows as positional cells, header first
    pub fn to_table(&self) -> Vec<Vec<Cell>> {
        let header: Vec<Cell> = self.header.iter().map(|&title| Cell::from(title)).collect();
        std::iter::once(header)
            .chain(self.rows.iter().map(ToCells::to_cells))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indented_row_cells() {
        let row = IndentedRow {
            item: "1.1".to_string(),
            part_number: "P200".to_string(),
            description: "Screw".to_string(),
            quantity: 4,
        };
        assert_eq!(
            row.to_cells(),
            vec![
                Cell::Text("1.1".to_string()),
                Cell::Text("P200".to_string()),
                Cell::Text("Screw".to_string()),
                Cell::Integer(4),
            ]
        );
    }

    #[test]
    fn test_listing_to_table_puts_header_first() {
        let listing = Listing::new(
            &FLAT_HEADER,
            vec![FlatRow {
                part_number: "P100".to_string(),
                description: "Widget".to_string(),
                total_quantity: 2,
            }],
        );
        let table = listing.to_table();
        assert_eq!(listing.line_count(), 2);
        assert_eq!(table.len(), 2);
        assert_eq!(
            table[0],
            vec![
                Cell::from("Part Number"),
                Cell::from("Description"),
                Cell::from("Qty.")
            ]
        );
        assert_eq!(table[1][2], Cell::Integer(2));
    }

    #[test]
    fn test_header_only_listing() {
        let listing: Listing<FlatRow> = Listing::new(&FLAT_HEADER, Vec::new());
        assert_eq!(listing.to_table().len(), 1);
        assert_eq!(listing.line_count(), 1);
    }
}
