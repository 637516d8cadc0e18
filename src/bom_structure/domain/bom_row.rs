/// One raw line of a BOM export, before any parsing or validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BomRow {
    pub position: String,
    pub part_number: String,
    pub description: String,
    pub quantity: String,
}

impl BomRow {
    pub fn new(
        position: impl Into<String>,
        part_number: impl Into<String>,
        description: impl Into<String>,
        quantity: impl Into<String>,
    ) -> Self {
        Self {
            position: position.into(),
            part_number: part_number.into(),
            description: description.into(),
            quantity: quantity.into(),
        }
    }

    /// Builds a row from positional fields.
    ///
    /// Missing trailing fields become empty strings, extra fields are ignored.
    pub fn from_fields<'a, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut fields = fields.into_iter();
        let mut next = || fields.next().unwrap_or_default().to_string();
        Self {
            position: next(),
            part_number: next(),
            description: next(),
            quantity: next(),
        }
    }

    /// Part number with surrounding whitespace removed
    pub fn trimmed_part_number(&self) -> &str {
        self.part_number.trim()
    }
}
