use super::RowError;
use std::fmt;
use std::str::FromStr;

/// Dotted hierarchical item number, e.g. `1.2.3`.
///
/// Stored as its integer components so that `"1.02"` and `"1.2"` name the
/// same position. The empty sequence is the implicit root of every BOM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemPosition(Vec<u64>);

impl ItemPosition {
    /// The empty position held by the synthetic root
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parses a dotted position string.
    ///
    /// Components are trimmed before conversion. The empty string is the root
    /// position and never fails.
    ///
    /// # Errors
    /// `RowError::Format` if any component is not a non-negative integer,
    /// including empty components such as in `"1..2"`.
    pub fn parse(text: &str) -> Result<Self, RowError> {
        if text.is_empty() {
            return Ok(Self::root());
        }

        text.split('.')
            .map(|component| component.trim().parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
            .map_err(|_| RowError::format("item position", text))
    }

    /// Position of the enclosing assembly.
    ///
    /// The root is its own parent.
    pub fn parent(&self) -> Self {
        match self.0.split_last() {
            Some((_, init)) => Self(init.to_vec()),
            None => Self::root(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Nesting level; top-level items have depth 1
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn components(&self) -> &[u64] {
        &self.0
    }
}

impl FromStr for ItemPosition {
    type Err = RowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ItemPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut components = self.0.iter();
        if let Some(first) = components.next() {
            write!(f, "{}", first)?;
            for component in components {
                write!(f, ".{}", component)?;
            }
        }
        Ok(())
    }
}
