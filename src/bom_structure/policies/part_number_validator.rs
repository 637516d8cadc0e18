use crate::bom_structure::domain::RowError;
use crate::shared::error::BomError;
use crate::shared::Result;
use regex::Regex;

/// Part numbers matching any of these are rejected by default:
/// empty, `X<digits>_<Uppercase>...` placeholders and `_SUB<digits>` sub-kits.
pub const DEFAULT_INVALID_PATTERNS: [&str; 3] = [r"^$", r"^X\d+_[A-Z]", r"_SUB\d+"];

/// Maximum number of invalid-part-number patterns
const MAX_PATTERNS: usize = 64;

/// Maximum length of a single pattern
const MAX_PATTERN_LENGTH: usize = 255;

/// Rejects part numbers that match a configurable, ordered list of regexes.
#[derive(Debug, Clone)]
pub struct PartNumberValidator {
    patterns: Vec<Regex>,
}

impl PartNumberValidator {
    /// Compiles a validator from raw regex strings.
    ///
    /// # Errors
    /// - More than `MAX_PATTERNS` patterns
    /// - A pattern longer than `MAX_PATTERN_LENGTH`
    /// - A pattern that is not a valid regex
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if compiled.len() == MAX_PATTERNS {
                anyhow::bail!(
                    "Too many invalid part number patterns (maximum: {})",
                    MAX_PATTERNS
                );
            }
            if pattern.len() > MAX_PATTERN_LENGTH {
                return Err(BomError::InvalidPattern {
                    pattern: pattern.to_string(),
                    details: format!(
                        "Pattern is too long ({} bytes, maximum: {})",
                        pattern.len(),
                        MAX_PATTERN_LENGTH
                    ),
                }
                .into());
            }
            let regex = Regex::new(pattern).map_err(|e| BomError::InvalidPattern {
                pattern: pattern.to_string(),
                details: e.to_string(),
            })?;
            compiled.push(regex);
        }

        Ok(Self { patterns: compiled })
    }

    /// Returns the part number unchanged if no pattern matches it.
    ///
    /// # Errors
    /// `RowError::InvalidPartNumber` naming the first matching pattern.
    pub fn validate<'a>(&self, part_number: &'a str) -> std::result::Result<&'a str, RowError> {
        match self.patterns.iter().find(|re| re.is_match(part_number)) {
            Some(re) => Err(RowError::InvalidPartNumber {
                part_number: part_number.to_string(),
                pattern: re.as_str().to_string(),
            }),
            None => Ok(part_number),
        }
    }

    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.patterns.iter().map(Regex::as_str)
    }
}

impl Default for PartNumberValidator {
    fn default() -> Self {
        let patterns = DEFAULT_INVALID_PATTERNS
            .iter()
            .map(|p| Regex::new(p).expect("default part number patterns are valid"))
            .collect();
        Self { patterns }
    }
}
