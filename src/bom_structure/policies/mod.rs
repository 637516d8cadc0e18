mod part_number_validator;

pub use part_number_validator::{PartNumberValidator, DEFAULT_INVALID_PATTERNS};
