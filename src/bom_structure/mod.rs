//! BOM structure bounded context
//!
//! Pure hierarchy reconstruction and quantity rollup. Nothing in here touches
//! the file system or the console.
pub mod domain;
pub mod policies;
pub mod services;
