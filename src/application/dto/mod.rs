/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod bom_request;
mod bom_response;

pub use bom_request::{BomRequest, BomRequestBuilder, DEFAULT_IGNORE_FILE};
pub use bom_response::BomResponse;
