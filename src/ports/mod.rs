/// Ports module defining interfaces for hexagonal architecture
///
/// The BOM conversion core only talks to the outside world through the
/// outbound ports declared here.
pub mod outbound;
