/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports (driven ports) are the only kind this tool needs:
/// the CLI drives the use case directly.
pub mod outbound;
