/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports describe the external collaborators the application
/// core depends on; adapters provide the concrete implementations.
pub mod outbound;
