/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems.
pub mod api_transport;

pub use api_transport::ApiTransport;
