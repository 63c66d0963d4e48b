/// Network adapters for external API calls
mod http_transport;

pub use http_transport::HttpApiTransport;
