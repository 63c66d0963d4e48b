//! builtwith - client for the BuiltWith technology-detection API
//!
//! Given a domain, this library issues an authenticated lookup and parses
//! the JSON response into structured objects describing which web
//! technologies were detected on which URLs/subdomains, with detection
//! timestamps and a derived "currently live" flag.
//!
//! # Architecture
//!
//! The crate is organized into the following layers:
//!
//! - **Detection Domain** (`detection`): Parsed lookup results and
//!   timestamp normalization
//! - **Application Layer** (`application`): The `BuiltWith` client
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use builtwith::prelude::*;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<()> {
//! // Version 2: structured per-URL technology sets
//! let client = BuiltWith::new("YOUR_API_KEY", 2)?;
//!
//! if let LookupResult::Detail(info) = client.lookup("example.com").await? {
//!     for (url, technologies) in &info {
//!         for technology in technologies {
//!             println!(
//!                 "{} on {}: live = {}",
//!                 technology.name, url.domain, technology.currently_live
//!             );
//!         }
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod detection;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::network::HttpApiTransport;
    pub use crate::application::{ApiVersion, BuiltWith, LookupResult};
    pub use crate::detection::{
        DomainInfo, Technology, TechnologyEntry, UrlKey, UrlTechnologies,
    };
    pub use crate::ports::outbound::ApiTransport;
    pub use crate::shared::error::BuiltWithError;
    pub use crate::shared::Result;
}
