/// Application layer - the BuiltWith lookup client
pub mod client;

pub use client::{ApiVersion, BuiltWith, LookupResult};
